//! Pure game logic for Duskwatch.
//!
//! This crate contains the formulas and value types of the day/night loop
//! with no RNG state, storage, or front end. Functions take plain data (and,
//! where chance is involved, a uniform roll supplied by the caller) and
//! return results, so every rule is unit-testable on its own.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`arena`] | Rank ladder, win odds, normal and promotion battles |
//! | [`calendar`] | Dates, arena/promotion days, month views, clock labels |
//! | [`config`] | Balance numbers with defaults, JSON overrides, validation |
//! | [`constants`] | Slot counts, gauge bounds, stress thresholds |
//! | [`ending`] | Ending variables clamped to −100..=100 |
//! | [`proficiency`] | Level 1–5 tracks with thresholds and bonuses |
//! | [`quest`] | Town map and daily delivery quests |
//! | [`schedule`] | Fighter day slots, player place actions, night choices |
//! | [`stats`] | Training stats and clamped condition gauges |

pub mod arena;
pub mod calendar;
pub mod config;
pub mod constants;
pub mod ending;
pub mod proficiency;
pub mod quest;
pub mod schedule;
pub mod stats;
