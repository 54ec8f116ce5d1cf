//! Calendar arithmetic for dates, arena days, promotion matches and clock labels.
//!
//! The campaign runs three years of twelve 30-day months (1080 days).
//! Day numbers are 1-based throughout.
//!
//! ```
//! use duskwatch_logic::calendar::{self, GameDate};
//!
//! assert_eq!(calendar::date(31), GameDate { year: 1, month: 2, day: 1 });
//! assert!(calendar::is_promotion_day(90));
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{clock, DAY_SLOT_COUNT};

pub const DAYS_PER_MONTH: u32 = 30;
pub const MONTHS_PER_YEAR: u32 = 12;
pub const TOTAL_YEARS: u32 = 3;
pub const DAYS_PER_YEAR: u32 = DAYS_PER_MONTH * MONTHS_PER_YEAR;
pub const TOTAL_DAYS: u32 = DAYS_PER_YEAR * TOTAL_YEARS;

/// Promotion matches every three months.
pub const PROMOTION_INTERVAL: u32 = DAYS_PER_MONTH * 3;
/// The arena opens every third day.
pub const ARENA_INTERVAL: u32 = 3;

pub fn is_arena_day(day: u32) -> bool {
    day % ARENA_INTERVAL == 0
}

pub fn is_promotion_day(day: u32) -> bool {
    day > 0 && day % PROMOTION_INTERVAL == 0
}

/// Month of year (1–12).
pub fn month(day: u32) -> u32 {
    (day.saturating_sub(1) / DAYS_PER_MONTH) % MONTHS_PER_YEAR + 1
}

/// Campaign year (1-based).
pub fn year(day: u32) -> u32 {
    day.saturating_sub(1) / DAYS_PER_YEAR + 1
}

/// Day within the month (1–30).
pub fn day_of_month(day: u32) -> u32 {
    day.saturating_sub(1) % DAYS_PER_MONTH + 1
}

/// First arena day strictly after `day`.
pub fn next_arena_day(day: u32) -> u32 {
    (day / ARENA_INTERVAL + 1) * ARENA_INTERVAL
}

/// First promotion day strictly after `day`.
pub fn next_promotion_day(day: u32) -> u32 {
    (day / PROMOTION_INTERVAL + 1) * PROMOTION_INTERVAL
}

/// Absolute day number of the first day of a month.
pub fn month_start(year: u32, month: u32) -> u32 {
    ((year.max(1) - 1) * MONTHS_PER_YEAR + (month.clamp(1, MONTHS_PER_YEAR) - 1)) * DAYS_PER_MONTH
        + 1
}

/// Calendar date broken into year / month / day-of-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl std::fmt::Display for GameDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Y{} M{} D{}", self.year, self.month, self.day)
    }
}

pub fn date(day: u32) -> GameDate {
    GameDate {
        year: year(day),
        month: month(day),
        day: day_of_month(day),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarEventKind {
    Arena,
    PromotionMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub day: u32,
    pub kind: CalendarEventKind,
}

/// Scheduled events within one month. A promotion day is reported once,
/// as a promotion match, even though it is also an arena day.
pub fn month_events(year: u32, month: u32) -> Vec<CalendarEvent> {
    let start = month_start(year, month);
    (start..start + DAYS_PER_MONTH)
        .filter_map(|day| {
            if is_promotion_day(day) {
                Some(CalendarEvent {
                    day,
                    kind: CalendarEventKind::PromotionMatch,
                })
            } else if is_arena_day(day) {
                Some(CalendarEvent {
                    day,
                    kind: CalendarEventKind::Arena,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Browsing position for a month-view calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: u32,
    pub month: u32,
}

impl MonthCursor {
    /// Cursor positioned on the month containing `day`.
    pub fn at_day(day: u32) -> Self {
        Self {
            year: year(day).min(TOTAL_YEARS),
            month: month(day),
        }
    }

    /// Step back one month. Wraps December→January across years but never
    /// moves before year 1.
    pub fn prev_month(&mut self) {
        if self.month <= 1 {
            self.month = MONTHS_PER_YEAR;
            self.year = self.year.saturating_sub(1).max(1);
        } else {
            self.month -= 1;
        }
    }

    /// Step forward one month, never past the final campaign year.
    pub fn next_month(&mut self) {
        if self.month >= MONTHS_PER_YEAR {
            self.month = 1;
            self.year = (self.year + 1).min(TOTAL_YEARS);
        } else {
            self.month += 1;
        }
    }

    pub fn events(&self) -> Vec<CalendarEvent> {
        month_events(self.year, self.month)
    }

    /// Days of this month worth showing: those with an event, plus `today`.
    pub fn highlights(&self, today: u32) -> Vec<CalendarLine> {
        let start = month_start(self.year, self.month);
        let events = self.events();
        (start..start + DAYS_PER_MONTH)
            .filter_map(|day| {
                let event = events.iter().find(|e| e.day == day).map(|e| e.kind);
                let is_today = day == today;
                if event.is_some() || is_today {
                    Some(CalendarLine {
                        day_of_month: day - start + 1,
                        event,
                        is_today,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

/// One row of a month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarLine {
    pub day_of_month: u32,
    pub event: Option<CalendarEventKind>,
    pub is_today: bool,
}

/// Coarse time of day, used for the clock label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Day,
    Night,
    Sleep,
}

fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

pub fn slot_start_label(slot: usize) -> String {
    hour_label(clock::DAY_START_HOUR + slot as u32 * clock::HOURS_PER_SLOT)
}

pub fn slot_end_label(slot: usize) -> String {
    hour_label(clock::DAY_START_HOUR + (slot as u32 + 1) * clock::HOURS_PER_SLOT)
}

/// Clock shown in the top bar. During the day the clock follows the
/// fighter's slot progress.
pub fn current_time_label(slot_progress: usize, period: DayPeriod) -> String {
    match period {
        DayPeriod::Night => hour_label(clock::NIGHT_START_HOUR),
        DayPeriod::Sleep => hour_label(clock::SLEEP_HOUR),
        DayPeriod::Day => slot_start_label(slot_progress.min(DAY_SLOT_COUNT)),
    }
}
