//! Game events: a log of what happened, drained by the front end.

use serde::Serialize;

use duskwatch_logic::arena::BattleResult;
use duskwatch_logic::proficiency::ProficiencyType;
use duskwatch_logic::quest::MapLocation;
use duskwatch_logic::schedule::{DaySlotType, NightAction, PlaceAction};
use duskwatch_logic::stats::TrainingStat;

use crate::engine::GamePhase;

/// Result of one fighter schedule slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotOutcome {
    Trained { stat: TrainingStat, gain: u32 },
    Worked { gold: u32, big_success: bool },
    /// The shop slot has no effect yet.
    Browsed,
    Investigated,
    Socialized,
    Rested,
}

/// Result of one player place action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionOutcome {
    Talked,
    Investigated { clues_found: u32 },
    QuestAccepted { id: u32 },
    QuestDelivered { id: u32, reward: u32 },
    BoughtTonic { price: u32 },
    Rested,
}

/// Result of the night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NightOutcome {
    Explored { gold: u32, clue_found: bool },
    Battle(BattleResult),
    Rested,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    PhaseChanged {
        from: GamePhase,
        to: GamePhase,
    },
    SlotExecuted {
        index: usize,
        slot: DaySlotType,
        outcome: SlotOutcome,
    },
    ActionPerformed {
        location: MapLocation,
        action: PlaceAction,
        outcome: ActionOutcome,
    },
    LevelUp {
        kind: ProficiencyType,
        level: u32,
    },
    NightResolved {
        action: NightAction,
        outcome: NightOutcome,
    },
    DayStarted {
        day: u32,
    },
}

impl GameEvent {
    /// One-line description for logs and text front ends.
    pub fn describe(&self) -> String {
        match self {
            GameEvent::PhaseChanged { from, to } => format!("{:?} -> {:?}", from, to),
            GameEvent::SlotExecuted {
                index,
                slot,
                outcome,
            } => format!("slot {} {}: {:?}", index + 1, slot.label(), outcome),
            GameEvent::ActionPerformed {
                location,
                action,
                outcome,
            } => format!("{} at {}: {:?}", action.name(), location.name(), outcome),
            GameEvent::LevelUp { kind, level } => {
                format!("{} proficiency reached Lv.{}", kind.name(), level)
            }
            GameEvent::NightResolved { action, outcome } => match outcome {
                NightOutcome::Battle(b) if b.won => {
                    format!("{}: victory (+{}G)", action.name(), b.gold_reward)
                }
                NightOutcome::Battle(b) => {
                    format!("{}: defeat (+{}G)", action.name(), b.gold_reward)
                }
                other => format!("{}: {:?}", action.name(), other),
            },
            GameEvent::DayStarted { day } => format!("day {} begins", day),
        }
    }
}
