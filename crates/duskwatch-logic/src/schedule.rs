//! Daily schedule slots, player place actions, and night choices.

use serde::{Deserialize, Serialize};

use crate::constants::DAY_SLOT_COUNT;
use crate::quest::MapLocation;
use crate::stats::TrainingStat;

/// What the fighter does during one scheduled block of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DaySlotType {
    Training(TrainingStat),
    PartTime,
    Shop,
    Investigation,
    Relationship,
    #[default]
    Rest,
}

impl DaySlotType {
    /// Stable index used in save data (0–5).
    pub fn index(self) -> u8 {
        match self {
            DaySlotType::Training(_) => 0,
            DaySlotType::PartTime => 1,
            DaySlotType::Shop => 2,
            DaySlotType::Investigation => 3,
            DaySlotType::Relationship => 4,
            DaySlotType::Rest => 5,
        }
    }

    /// Rebuild a slot from saved indices. Out-of-range slot indices become
    /// Rest; the stat index only matters for training.
    pub fn from_index(index: i64, stat_index: i64) -> Self {
        match index {
            0 => DaySlotType::Training(TrainingStat::from_index(stat_index)),
            1 => DaySlotType::PartTime,
            2 => DaySlotType::Shop,
            3 => DaySlotType::Investigation,
            4 => DaySlotType::Relationship,
            _ => DaySlotType::Rest,
        }
    }

    pub fn training_stat(self) -> Option<TrainingStat> {
        match self {
            DaySlotType::Training(stat) => Some(stat),
            _ => None,
        }
    }

    pub fn label(self) -> String {
        match self {
            DaySlotType::Training(stat) => format!("Training ({})", stat.name()),
            DaySlotType::PartTime => "Part-time".to_string(),
            DaySlotType::Shop => "Shop".to_string(),
            DaySlotType::Investigation => "Investigation".to_string(),
            DaySlotType::Relationship => "Relationship".to_string(),
            DaySlotType::Rest => "Rest".to_string(),
        }
    }
}

/// The fighter's plan for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub slots: [DaySlotType; DAY_SLOT_COUNT],
}

impl Default for Schedule {
    fn default() -> Self {
        Self::cleared()
    }
}

impl Schedule {
    /// Every slot set to Rest.
    pub fn cleared() -> Self {
        Self {
            slots: [DaySlotType::Rest; DAY_SLOT_COUNT],
        }
    }

    pub fn get(&self, index: usize) -> Option<DaySlotType> {
        self.slots.get(index).copied()
    }

    /// Set one slot. Returns false if `index` is out of range.
    pub fn set(&mut self, index: usize, slot: DaySlotType) -> bool {
        match self.slots.get_mut(index) {
            Some(s) => {
                *s = slot;
                true
            }
            None => false,
        }
    }

    /// Build from saved `(slot, stat)` index pairs. Missing trailing entries
    /// become Rest; extra entries are ignored.
    pub fn from_indices(indices: &[(i64, i64)]) -> Self {
        let mut schedule = Self::cleared();
        for (slot, &(kind, stat)) in schedule.slots.iter_mut().zip(indices) {
            *slot = DaySlotType::from_index(kind, stat);
        }
        schedule
    }

    pub fn to_indices(&self) -> Vec<(i64, i64)> {
        self.slots
            .iter()
            .map(|s| {
                let stat = s.training_stat().unwrap_or_default().index();
                (s.index() as i64, stat as i64)
            })
            .collect()
    }

    pub fn count_training(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, DaySlotType::Training(_)))
            .count()
    }
}

/// Something the player does at their current map location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceAction {
    Talk,
    Investigate,
    AcceptQuest(u32),
    DeliverQuest,
    BuyItem,
    Rest,
}

impl PlaceAction {
    /// Static location rules. Deliveries depend on the quest log and are
    /// allowed anywhere here; the engine checks for a matching quest.
    pub fn available_at(self, location: MapLocation) -> bool {
        use MapLocation::*;
        match self {
            PlaceAction::Talk => matches!(location, Cafe | TrainingGround),
            PlaceAction::Investigate => location == InvestigationHq,
            PlaceAction::AcceptQuest(_) => location == QuestBoard,
            PlaceAction::DeliverQuest => true,
            PlaceAction::BuyItem => location == Shop,
            PlaceAction::Rest => matches!(location, Home | Cafe),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlaceAction::Talk => "Talk",
            PlaceAction::Investigate => "Investigate",
            PlaceAction::AcceptQuest(_) => "Accept quest",
            PlaceAction::DeliverQuest => "Deliver quest",
            PlaceAction::BuyItem => "Buy item",
            PlaceAction::Rest => "Rest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NightAction {
    Exploration,
    Arena,
    #[default]
    Rest,
}

impl NightAction {
    pub fn index(self) -> u8 {
        match self {
            NightAction::Exploration => 0,
            NightAction::Arena => 1,
            NightAction::Rest => 2,
        }
    }

    pub fn from_index(index: i64) -> Self {
        match index {
            0 => NightAction::Exploration,
            1 => NightAction::Arena,
            _ => NightAction::Rest,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NightAction::Exploration => "Exploration",
            NightAction::Arena => "Arena",
            NightAction::Rest => "Rest",
        }
    }
}
