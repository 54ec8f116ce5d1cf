//! Delivery quests and the town map.
//!
//! Each morning the quest board is refilled with two or three delivery
//! jobs. Accepted quests are completed by performing a delivery at the
//! quest's drop-off location.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MapLocation {
    #[default]
    Home,
    Shop,
    InvestigationHq,
    TrainingGround,
    Cafe,
    QuestBoard,
}

impl MapLocation {
    pub const ALL: [MapLocation; 6] = [
        MapLocation::Home,
        MapLocation::Shop,
        MapLocation::InvestigationHq,
        MapLocation::TrainingGround,
        MapLocation::Cafe,
        MapLocation::QuestBoard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MapLocation::Home => "Home",
            MapLocation::Shop => "Shop",
            MapLocation::InvestigationHq => "Investigation HQ",
            MapLocation::TrainingGround => "Training Ground",
            MapLocation::Cafe => "Cafe",
            MapLocation::QuestBoard => "Quest Board",
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Unknown indices fall back to Home.
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(MapLocation::Home)
    }
}

/// Locations that send and receive deliveries, in rotation order.
const DELIVERY_ROUTE: [MapLocation; 4] = [
    MapLocation::Shop,
    MapLocation::TrainingGround,
    MapLocation::Cafe,
    MapLocation::InvestigationHq,
];

const BASE_REWARD: u32 = 8;
const REWARD_STEP: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: u32,
    pub title: String,
    pub pickup: MapLocation,
    pub deliver: MapLocation,
    pub gold_reward: u32,
    pub accepted: bool,
    pub completed: bool,
}

impl Quest {
    pub fn description(&self) -> String {
        format!(
            "Pick up a parcel at {} and deliver it to {}",
            self.pickup.name(),
            self.deliver.name()
        )
    }
}

/// Quests for one day. Deterministic in `day`.
pub fn daily_quests(day: u32) -> Vec<Quest> {
    let n = DELIVERY_ROUTE.len() as u32;
    let count = 2 + day % 2;

    (0..count)
        .map(|i| {
            let pickup = DELIVERY_ROUTE[((day + i) % n) as usize];
            let mut deliver = DELIVERY_ROUTE[((day + i + 1) % n) as usize];
            if pickup == deliver {
                deliver = DELIVERY_ROUTE[((day + i + 2) % n) as usize];
            }
            Quest {
                id: day * 100 + i,
                title: format!("Delivery #{}-{}", day, i + 1),
                pickup,
                deliver,
                gold_reward: BASE_REWARD + i * REWARD_STEP,
                accepted: false,
                completed: false,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestLog {
    pub available: Vec<Quest>,
    pub active: Vec<Quest>,
    pub completed: Vec<Quest>,
}

impl QuestLog {
    /// Replace the board with today's quests. Active quests carry over.
    pub fn generate_daily(&mut self, day: u32) {
        self.available = daily_quests(day);
    }

    /// Move an available quest to the active list.
    pub fn accept(&mut self, id: u32) -> Option<&Quest> {
        let pos = self.available.iter().position(|q| q.id == id)?;
        let mut quest = self.available.remove(pos);
        quest.accepted = true;
        self.active.push(quest);
        self.active.last()
    }

    /// First active quest that can be handed in at `location`.
    pub fn deliverable_at(&self, location: MapLocation) -> Option<&Quest> {
        self.active
            .iter()
            .find(|q| q.deliver == location && q.accepted && !q.completed)
    }

    /// Complete the quest deliverable at `location`, if any.
    pub fn complete_at(&mut self, location: MapLocation) -> Option<Quest> {
        let pos = self
            .active
            .iter()
            .position(|q| q.deliver == location && q.accepted && !q.completed)?;
        let mut quest = self.active.remove(pos);
        quest.completed = true;
        self.completed.push(quest.clone());
        Some(quest)
    }

    pub fn total_rewards_earned(&self) -> u32 {
        self.completed.iter().map(|q| q.gold_reward).sum()
    }
}
