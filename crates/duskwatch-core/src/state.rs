//! The game-state aggregate and read-only views derived from it.

use serde::{Deserialize, Serialize};

use duskwatch_logic::arena::{ArenaRank, ArenaRecord, BattleResult};
use duskwatch_logic::calendar::{self, DayPeriod, GameDate};
use duskwatch_logic::constants::{gauges, DAY_SLOT_COUNT, MAX_PLAYER_ACTIONS};
use duskwatch_logic::ending::{EndingVar, EndingVariables};
use duskwatch_logic::proficiency::{Proficiencies, ProficiencyType};
use duskwatch_logic::quest::{MapLocation, QuestLog};
use duskwatch_logic::schedule::{NightAction, Schedule};
use duskwatch_logic::stats::{apply_gauge_delta, StatBlock};

/// Everything that changes over a campaign. Owned by the engine and
/// mutated in place; daily fields reset at the day boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub day: u32,
    pub gold: u32,

    pub schedule: Schedule,
    /// Fighter slots already executed today (0–4).
    pub fighter_slot_progress: usize,

    pub player_actions_used: u32,
    pub player_location: MapLocation,

    pub night_choice: NightAction,
    pub night_completed: bool,

    pub stats: StatBlock,
    pub proficiencies: Proficiencies,

    /// Condition gauges, always within 0..=100.
    pub stress: u32,
    pub fatigue: u32,

    pub ending: EndingVariables,
    pub arena: ArenaRecord,
    pub quests: QuestLog,
    pub clues: u32,

    pub today_training_count: u32,
    pub today_gold_earned: u32,
    pub last_battle: Option<BattleResult>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh campaign on day 1 with the first quest board posted.
    pub fn new() -> Self {
        let mut quests = QuestLog::default();
        quests.generate_daily(1);
        Self {
            day: 1,
            gold: 0,
            schedule: Schedule::cleared(),
            fighter_slot_progress: 0,
            player_actions_used: 0,
            player_location: MapLocation::Home,
            night_choice: NightAction::Rest,
            night_completed: false,
            stats: StatBlock::default(),
            proficiencies: Proficiencies::default(),
            stress: 0,
            fatigue: 0,
            ending: EndingVariables::default(),
            arena: ArenaRecord::default(),
            quests,
            clues: 0,
            today_training_count: 0,
            today_gold_earned: 0,
            last_battle: None,
        }
    }

    // ── Accumulators ──

    /// Add income and count it towards today's earnings.
    pub fn earn_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
        self.today_gold_earned = self.today_gold_earned.saturating_add(amount);
    }

    /// Gold that isn't income (debug grants, refunds).
    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Deduct gold. Returns false, leaving gold untouched, if short.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        match self.gold.checked_sub(amount) {
            Some(rest) => {
                self.gold = rest;
                true
            }
            None => false,
        }
    }

    pub fn add_stress(&mut self, delta: i32) {
        self.stress = apply_gauge_delta(self.stress, delta);
    }

    pub fn add_fatigue(&mut self, delta: i32) {
        self.fatigue = apply_gauge_delta(self.fatigue, delta);
    }

    // ── Queries ──

    pub fn total_power(&self) -> u32 {
        self.stats.total_power()
    }

    pub fn date(&self) -> GameDate {
        calendar::date(self.day)
    }

    pub fn is_arena_open(&self) -> bool {
        calendar::is_arena_day(self.day)
    }

    pub fn is_promotion_day(&self) -> bool {
        calendar::is_promotion_day(self.day)
    }

    pub fn is_day_over(&self) -> bool {
        self.player_actions_used >= MAX_PLAYER_ACTIONS
    }

    pub fn actions_left(&self) -> u32 {
        MAX_PLAYER_ACTIONS.saturating_sub(self.player_actions_used)
    }

    pub fn fighter_done(&self) -> bool {
        self.fighter_slot_progress >= DAY_SLOT_COUNT
    }

    pub fn is_final_day(&self) -> bool {
        self.day >= calendar::TOTAL_DAYS
    }

    // ── Day boundary ──

    /// Advance to the next day and clear all per-day fields. Long-running
    /// progress (stats, gauges, proficiencies, arena, quests in hand) stays.
    pub fn reset_for_new_day(&mut self) {
        self.day += 1;
        self.fighter_slot_progress = 0;
        self.player_actions_used = 0;
        self.player_location = MapLocation::Home;
        self.night_choice = NightAction::Rest;
        self.night_completed = false;
        self.today_training_count = 0;
        self.today_gold_earned = 0;
        self.last_battle = None;
        self.schedule = Schedule::cleared();
        self.quests.generate_daily(self.day);
    }

    // ── Views ──

    pub fn night_status(&self) -> NightStatus {
        let arena = if self.is_promotion_day() {
            ArenaStatus::PromotionMatch
        } else if self.is_arena_open() {
            ArenaStatus::Open
        } else {
            ArenaStatus::Closed {
                next_open: calendar::next_arena_day(self.day),
            }
        };
        NightStatus {
            arena,
            stress_locked: gauges::is_stress_locked(self.stress),
            stress_warning: gauges::is_stress_warning(self.stress),
        }
    }

    /// Header values; the clock depends on which part of the day the
    /// front end is showing.
    pub fn top_bar(&self, period: DayPeriod) -> TopBar {
        TopBar {
            date: self.date(),
            day: self.day,
            gold: self.gold,
            time: calendar::current_time_label(self.fighter_slot_progress, period),
            stress: self.stress,
            fatigue: self.fatigue,
            rank: self.arena.rank,
            actions_used: self.player_actions_used,
            actions_max: MAX_PLAYER_ACTIONS,
        }
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary {
            date: self.date(),
            day: self.day,
            stats: self.stats,
            total_power: self.total_power(),
            rank: self.arena.rank,
            wins: self.arena.wins,
            losses: self.arena.losses,
            proficiency_levels: ProficiencyType::ALL
                .iter()
                .map(|&kind| (kind, self.proficiencies.get(kind).level))
                .collect(),
            ending: EndingVar::ALL
                .iter()
                .map(|&var| (self.ending.label(var), self.ending.get(var)))
                .collect(),
            night: self.night_choice,
            battle: self.last_battle,
            today_training_count: self.today_training_count,
            today_gold_earned: self.today_gold_earned,
            gold: self.gold,
            stress: self.stress,
            fatigue: self.fatigue,
            clues: self.clues,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArenaStatus {
    Open,
    PromotionMatch,
    Closed { next_open: u32 },
}

/// What the night-choice screen needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NightStatus {
    pub arena: ArenaStatus,
    pub stress_locked: bool,
    pub stress_warning: bool,
}

impl NightStatus {
    pub fn can_choose(&self, action: NightAction) -> bool {
        match action {
            NightAction::Rest => true,
            NightAction::Exploration => !self.stress_locked,
            NightAction::Arena => {
                !self.stress_locked && !matches!(self.arena, ArenaStatus::Closed { .. })
            }
        }
    }
}

/// End-of-day report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: GameDate,
    pub day: u32,
    pub stats: StatBlock,
    pub total_power: u32,
    pub rank: ArenaRank,
    pub wins: u32,
    pub losses: u32,
    pub proficiency_levels: Vec<(ProficiencyType, u32)>,
    pub ending: Vec<(&'static str, i32)>,
    pub night: NightAction,
    pub battle: Option<BattleResult>,
    pub today_training_count: u32,
    pub today_gold_earned: u32,
    pub gold: u32,
    pub stress: u32,
    pub fatigue: u32,
    pub clues: u32,
}

/// Always-visible header values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopBar {
    pub date: GameDate,
    pub day: u32,
    pub gold: u32,
    pub time: String,
    pub stress: u32,
    pub fatigue: u32,
    pub rank: ArenaRank,
    pub actions_used: u32,
    pub actions_max: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use duskwatch_logic::schedule::DaySlotType;

    #[test]
    fn new_state_defaults() {
        let s = GameState::new();
        assert_eq!(s.day, 1);
        assert_eq!(s.gold, 0);
        assert_eq!(s.quests.available.len(), 3);
        assert!(!s.is_day_over());
        assert_eq!(s.actions_left(), MAX_PLAYER_ACTIONS);
        assert!(!s.is_arena_open());
    }

    #[test]
    fn gauges_clamp() {
        let mut s = GameState::new();
        s.add_stress(-10);
        s.add_fatigue(-1);
        assert_eq!((s.stress, s.fatigue), (0, 0));
        s.add_stress(250);
        assert_eq!(s.stress, 100);
    }

    #[test]
    fn spend_gold_refuses_overdraft() {
        let mut s = GameState::new();
        s.earn_gold(15);
        assert_eq!(s.today_gold_earned, 15);
        assert!(!s.spend_gold(20));
        assert_eq!(s.gold, 15);
        assert!(s.spend_gold(10));
        assert_eq!(s.gold, 5);
    }

    #[test]
    fn reset_clears_daily_fields_only() {
        let mut s = GameState::new();
        s.schedule.set(0, DaySlotType::PartTime);
        s.fighter_slot_progress = 4;
        s.player_actions_used = 4;
        s.player_location = MapLocation::Cafe;
        s.night_choice = NightAction::Arena;
        s.night_completed = true;
        s.today_training_count = 2;
        s.earn_gold(30);
        s.add_stress(12);
        s.stats.strength = 6;
        s.quests.accept(100);

        s.reset_for_new_day();

        assert_eq!(s.day, 2);
        assert_eq!(s.schedule, Schedule::cleared());
        assert_eq!(s.fighter_slot_progress, 0);
        assert_eq!(s.player_actions_used, 0);
        assert_eq!(s.player_location, MapLocation::Home);
        assert_eq!(s.night_choice, NightAction::Rest);
        assert!(!s.night_completed);
        assert_eq!(s.today_training_count, 0);
        assert_eq!(s.today_gold_earned, 0);

        assert_eq!(s.gold, 30);
        assert_eq!(s.stress, 12);
        assert_eq!(s.stats.strength, 6);
        assert_eq!(s.quests.active.len(), 1);
        assert!(s.quests.available.iter().all(|q| q.id / 100 == 2));
    }

    #[test]
    fn night_status_rules() {
        let mut s = GameState::new();
        let status = s.night_status();
        assert_eq!(status.arena, ArenaStatus::Closed { next_open: 3 });
        assert!(!status.can_choose(NightAction::Arena));
        assert!(status.can_choose(NightAction::Exploration));

        s.day = 90;
        assert_eq!(s.night_status().arena, ArenaStatus::PromotionMatch);
        s.add_stress(85);
        let status = s.night_status();
        assert!(status.stress_locked);
        assert!(!status.can_choose(NightAction::Arena));
        assert!(!status.can_choose(NightAction::Exploration));
        assert!(status.can_choose(NightAction::Rest));
    }

    #[test]
    fn top_bar_clock_follows_fighter() {
        let mut s = GameState::new();
        assert_eq!(s.top_bar(DayPeriod::Day).time, "08:00");
        s.fighter_slot_progress = 2;
        s.player_actions_used = 2;
        let bar = s.top_bar(DayPeriod::Day);
        assert_eq!(bar.time, "14:00");
        assert_eq!((bar.actions_used, bar.actions_max), (2, MAX_PLAYER_ACTIONS));
        assert_eq!(s.top_bar(DayPeriod::Night).time, "20:00");
    }

    #[test]
    fn summary_lists_every_track() {
        let s = GameState::new();
        let summary = s.summary();
        assert_eq!(summary.proficiency_levels.len(), 4);
        assert_eq!(summary.ending.len(), 5);
        assert_eq!(summary.rank, ArenaRank::Bronze);
    }
}
