//! Game engine - phase machine and main entry point for driving a campaign

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use duskwatch_logic::calendar::{DayPeriod, MonthCursor};
use duskwatch_logic::config::BalanceConfig;
use duskwatch_logic::constants::DAY_SLOT_COUNT;
use duskwatch_logic::quest::MapLocation;
use duskwatch_logic::schedule::{DaySlotType, NightAction, PlaceAction};

use crate::events::{ActionOutcome, GameEvent, NightOutcome, SlotOutcome};
use crate::persistence::{self, KeyValueStore, LoadedGame, SaveError};
use crate::state::{DaySummary, GameState, NightStatus, TopBar};
use crate::systems::*;

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Title,
    ScheduleSetting,
    DayMap,
    DayPlaceAction,
    NightChoice,
    NightAction,
    DaySummary,
}

impl GamePhase {
    pub fn period(self) -> DayPeriod {
        match self {
            GamePhase::Title | GamePhase::ScheduleSetting => DayPeriod::Day,
            GamePhase::DayMap | GamePhase::DayPlaceAction => DayPeriod::Day,
            GamePhase::NightChoice | GamePhase::NightAction => DayPeriod::Night,
            GamePhase::DaySummary => DayPeriod::Sleep,
        }
    }
}

/// Why a command was refused. A refused command never changes the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    WrongPhase(GamePhase),
    SlotOutOfRange(usize),
    DayOver,
    ActionUnavailable {
        action: PlaceAction,
        location: MapLocation,
    },
    UnknownQuest(u32),
    NothingToDeliver(MapLocation),
    NotEnoughGold {
        needed: u32,
        available: u32,
    },
    ArenaClosed {
        next_open: u32,
    },
    TooStressed(u32),
    CampaignComplete,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::WrongPhase(phase) => write!(f, "command not allowed during {:?}", phase),
            GameError::SlotOutOfRange(i) => {
                write!(f, "slot {} out of range (0..{})", i, DAY_SLOT_COUNT)
            }
            GameError::DayOver => write!(f, "no actions left today"),
            GameError::ActionUnavailable { action, location } => {
                write!(f, "{} is not possible at {}", action.name(), location.name())
            }
            GameError::UnknownQuest(id) => write!(f, "no quest {} on the board", id),
            GameError::NothingToDeliver(location) => {
                write!(f, "no active quest delivers to {}", location.name())
            }
            GameError::NotEnoughGold { needed, available } => {
                write!(f, "need {}G, have {}G", needed, available)
            }
            GameError::ArenaClosed { next_open } => {
                write!(f, "arena closed, next open on day {}", next_open)
            }
            GameError::TooStressed(stress) => {
                write!(f, "stress {} is too high, only rest is possible", stress)
            }
            GameError::CampaignComplete => write!(f, "the campaign is over"),
        }
    }
}

impl std::error::Error for GameError {}

/// What happened when the player took a place action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionReport {
    pub outcome: ActionOutcome,
    /// The fighter slot that ran alongside the action, if any were left.
    pub fighter: Option<(usize, SlotOutcome)>,
    /// True when this action used up the day and the game moved to night.
    pub day_over: bool,
}

/// Owns one campaign. All commands go through `&mut self`.
pub struct GameEngine {
    pub(crate) state: GameState,
    pub(crate) phase: GamePhase,
    pub(crate) config: BalanceConfig,
    seed: u64,
    pub(crate) rng: StdRng,
    pub(crate) events: Vec<GameEvent>,
    store: Option<Box<dyn KeyValueStore>>,
}

fn rng_for(seed: u64, day: u32) -> StdRng {
    StdRng::seed_from_u64(seed ^ u64::from(day).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

impl GameEngine {
    /// New campaign with default balance numbers.
    pub fn new(seed: u64) -> Self {
        Self::with_config(BalanceConfig::default(), seed)
    }

    pub fn with_config(config: BalanceConfig, seed: u64) -> Self {
        Self::from_state(GameState::new(), config, seed)
    }

    fn from_state(state: GameState, config: BalanceConfig, seed: u64) -> Self {
        let rng = rng_for(seed, state.day);
        Self {
            state,
            phase: GamePhase::Title,
            config,
            seed,
            rng,
            events: Vec::new(),
            store: None,
        }
    }

    /// Continue the saved campaign in `store`, or start a fresh one when
    /// there is no save. The store stays attached for autosaves.
    pub fn resume(
        store: Box<dyn KeyValueStore>,
        config: BalanceConfig,
        seed: u64,
    ) -> Result<Self, SaveError> {
        let mut engine = match persistence::load(store.as_ref())? {
            Some(loaded) => {
                log::info!("resuming saved campaign on day {}", loaded.state.day);
                Self::from_loaded(loaded, config)
            }
            None => {
                log::info!("no save found, starting a new campaign");
                Self::with_config(config, seed)
            }
        };
        engine.store = Some(store);
        Ok(engine)
    }

    fn from_loaded(loaded: LoadedGame, config: BalanceConfig) -> Self {
        Self::from_state(loaded.state, config, loaded.seed)
    }

    /// Autosave into `store` at every day boundary.
    pub fn attach_store(&mut self, store: Box<dyn KeyValueStore>) {
        self.store = Some(store);
    }

    pub fn detach_store(&mut self) -> Option<Box<dyn KeyValueStore>> {
        self.store.take()
    }

    // ── Accessors ──

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn top_bar(&self) -> TopBar {
        self.state.top_bar(self.phase.period())
    }

    pub fn night_status(&self) -> NightStatus {
        self.state.night_status()
    }

    pub fn summary(&self) -> DaySummary {
        self.state.summary()
    }

    /// Month view opened on the current month.
    pub fn calendar(&self) -> MonthCursor {
        MonthCursor::at_day(self.state.day)
    }

    /// Place actions the player could take right now at their location.
    pub fn available_actions(&self) -> Vec<PlaceAction> {
        let location = self.state.player_location;
        let mut actions: Vec<PlaceAction> = [
            PlaceAction::Talk,
            PlaceAction::Investigate,
            PlaceAction::BuyItem,
            PlaceAction::Rest,
        ]
        .into_iter()
        .filter(|a| a.available_at(location))
        .collect();
        if PlaceAction::AcceptQuest(0).available_at(location) {
            actions.extend(
                self.state
                    .quests
                    .available
                    .iter()
                    .map(|q| PlaceAction::AcceptQuest(q.id)),
            );
        }
        if self.state.quests.deliverable_at(location).is_some() {
            actions.push(PlaceAction::DeliverQuest);
        }
        actions
    }

    // ── Commands ──

    fn require(&self, allowed: &[GamePhase]) -> Result<(), GameError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(GameError::WrongPhase(self.phase))
        }
    }

    pub(crate) fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::debug!("phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Leave the title screen. A loaded game resumes where its save left
    /// off, so slots that already ran are never replayed.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.require(&[GamePhase::Title])?;
        let state = &self.state;
        let to = if state.night_completed {
            GamePhase::DaySummary
        } else if state.fighter_done() || state.is_day_over() {
            GamePhase::NightChoice
        } else if state.fighter_slot_progress > 0 || state.player_actions_used > 0 {
            GamePhase::DayMap
        } else {
            GamePhase::ScheduleSetting
        };
        self.set_phase(to);
        if to == GamePhase::NightChoice && !self.state.fighter_done() {
            finish_fighter_day(&mut self.state, &self.config, &mut self.rng, &mut self.events);
        }
        Ok(())
    }

    pub fn set_slot(&mut self, index: usize, slot: DaySlotType) -> Result<(), GameError> {
        self.require(&[GamePhase::ScheduleSetting])?;
        if self.state.schedule.set(index, slot) {
            Ok(())
        } else {
            Err(GameError::SlotOutOfRange(index))
        }
    }

    pub fn confirm_schedule(&mut self) -> Result<(), GameError> {
        self.require(&[GamePhase::ScheduleSetting])?;
        self.state.fighter_slot_progress = 0;
        log::debug!(
            "day {} schedule: {} training slot(s)",
            self.state.day,
            self.state.schedule.count_training()
        );
        self.set_phase(GamePhase::DayMap);
        Ok(())
    }

    /// Walk to a location. Moving is free; acting there costs an action.
    pub fn move_to(&mut self, location: MapLocation) -> Result<(), GameError> {
        self.require(&[GamePhase::DayMap])?;
        if self.state.is_day_over() {
            return Err(GameError::DayOver);
        }
        self.state.player_location = location;
        self.set_phase(GamePhase::DayPlaceAction);
        Ok(())
    }

    pub fn back_to_map(&mut self) -> Result<(), GameError> {
        self.require(&[GamePhase::DayPlaceAction])?;
        self.set_phase(GamePhase::DayMap);
        Ok(())
    }

    /// Take a place action. The fighter works through one schedule slot
    /// alongside it; spending the last action ends the day.
    pub fn perform(&mut self, action: PlaceAction) -> Result<ActionReport, GameError> {
        self.require(&[GamePhase::DayPlaceAction])?;
        let outcome = perform_action(
            &mut self.state,
            action,
            &self.config,
            &mut self.rng,
            &mut self.events,
        )?;
        let fighter = advance_fighter(&mut self.state, &self.config, &mut self.rng, &mut self.events);

        let day_over = self.state.is_day_over();
        if day_over {
            self.end_day();
        }
        Ok(ActionReport {
            outcome,
            fighter,
            day_over,
        })
    }

    /// Skip the rest of the day. Unused actions are lost; the fighter still
    /// finishes the schedule.
    pub fn finish_day(&mut self) -> Result<(), GameError> {
        self.require(&[GamePhase::DayMap, GamePhase::DayPlaceAction])?;
        self.end_day();
        Ok(())
    }

    fn end_day(&mut self) {
        finish_fighter_day(&mut self.state, &self.config, &mut self.rng, &mut self.events);
        self.set_phase(GamePhase::NightChoice);
    }

    pub fn choose_night(&mut self, action: NightAction) -> Result<NightOutcome, GameError> {
        self.require(&[GamePhase::NightChoice])?;
        check_night(&self.state, action)?;
        self.set_phase(GamePhase::NightAction);
        let outcome = resolve_night(
            &mut self.state,
            action,
            &self.config,
            &mut self.rng,
            &mut self.events,
        )?;
        self.set_phase(GamePhase::DaySummary);
        Ok(outcome)
    }

    /// Close the summary and begin the next day. Autosaves when a store
    /// is attached; a failed autosave is logged, not fatal.
    pub fn next_day(&mut self) -> Result<(), GameError> {
        self.require(&[GamePhase::DaySummary])?;
        if self.state.is_final_day() {
            return Err(GameError::CampaignComplete);
        }
        self.state.reset_for_new_day();
        self.events.push(GameEvent::DayStarted {
            day: self.state.day,
        });
        log::info!("day {} ({})", self.state.day, self.state.date());

        if let Some(store) = self.store.as_mut() {
            if let Err(e) = persistence::save(store.as_mut(), &self.state, self.seed) {
                log::warn!("autosave failed: {}", e);
            }
        }
        self.set_phase(GamePhase::ScheduleSetting);
        Ok(())
    }

    // ── Save / load ──

    /// Write the campaign into `store` under the save key.
    pub fn save_to(&self, store: &mut dyn KeyValueStore) -> Result<(), SaveError> {
        persistence::save(store, &self.state, self.seed)
    }

    /// Load a saved campaign. `Ok(None)` means there is nothing to load.
    pub fn load_from(
        store: &dyn KeyValueStore,
        config: BalanceConfig,
    ) -> Result<Option<Self>, SaveError> {
        Ok(persistence::load(store)?.map(|loaded| Self::from_loaded(loaded, config)))
    }

    /// Write a compact binary snapshot.
    pub fn save_binary<W: std::io::Write>(&self, writer: W) -> Result<(), SaveError> {
        persistence::save_binary(writer, &self.state, self.seed)
    }

    pub fn load_binary<R: std::io::Read>(
        reader: R,
        config: BalanceConfig,
    ) -> Result<Self, SaveError> {
        Ok(Self::from_loaded(persistence::load_binary(reader)?, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use duskwatch_logic::calendar::TOTAL_DAYS;
    use duskwatch_logic::constants::MAX_PLAYER_ACTIONS;
    use duskwatch_logic::stats::TrainingStat;

    fn to_day_map(engine: &mut GameEngine) {
        engine.start().unwrap();
        engine.confirm_schedule().unwrap();
    }

    #[test]
    fn test_engine_creation() {
        let engine = GameEngine::new(1);
        assert_eq!(engine.phase(), GamePhase::Title);
        assert_eq!(engine.state().day, 1);
        assert_eq!(engine.seed(), 1);
    }

    #[test]
    fn test_wrong_phase_is_refused_without_mutation() {
        let mut engine = GameEngine::new(1);
        let before = engine.state().clone();
        assert_eq!(
            engine.set_slot(0, DaySlotType::PartTime),
            Err(GameError::WrongPhase(GamePhase::Title))
        );
        assert_eq!(
            engine.choose_night(NightAction::Rest),
            Err(GameError::WrongPhase(GamePhase::Title))
        );
        assert_eq!(engine.next_day(), Err(GameError::WrongPhase(GamePhase::Title)));
        assert_eq!(engine.state(), &before);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_slot_out_of_range() {
        let mut engine = GameEngine::new(1);
        engine.start().unwrap();
        assert_eq!(
            engine.set_slot(DAY_SLOT_COUNT, DaySlotType::Rest),
            Err(GameError::SlotOutOfRange(DAY_SLOT_COUNT))
        );
    }

    #[test]
    fn test_full_day_cycle() {
        let mut engine = GameEngine::new(42);
        engine.start().unwrap();
        for i in 0..DAY_SLOT_COUNT {
            engine
                .set_slot(i, DaySlotType::Training(TrainingStat::Strength))
                .unwrap();
        }
        engine.confirm_schedule().unwrap();
        assert_eq!(engine.phase(), GamePhase::DayMap);

        engine.move_to(MapLocation::Home).unwrap();
        assert_eq!(engine.phase(), GamePhase::DayPlaceAction);

        for n in 1..=MAX_PLAYER_ACTIONS {
            let report = engine.perform(PlaceAction::Rest).unwrap();
            assert_eq!(report.outcome, ActionOutcome::Rested);
            assert!(report.fighter.is_some());
            assert_eq!(report.day_over, n == MAX_PLAYER_ACTIONS);
        }
        assert_eq!(engine.phase(), GamePhase::NightChoice);
        assert!(engine.state().fighter_done());
        assert_eq!(engine.state().stats.strength, 8);
        assert_eq!(engine.state().today_training_count, 4);

        let outcome = engine.choose_night(NightAction::Rest).unwrap();
        assert_eq!(outcome, NightOutcome::Rested);
        assert_eq!(engine.phase(), GamePhase::DaySummary);
        assert_eq!(engine.summary().today_training_count, 4);

        engine.next_day().unwrap();
        assert_eq!(engine.phase(), GamePhase::ScheduleSetting);
        assert_eq!(engine.state().day, 2);
        assert_eq!(engine.state().player_actions_used, 0);
        assert_eq!(engine.state().fighter_slot_progress, 0);

        let events = engine.drain_events();
        assert!(events.contains(&GameEvent::DayStarted { day: 2 }));
        assert!(events.contains(&GameEvent::PhaseChanged {
            from: GamePhase::NightAction,
            to: GamePhase::DaySummary
        }));
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_move_refused_when_day_over() {
        let mut engine = GameEngine::new(3);
        to_day_map(&mut engine);
        engine.state.player_actions_used = MAX_PLAYER_ACTIONS;
        assert_eq!(engine.move_to(MapLocation::Cafe), Err(GameError::DayOver));
        assert_eq!(engine.state().player_location, MapLocation::Home);
    }

    #[test]
    fn test_finish_day_runs_remaining_slots() {
        let mut engine = GameEngine::new(5);
        engine.start().unwrap();
        engine.set_slot(0, DaySlotType::PartTime).unwrap();
        engine.confirm_schedule().unwrap();
        engine.move_to(MapLocation::Cafe).unwrap();
        engine.perform(PlaceAction::Talk).unwrap();
        engine.back_to_map().unwrap();
        engine.finish_day().unwrap();

        assert_eq!(engine.phase(), GamePhase::NightChoice);
        assert!(engine.state().fighter_done());
        assert_eq!(engine.state().player_actions_used, 1);
        assert!(engine.state().gold >= 10);
    }

    #[test]
    fn test_failed_action_keeps_phase() {
        let mut engine = GameEngine::new(5);
        to_day_map(&mut engine);
        engine.move_to(MapLocation::Home).unwrap();
        assert!(matches!(
            engine.perform(PlaceAction::BuyItem),
            Err(GameError::ActionUnavailable { .. })
        ));
        assert_eq!(engine.phase(), GamePhase::DayPlaceAction);
        assert_eq!(engine.state().fighter_slot_progress, 0);
    }

    #[test]
    fn test_arena_closed_keeps_night_choice() {
        let mut engine = GameEngine::new(9);
        to_day_map(&mut engine);
        engine.finish_day().unwrap();
        assert_eq!(
            engine.choose_night(NightAction::Arena),
            Err(GameError::ArenaClosed { next_open: 3 })
        );
        assert_eq!(engine.phase(), GamePhase::NightChoice);
        assert!(engine.choose_night(NightAction::Exploration).is_ok());
    }

    #[test]
    fn test_available_actions() {
        let mut engine = GameEngine::new(2);
        to_day_map(&mut engine);
        engine.move_to(MapLocation::QuestBoard).unwrap();
        let actions = engine.available_actions();
        assert_eq!(actions.len(), engine.state().quests.available.len());
        assert!(actions
            .iter()
            .all(|a| matches!(a, PlaceAction::AcceptQuest(_))));

        engine.back_to_map().unwrap();
        engine.move_to(MapLocation::Home).unwrap();
        assert_eq!(engine.available_actions(), vec![PlaceAction::Rest]);
    }

    #[test]
    fn test_campaign_complete_after_final_day() {
        let mut engine = GameEngine::new(1);
        engine.state.day = TOTAL_DAYS;
        to_day_map(&mut engine);
        engine.finish_day().unwrap();
        engine.choose_night(NightAction::Rest).unwrap();
        assert_eq!(engine.next_day(), Err(GameError::CampaignComplete));
        assert_eq!(engine.state().day, TOTAL_DAYS);
        assert_eq!(engine.phase(), GamePhase::DaySummary);
    }

    #[test]
    fn test_top_bar_follows_phase() {
        let mut engine = GameEngine::new(1);
        to_day_map(&mut engine);
        assert_eq!(engine.top_bar().time, "08:00");
        engine.finish_day().unwrap();
        assert_eq!(engine.top_bar().time, "20:00");
        engine.choose_night(NightAction::Rest).unwrap();
        assert_eq!(engine.top_bar().time, "22:00");
    }

    #[test]
    fn test_same_seed_same_campaign() {
        fn play(seed: u64) -> GameState {
            let mut engine = GameEngine::new(seed);
            engine.start().unwrap();
            for _ in 0..12 {
                for i in 0..DAY_SLOT_COUNT {
                    engine.set_slot(i, DaySlotType::PartTime).unwrap();
                }
                engine.confirm_schedule().unwrap();
                engine.finish_day().unwrap();
                let night = if engine.night_status().can_choose(NightAction::Arena) {
                    NightAction::Arena
                } else {
                    NightAction::Rest
                };
                engine.choose_night(night).unwrap();
                engine.next_day().unwrap();
            }
            engine.state().clone()
        }
        assert_eq!(play(77), play(77));
    }

    #[test]
    fn test_autosave_on_next_day() {
        let mut engine = GameEngine::new(8);
        engine.attach_store(Box::new(MemoryStore::new()));
        to_day_map(&mut engine);
        engine.finish_day().unwrap();
        engine.choose_night(NightAction::Rest).unwrap();
        engine.next_day().unwrap();

        let store = engine.detach_store().unwrap();
        let loaded = GameEngine::load_from(store.as_ref(), BalanceConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(loaded.state(), engine.state());
        assert_eq!(loaded.phase(), GamePhase::Title);
        assert_eq!(loaded.seed(), 8);
    }

    #[test]
    fn test_resume_without_save_starts_fresh() {
        let engine =
            GameEngine::resume(Box::new(MemoryStore::new()), BalanceConfig::default(), 4).unwrap();
        assert_eq!(engine.state(), &GameState::new());
        assert_eq!(engine.phase(), GamePhase::Title);
    }

    fn strength_schedule(engine: &mut GameEngine) {
        for i in 0..DAY_SLOT_COUNT {
            engine
                .set_slot(i, DaySlotType::Training(TrainingStat::Strength))
                .unwrap();
        }
    }

    #[test]
    fn test_mid_day_save_resumes_on_map() {
        let mut engine = GameEngine::new(11);
        engine.start().unwrap();
        strength_schedule(&mut engine);
        engine.confirm_schedule().unwrap();
        engine.move_to(MapLocation::Home).unwrap();
        engine.perform(PlaceAction::Rest).unwrap();
        engine.perform(PlaceAction::Rest).unwrap();
        assert_eq!(engine.state().fighter_slot_progress, 2);

        let mut store = MemoryStore::new();
        engine.save_to(&mut store).unwrap();
        let mut loaded = GameEngine::load_from(&store, BalanceConfig::default())
            .unwrap()
            .unwrap();
        loaded.start().unwrap();
        assert_eq!(loaded.phase(), GamePhase::DayMap);
        assert_eq!(loaded.confirm_schedule(), Err(GameError::WrongPhase(GamePhase::DayMap)));

        loaded.finish_day().unwrap();
        assert_eq!(loaded.phase(), GamePhase::NightChoice);
        assert_eq!(loaded.state().today_training_count, 4);
        assert_eq!(loaded.state().stats.strength, 8);
        assert_eq!(loaded.state().player_actions_used, 2);
    }

    #[test]
    fn test_night_choice_save_resumes_at_night() {
        let mut engine = GameEngine::new(12);
        engine.start().unwrap();
        strength_schedule(&mut engine);
        engine.confirm_schedule().unwrap();
        engine.finish_day().unwrap();

        let mut store = MemoryStore::new();
        engine.save_to(&mut store).unwrap();
        let mut loaded = GameEngine::load_from(&store, BalanceConfig::default())
            .unwrap()
            .unwrap();
        loaded.start().unwrap();
        assert_eq!(loaded.phase(), GamePhase::NightChoice);
        assert_eq!(loaded.state(), engine.state());

        loaded.choose_night(NightAction::Rest).unwrap();
        assert_eq!(loaded.state().today_training_count, 4);
        assert_eq!(loaded.state().stats.strength, 8);
    }

    #[test]
    fn test_fresh_day_save_resumes_at_schedule() {
        let mut engine = GameEngine::new(13);
        engine.start().unwrap();
        let mut store = MemoryStore::new();
        engine.save_to(&mut store).unwrap();
        let mut loaded = GameEngine::load_from(&store, BalanceConfig::default())
            .unwrap()
            .unwrap();
        loaded.start().unwrap();
        assert_eq!(loaded.phase(), GamePhase::ScheduleSetting);
    }

    #[test]
    fn test_binary_roundtrip() {
        let mut engine = GameEngine::new(6);
        to_day_map(&mut engine);
        engine.finish_day().unwrap();
        engine.choose_night(NightAction::Exploration).unwrap();

        let mut buffer = Vec::new();
        engine.save_binary(&mut buffer).unwrap();
        let mut loaded = GameEngine::load_binary(&buffer[..], BalanceConfig::default()).unwrap();
        assert_eq!(loaded.state(), engine.state());

        // Saved after the night, so the title screen leads to the summary.
        loaded.start().unwrap();
        assert_eq!(loaded.phase(), GamePhase::DaySummary);
    }
}
