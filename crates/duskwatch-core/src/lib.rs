//! Duskwatch Core - day/night arena life-sim engine
//!
//! Owns the campaign state and drives it through the daily loop:
//! schedule the fighter, walk the town map, pick a night activity, read
//! the summary, repeat for three in-game years.
//!
//! # Architecture
//!
//! - **State**: one flat [`state::GameState`] aggregate, mutated in place
//! - **Systems**: functions that apply the day, town and night effects
//! - **Engine**: the [`engine::GameEngine`] phase machine; every command
//!   checks the current phase and is refused without side effects otherwise
//! - **Persistence**: JSON save blob in a key-value store, bincode snapshots
//!
//! # Example
//!
//! ```rust,no_run
//! use duskwatch_core::prelude::*;
//!
//! let mut engine = GameEngine::new(42);
//! engine.start()?;
//! engine.set_slot(0, DaySlotType::Training(TrainingStat::Strength))?;
//! engine.confirm_schedule()?;
//! engine.move_to(MapLocation::Cafe)?;
//! engine.perform(PlaceAction::Talk)?;
//! engine.finish_day()?;
//! engine.choose_night(NightAction::Rest)?;
//! engine.next_day()?;
//! # Ok::<(), GameError>(())
//! ```

pub mod engine;
pub mod events;
pub mod persistence;
pub mod state;
pub mod systems;

#[cfg(feature = "dev-tools")]
pub mod debug;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::{ActionReport, GameEngine, GameError, GamePhase};
    pub use crate::events::{ActionOutcome, GameEvent, NightOutcome, SlotOutcome};
    pub use crate::persistence::{FileStore, KeyValueStore, MemoryStore, SaveError};
    pub use crate::state::{DaySummary, GameState, NightStatus, TopBar};
    pub use duskwatch_logic::config::BalanceConfig;
    pub use duskwatch_logic::quest::MapLocation;
    pub use duskwatch_logic::schedule::{DaySlotType, NightAction, PlaceAction};
    pub use duskwatch_logic::stats::TrainingStat;
}
