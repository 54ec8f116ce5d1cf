//! Save/Load functionality for persisting the campaign
//!
//! The game state is flattened into [`SaveData`] and stored as one JSON
//! blob in a key-value store. Numbers are read back as wide integers and
//! clamped, so a hand-edited or truncated save still loads. A bincode
//! snapshot of the same record is available for compact binary saves.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use duskwatch_logic::arena::{ArenaRank, ArenaRecord, BattleResult};
use duskwatch_logic::calendar::TOTAL_DAYS;
use duskwatch_logic::constants::{DAY_SLOT_COUNT, MAX_PLAYER_ACTIONS};
use duskwatch_logic::ending::EndingVar;
use duskwatch_logic::proficiency::{Proficiency, ProficiencyType};
use duskwatch_logic::quest::{MapLocation, QuestLog};
use duskwatch_logic::schedule::{NightAction, Schedule};
use duskwatch_logic::stats::{clamp_gauge, StatBlock};

use crate::state::GameState;

/// Version number for save format (increment when format changes)
pub const SAVE_VERSION: u32 = 1;

/// Key the campaign is stored under.
pub const SAVE_KEY: &str = "save_json";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError>;
    fn remove(&mut self, key: &str) -> Result<(), SaveError>;
}

/// In-memory store, for tests and the headless harness.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SaveError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One file per key inside a directory. The directory is created on the
/// first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SaveError> {
        match std::fs::remove_file(self.path(key)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Flat, serializable snapshot of a campaign.
///
/// Missing fields take the value of a brand-new campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    /// Save format version
    pub version: u32,
    /// RNG seed of the campaign
    pub seed: u64,
    pub day: i64,
    pub gold: i64,
    /// `(slot type, training stat)` index pairs
    pub schedule: Vec<(i64, i64)>,
    pub fighter_slot_progress: i64,
    pub player_actions_used: i64,
    pub player_location: i64,
    pub night_choice: i64,
    pub night_completed: bool,
    /// Strength, agility, dexterity, endurance
    pub stats: [i64; 4],
    /// Training, investigation, exploration, part-time
    pub proficiency_levels: [i64; 4],
    pub proficiency_exp: [i64; 4],
    pub stress: i64,
    pub fatigue: i64,
    /// Reputation, corp A, corp B, sync, ethics
    pub ending: [i64; 5],
    pub arena_rank: i64,
    pub arena_wins: i64,
    pub arena_losses: i64,
    pub promotion_wins: i64,
    pub promotion_losses: i64,
    pub quests: QuestLog,
    pub clues: i64,
    pub today_training_count: i64,
    pub today_gold_earned: i64,
    pub last_battle: Option<BattleResult>,
}

impl Default for SaveData {
    fn default() -> Self {
        Self::from_state(&GameState::new(), 0)
    }
}

fn to_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

impl SaveData {
    pub fn from_state(state: &GameState, seed: u64) -> Self {
        let p = &state.proficiencies;
        Self {
            version: SAVE_VERSION,
            seed,
            day: state.day.into(),
            gold: state.gold.into(),
            schedule: state.schedule.to_indices(),
            fighter_slot_progress: state.fighter_slot_progress as i64,
            player_actions_used: state.player_actions_used.into(),
            player_location: state.player_location.index().into(),
            night_choice: state.night_choice.index().into(),
            night_completed: state.night_completed,
            stats: [
                state.stats.strength.into(),
                state.stats.agility.into(),
                state.stats.dexterity.into(),
                state.stats.endurance.into(),
            ],
            proficiency_levels: ProficiencyType::ALL.map(|k| p.get(k).level.into()),
            proficiency_exp: ProficiencyType::ALL.map(|k| p.get(k).exp.into()),
            stress: state.stress.into(),
            fatigue: state.fatigue.into(),
            ending: EndingVar::ALL.map(|v| state.ending.get(v).into()),
            arena_rank: state.arena.rank.index().into(),
            arena_wins: state.arena.wins.into(),
            arena_losses: state.arena.losses.into(),
            promotion_wins: state.arena.promotion_wins.into(),
            promotion_losses: state.arena.promotion_losses.into(),
            quests: state.quests.clone(),
            clues: state.clues.into(),
            today_training_count: state.today_training_count.into(),
            today_gold_earned: state.today_gold_earned.into(),
            last_battle: state.last_battle,
        }
    }

    /// Rebuild the game state, clamping every value into its legal range.
    pub fn to_state(&self) -> GameState {
        let mut state = GameState::new();
        state.day = self.day.clamp(1, i64::from(TOTAL_DAYS)) as u32;
        state.gold = to_u32(self.gold);
        state.schedule = Schedule::from_indices(&self.schedule);
        state.fighter_slot_progress =
            self.fighter_slot_progress.clamp(0, DAY_SLOT_COUNT as i64) as usize;
        state.player_actions_used = to_u32(self.player_actions_used).min(MAX_PLAYER_ACTIONS);
        state.player_location = MapLocation::from_index(self.player_location);
        state.night_choice = NightAction::from_index(self.night_choice);
        state.night_completed = self.night_completed;

        let [strength, agility, dexterity, endurance] = self.stats.map(to_u32);
        state.stats = StatBlock {
            strength,
            agility,
            dexterity,
            endurance,
        };
        for (i, kind) in ProficiencyType::ALL.into_iter().enumerate() {
            *state.proficiencies.get_mut(kind) =
                Proficiency::sanitized(self.proficiency_levels[i], self.proficiency_exp[i]);
        }

        state.stress = clamp_gauge(self.stress);
        state.fatigue = clamp_gauge(self.fatigue);
        for (var, &value) in EndingVar::ALL.into_iter().zip(self.ending.iter()) {
            state.ending.set_clamped(var, value);
        }

        state.arena = ArenaRecord {
            rank: ArenaRank::from_index(self.arena_rank),
            wins: to_u32(self.arena_wins),
            losses: to_u32(self.arena_losses),
            promotion_wins: to_u32(self.promotion_wins),
            promotion_losses: to_u32(self.promotion_losses),
        };
        state.quests = self.quests.clone();
        state.clues = to_u32(self.clues);
        state.today_training_count = to_u32(self.today_training_count);
        state.today_gold_earned = to_u32(self.today_gold_earned);
        state.last_battle = self.last_battle;
        state
    }

    fn check_version(self) -> Result<Self, SaveError> {
        if self.version != SAVE_VERSION {
            return Err(SaveError::VersionMismatch {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(self)
    }
}

/// Result of loading a campaign
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGame {
    pub state: GameState,
    pub seed: u64,
}

impl From<SaveData> for LoadedGame {
    fn from(data: SaveData) -> Self {
        Self {
            state: data.to_state(),
            seed: data.seed,
        }
    }
}

/// Write the campaign to `store` under [`SAVE_KEY`].
pub fn save(store: &mut dyn KeyValueStore, state: &GameState, seed: u64) -> Result<(), SaveError> {
    let json = serde_json::to_string(&SaveData::from_state(state, seed))?;
    store.set(SAVE_KEY, &json)?;
    log::debug!("saved day {} ({} bytes)", state.day, json.len());
    Ok(())
}

/// Read the campaign back. `Ok(None)` when there is no save.
pub fn load(store: &dyn KeyValueStore) -> Result<Option<LoadedGame>, SaveError> {
    let Some(json) = store.get(SAVE_KEY)? else {
        return Ok(None);
    };
    let data: SaveData = serde_json::from_str(&json)?;
    Ok(Some(data.check_version()?.into()))
}

pub fn has_save(store: &dyn KeyValueStore) -> Result<bool, SaveError> {
    Ok(store.get(SAVE_KEY)?.is_some())
}

/// Delete the save.
pub fn clear(store: &mut dyn KeyValueStore) -> Result<(), SaveError> {
    store.remove(SAVE_KEY)
}

/// Save the campaign to a writer as a bincode snapshot
pub fn save_binary<W: Write>(writer: W, state: &GameState, seed: u64) -> Result<(), SaveError> {
    bincode::serialize_into(writer, &SaveData::from_state(state, seed))?;
    Ok(())
}

/// Load a bincode snapshot from a reader
pub fn load_binary<R: Read>(reader: R) -> Result<LoadedGame, SaveError> {
    let data: SaveData = bincode::deserialize_from(reader)?;
    Ok(data.check_version()?.into())
}

/// Errors that can occur during save/load
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Bincode(Box<bincode::ErrorKind>),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Json(e)
    }
}

impl From<Box<bincode::ErrorKind>> for SaveError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        SaveError::Bincode(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Json(e) => write!(f, "JSON error: {}", e),
            SaveError::Bincode(e) => write!(f, "Serialization error: {}", e),
            SaveError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Save version mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for SaveError {}
