//! Balance configuration: every tunable number the day loop uses.
//!
//! [`BalanceConfig::default`] reproduces the shipped balance. A JSON file
//! may override any subset of fields; missing fields keep their defaults.
//!
//! ```
//! use duskwatch_logic::config::{validate_config, BalanceConfig};
//!
//! let cfg = BalanceConfig::from_json(r#"{ "training": { "base_amount": 3 } }"#).unwrap();
//! assert_eq!(cfg.training.base_amount, 3);
//! assert_eq!(cfg.training.fatigue, 3);
//! assert!(validate_config(&cfg).is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::arena::ArenaConfig;

/// Fighter training slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Stat points per session before the proficiency multiplier.
    pub base_amount: u32,
    pub fatigue: u32,
    pub stress: u32,
    pub exp: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            base_amount: 2,
            fatigue: 3,
            stress: 1,
            exp: 3,
        }
    }
}

/// Fighter part-time slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PartTimeConfig {
    pub reward: u32,
    pub big_success_reward: u32,
    pub big_success_chance: f32,
    pub fatigue: u32,
    pub exp: u32,
}

impl Default for PartTimeConfig {
    fn default() -> Self {
        Self {
            reward: 10,
            big_success_reward: 20,
            big_success_chance: 0.1,
            fatigue: 1,
            exp: 2,
        }
    }
}

/// Investigation, both as a fighter slot and as a player action at HQ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestigationConfig {
    pub stress: u32,
    pub exp: u32,
    /// Base chance a player investigation turns up a clue.
    pub clue_chance: f32,
}

impl Default for InvestigationConfig {
    fn default() -> Self {
        Self {
            stress: 2,
            exp: 3,
            clue_chance: 0.5,
        }
    }
}

/// Recovery amounts for the various ways to rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    pub day_rest_fatigue: u32,
    pub day_rest_stress: u32,
    pub relationship_stress: u32,
    pub night_rest_fatigue: u32,
    pub night_rest_stress: u32,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            day_rest_fatigue: 3,
            day_rest_stress: 2,
            relationship_stress: 1,
            night_rest_fatigue: 5,
            night_rest_stress: 5,
        }
    }
}

/// Player-side town actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TownConfig {
    pub talk_stress_relief: u32,
    pub talk_reputation: i32,
    pub tonic_price: u32,
    pub tonic_fatigue_relief: u32,
}

impl Default for TownConfig {
    fn default() -> Self {
        Self {
            talk_stress_relief: 2,
            talk_reputation: 1,
            tonic_price: 10,
            tonic_fatigue_relief: 5,
        }
    }
}

/// Night exploration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorationConfig {
    pub stress: u32,
    pub fatigue: u32,
    pub gold: u32,
    pub exp: u32,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            stress: 5,
            fatigue: 3,
            gold: 5,
            exp: 4,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub training: TrainingConfig,
    pub part_time: PartTimeConfig,
    pub investigation: InvestigationConfig,
    pub recovery: RecoveryConfig,
    pub town: TownConfig,
    pub exploration: ExplorationConfig,
    pub arena: ArenaConfig,
}

impl BalanceConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Balance validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A probability outside [0, 1], tagged with the field name.
    ChanceOutOfRange(&'static str, f32),
    /// Arena odds must not fall as the fighter grows stronger.
    NegativePowerSlope(f32),
    /// A big success must pay at least as much as a normal shift.
    BigSuccessBelowReward { reward: u32, big_success_reward: u32 },
    /// The shop must charge something for a tonic.
    FreeTonic,
    /// Training that raises nothing makes the schedule pointless.
    ZeroTrainingAmount,
}

/// Validate a balance configuration, returning all errors found.
pub fn validate_config(cfg: &BalanceConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    let chances = [
        ("part_time.big_success_chance", cfg.part_time.big_success_chance),
        ("investigation.clue_chance", cfg.investigation.clue_chance),
        ("arena.normal_base_chance", cfg.arena.normal_base_chance),
        ("arena.promotion_base_chance", cfg.arena.promotion_base_chance),
    ];
    for (name, value) in chances {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ConfigError::ChanceOutOfRange(name, value));
        }
    }

    if cfg.arena.chance_per_power < 0.0 {
        errors.push(ConfigError::NegativePowerSlope(cfg.arena.chance_per_power));
    }
    if cfg.part_time.big_success_reward < cfg.part_time.reward {
        errors.push(ConfigError::BigSuccessBelowReward {
            reward: cfg.part_time.reward,
            big_success_reward: cfg.part_time.big_success_reward,
        });
    }
    if cfg.town.tonic_price == 0 {
        errors.push(ConfigError::FreeTonic);
    }
    if cfg.training.base_amount == 0 {
        errors.push(ConfigError::ZeroTrainingAmount);
    }

    errors
}
