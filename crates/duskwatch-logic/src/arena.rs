//! Arena battles: rank ladder, win odds and battle resolution.
//!
//! Win chance grows linearly with the fighter's total stat power and is
//! clamped to [0, 1]. Resolution takes the uniform roll as an argument so
//! the caller owns the RNG; a battle is won when `roll < chance`.
//!
//! ```
//! use duskwatch_logic::arena::{normal_win_chance, ArenaConfig};
//!
//! let cfg = ArenaConfig::default();
//! assert!((normal_win_chance(0, &cfg) - 0.3).abs() < 1e-6);
//! assert!((normal_win_chance(1000, &cfg) - 1.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum ArenaRank {
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
    Champion,
}

impl ArenaRank {
    pub const ALL: [ArenaRank; 5] = [
        ArenaRank::Bronze,
        ArenaRank::Silver,
        ArenaRank::Gold,
        ArenaRank::Platinum,
        ArenaRank::Champion,
    ];

    /// Next rank up, saturating at Champion.
    pub fn promoted(self) -> Self {
        match self {
            ArenaRank::Bronze => ArenaRank::Silver,
            ArenaRank::Silver => ArenaRank::Gold,
            ArenaRank::Gold => ArenaRank::Platinum,
            ArenaRank::Platinum | ArenaRank::Champion => ArenaRank::Champion,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ArenaRank::Bronze => "Bronze",
            ArenaRank::Silver => "Silver",
            ArenaRank::Gold => "Gold",
            ArenaRank::Platinum => "Platinum",
            ArenaRank::Champion => "Champion",
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Unknown indices clamp to the nearest end of the ladder.
    pub fn from_index(index: i64) -> Self {
        let i = index.clamp(0, Self::ALL.len() as i64 - 1) as usize;
        Self::ALL[i]
    }
}

/// Tunable arena numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub normal_base_chance: f32,
    pub promotion_base_chance: f32,
    /// Win chance added per point of total stat power.
    pub chance_per_power: f32,
    pub normal_win_gold: u32,
    pub normal_loss_gold: u32,
    pub promotion_win_gold: u32,
    pub promotion_loss_gold: u32,
    pub normal_win_reputation: i32,
    pub normal_loss_reputation: i32,
    pub promotion_win_reputation: i32,
    pub promotion_loss_reputation: i32,
    /// Condition cost of a night at the arena.
    pub stress: i32,
    pub fatigue: i32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            normal_base_chance: 0.3,
            promotion_base_chance: 0.2,
            chance_per_power: 0.005,
            normal_win_gold: 20,
            normal_loss_gold: 5,
            promotion_win_gold: 50,
            promotion_loss_gold: 10,
            normal_win_reputation: 3,
            normal_loss_reputation: -1,
            promotion_win_reputation: 10,
            promotion_loss_reputation: -3,
            stress: 3,
            fatigue: 5,
        }
    }
}

/// Rank and battle tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaRecord {
    pub rank: ArenaRank,
    pub wins: u32,
    pub losses: u32,
    pub promotion_wins: u32,
    pub promotion_losses: u32,
}

/// Outcome of one battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub won: bool,
    pub gold_reward: u32,
    pub reputation_change: i32,
    /// `(old, new)` ranks for promotion battles; equal on a loss.
    pub promotion: Option<(ArenaRank, ArenaRank)>,
}

impl BattleResult {
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// True when a promotion battle actually moved the rank.
    pub fn ranked_up(&self) -> bool {
        matches!(self.promotion, Some((old, new)) if old != new)
    }
}

fn win_chance(base: f32, power: u32, cfg: &ArenaConfig) -> f32 {
    (base + power as f32 * cfg.chance_per_power).clamp(0.0, 1.0)
}

pub fn normal_win_chance(power: u32, cfg: &ArenaConfig) -> f32 {
    win_chance(cfg.normal_base_chance, power, cfg)
}

pub fn promotion_win_chance(power: u32, cfg: &ArenaConfig) -> f32 {
    win_chance(cfg.promotion_base_chance, power, cfg)
}

/// Resolve a regular arena bout and update the tallies.
pub fn resolve_normal(
    record: &mut ArenaRecord,
    power: u32,
    roll: f32,
    cfg: &ArenaConfig,
) -> BattleResult {
    let won = roll < normal_win_chance(power, cfg);
    if won {
        record.wins += 1;
        BattleResult {
            won,
            gold_reward: cfg.normal_win_gold,
            reputation_change: cfg.normal_win_reputation,
            promotion: None,
        }
    } else {
        record.losses += 1;
        BattleResult {
            won,
            gold_reward: cfg.normal_loss_gold,
            reputation_change: cfg.normal_loss_reputation,
            promotion: None,
        }
    }
}

/// Resolve a promotion match. A win moves the record one rank up.
pub fn resolve_promotion(
    record: &mut ArenaRecord,
    power: u32,
    roll: f32,
    cfg: &ArenaConfig,
) -> BattleResult {
    let won = roll < promotion_win_chance(power, cfg);
    let old = record.rank;
    if won {
        record.promotion_wins += 1;
        record.rank = old.promoted();
        BattleResult {
            won,
            gold_reward: cfg.promotion_win_gold,
            reputation_change: cfg.promotion_win_reputation,
            promotion: Some((old, record.rank)),
        }
    } else {
        record.promotion_losses += 1;
        BattleResult {
            won,
            gold_reward: cfg.promotion_loss_gold,
            reputation_change: cfg.promotion_loss_reputation,
            promotion: Some((old, old)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chance_monotonic_and_clamped() {
        let cfg = ArenaConfig::default();
        let mut prev = -1.0;
        for power in (0..400).step_by(7) {
            let c = normal_win_chance(power, &cfg);
            assert!((0.0..=1.0).contains(&c));
            assert!(c >= prev);
            prev = c;

            let p = promotion_win_chance(power, &cfg);
            assert!((0.0..=1.0).contains(&p));
            assert!(p <= c);
        }
        assert!((normal_win_chance(140, &cfg) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn negative_base_clamps_to_zero() {
        let cfg = ArenaConfig {
            normal_base_chance: -2.0,
            ..Default::default()
        };
        assert_eq!(normal_win_chance(0, &cfg), 0.0);
    }

    #[test]
    fn normal_win_and_loss() {
        let cfg = ArenaConfig::default();
        let mut rec = ArenaRecord::default();

        let win = resolve_normal(&mut rec, 0, 0.1, &cfg);
        assert!(win.won);
        assert_eq!(win.gold_reward, 20);
        assert_eq!(win.reputation_change, 3);
        assert!(!win.is_promotion());

        let loss = resolve_normal(&mut rec, 0, 0.9, &cfg);
        assert!(!loss.won);
        assert_eq!(loss.gold_reward, 5);
        assert_eq!(loss.reputation_change, -1);

        assert_eq!((rec.wins, rec.losses), (1, 1));
        assert_eq!(rec.rank, ArenaRank::Bronze);
    }

    #[test]
    fn roll_equal_to_chance_loses() {
        let cfg = ArenaConfig::default();
        let mut rec = ArenaRecord::default();
        let chance = normal_win_chance(0, &cfg);
        assert!(!resolve_normal(&mut rec, 0, chance, &cfg).won);
    }

    #[test]
    fn promotion_win_ranks_up() {
        let cfg = ArenaConfig::default();
        let mut rec = ArenaRecord::default();
        let r = resolve_promotion(&mut rec, 50, 0.0, &cfg);
        assert!(r.won && r.ranked_up());
        assert_eq!(r.promotion, Some((ArenaRank::Bronze, ArenaRank::Silver)));
        assert_eq!(rec.rank, ArenaRank::Silver);
        assert_eq!(rec.promotion_wins, 1);
        assert_eq!(r.gold_reward, 50);

        let r = resolve_promotion(&mut rec, 0, 0.99, &cfg);
        assert!(!r.won && !r.ranked_up());
        assert_eq!(r.promotion, Some((ArenaRank::Silver, ArenaRank::Silver)));
        assert_eq!(rec.promotion_losses, 1);
        assert_eq!(r.reputation_change, -3);
    }

    #[test]
    fn rank_saturates_at_champion() {
        let cfg = ArenaConfig::default();
        let mut rec = ArenaRecord {
            rank: ArenaRank::Champion,
            ..Default::default()
        };
        let r = resolve_promotion(&mut rec, 500, 0.0, &cfg);
        assert!(r.won);
        assert!(!r.ranked_up());
        assert_eq!(rec.rank, ArenaRank::Champion);
    }

    #[test]
    fn rank_index_clamps() {
        assert_eq!(ArenaRank::from_index(-3), ArenaRank::Bronze);
        assert_eq!(ArenaRank::from_index(2), ArenaRank::Gold);
        assert_eq!(ArenaRank::from_index(77), ArenaRank::Champion);
    }
}
