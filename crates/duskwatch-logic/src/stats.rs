//! Fighter stats and the clamped condition gauges (stress, fatigue).

use serde::{Deserialize, Serialize};

use crate::constants::gauges::{GAUGE_MAX, GAUGE_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrainingStat {
    #[default]
    Strength,
    Agility,
    Dexterity,
    Endurance,
}

impl TrainingStat {
    pub const ALL: [TrainingStat; 4] = [
        TrainingStat::Strength,
        TrainingStat::Agility,
        TrainingStat::Dexterity,
        TrainingStat::Endurance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TrainingStat::Strength => "Strength",
            TrainingStat::Agility => "Agility",
            TrainingStat::Dexterity => "Dexterity",
            TrainingStat::Endurance => "Endurance",
        }
    }

    /// Stable index used in save data.
    pub fn index(self) -> u8 {
        match self {
            TrainingStat::Strength => 0,
            TrainingStat::Agility => 1,
            TrainingStat::Dexterity => 2,
            TrainingStat::Endurance => 3,
        }
    }

    /// Inverse of [`TrainingStat::index`]; unknown values fall back to Strength.
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => TrainingStat::Agility,
            2 => TrainingStat::Dexterity,
            3 => TrainingStat::Endurance,
            _ => TrainingStat::Strength,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub strength: u32,
    pub agility: u32,
    pub dexterity: u32,
    pub endurance: u32,
}

impl StatBlock {
    pub fn get(&self, stat: TrainingStat) -> u32 {
        match stat {
            TrainingStat::Strength => self.strength,
            TrainingStat::Agility => self.agility,
            TrainingStat::Dexterity => self.dexterity,
            TrainingStat::Endurance => self.endurance,
        }
    }

    fn get_mut(&mut self, stat: TrainingStat) -> &mut u32 {
        match stat {
            TrainingStat::Strength => &mut self.strength,
            TrainingStat::Agility => &mut self.agility,
            TrainingStat::Dexterity => &mut self.dexterity,
            TrainingStat::Endurance => &mut self.endurance,
        }
    }

    /// Raise a stat by `amount × multiplier`, rounded to the nearest integer.
    /// Returns the actual gain.
    pub fn add(&mut self, stat: TrainingStat, amount: u32, multiplier: f32) -> u32 {
        let gain = (amount as f32 * multiplier.max(0.0)).round() as u32;
        let slot = self.get_mut(stat);
        *slot = slot.saturating_add(gain);
        gain
    }

    /// Sum of all stats; drives arena odds. Saturates at `u32::MAX`.
    pub fn total_power(&self) -> u32 {
        self.strength
            .saturating_add(self.agility)
            .saturating_add(self.dexterity)
            .saturating_add(self.endurance)
    }
}

/// Apply a signed change to a gauge, clamping into `GAUGE_MIN..=GAUGE_MAX`.
pub fn apply_gauge_delta(value: u32, delta: i32) -> u32 {
    (value as i64 + delta as i64).clamp(GAUGE_MIN as i64, GAUGE_MAX as i64) as u32
}

/// Clamp an untrusted gauge reading (e.g. from save data).
pub fn clamp_gauge(value: i64) -> u32 {
    value.clamp(GAUGE_MIN as i64, GAUGE_MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rounds_gain() {
        let mut s = StatBlock::default();
        assert_eq!(s.add(TrainingStat::Strength, 2, 1.0), 2);
        assert_eq!(s.add(TrainingStat::Strength, 2, 1.05), 2);
        assert_eq!(s.add(TrainingStat::Agility, 20, 1.05), 21);
        assert_eq!(s.strength, 4);
        assert_eq!(s.agility, 21);
        assert_eq!(s.total_power(), 25);
    }

    #[test]
    fn total_power_saturates() {
        let s = StatBlock {
            strength: 4_000_000_000,
            agility: 4_000_000_000,
            dexterity: 7,
            endurance: 0,
        };
        assert_eq!(s.total_power(), u32::MAX);
    }

    #[test]
    fn gauge_never_negative_or_over_max() {
        assert_eq!(apply_gauge_delta(2, -5), 0);
        assert_eq!(apply_gauge_delta(98, 5), 100);
        assert_eq!(apply_gauge_delta(40, 3), 43);
        assert_eq!(clamp_gauge(-12), 0);
        assert_eq!(clamp_gauge(400), 100);
    }

    #[test]
    fn stat_index_roundtrip_and_fallback() {
        for stat in TrainingStat::ALL {
            assert_eq!(TrainingStat::from_index(stat.index() as i64), stat);
        }
        assert_eq!(TrainingStat::from_index(42), TrainingStat::Strength);
        assert_eq!(TrainingStat::from_index(-1), TrainingStat::Strength);
    }
}
