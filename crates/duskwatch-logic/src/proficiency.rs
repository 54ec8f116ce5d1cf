//! Proficiency tracks: experience, leveling and level-gated bonuses.
//!
//! Each of the four proficiency categories levels from 1 to 5. Practice
//! grants experience; crossing the threshold for the current level
//! consumes that much experience and raises the level. Leftover
//! experience carries over, and is discarded once the cap is reached.
//!
//! ```
//! use duskwatch_logic::proficiency::Proficiency;
//!
//! let mut p = Proficiency::new();
//! assert!(p.add_exp(12));
//! assert_eq!(p.level, 2);
//! assert_eq!(p.exp, 2);
//! ```
//!
//! # Bonuses
//!
//! Higher levels unlock multiplicative and additive modifiers consumed by
//! the engine's formulas (training gain, part-time big-success chance,
//! investigation success, and so on).

use serde::{Deserialize, Serialize};

use crate::constants::proficiency::{EXP_THRESHOLDS, MAX_LEVEL, MIN_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProficiencyType {
    Training,
    Investigation,
    Exploration,
    PartTime,
}

impl ProficiencyType {
    pub const ALL: [ProficiencyType; 4] = [
        ProficiencyType::Training,
        ProficiencyType::Investigation,
        ProficiencyType::Exploration,
        ProficiencyType::PartTime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProficiencyType::Training => "Training",
            ProficiencyType::Investigation => "Investigation",
            ProficiencyType::Exploration => "Exploration",
            ProficiencyType::PartTime => "Part-time",
        }
    }
}

/// Level and experience for one proficiency category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proficiency {
    /// Current level (1–5).
    pub level: u32,
    /// Experience accumulated towards the next level.
    pub exp: u32,
}

impl Default for Proficiency {
    fn default() -> Self {
        Self::new()
    }
}

impl Proficiency {
    pub fn new() -> Self {
        Self {
            level: MIN_LEVEL,
            exp: 0,
        }
    }

    /// Build from untrusted values, clamping level into range and zeroing
    /// experience at the cap.
    pub fn sanitized(level: i64, exp: i64) -> Self {
        let level = level.clamp(MIN_LEVEL as i64, MAX_LEVEL as i64) as u32;
        let exp = if level >= MAX_LEVEL {
            0
        } else {
            exp.clamp(0, u32::MAX as i64) as u32
        };
        Self { level, exp }
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Experience required for the next level, or 0 at the cap.
    pub fn threshold(&self) -> u32 {
        if self.is_max_level() {
            0
        } else {
            EXP_THRESHOLDS[self.level as usize]
        }
    }

    pub fn exp_to_next(&self) -> u32 {
        self.threshold().saturating_sub(self.exp)
    }

    /// Progress towards the next level in [0, 1]; 1.0 at the cap.
    pub fn exp_ratio(&self) -> f32 {
        if self.is_max_level() {
            return 1.0;
        }
        let required = self.threshold();
        if required == 0 {
            0.0
        } else {
            (self.exp as f32 / required as f32).min(1.0)
        }
    }

    /// Add experience. Returns true if at least one level was gained.
    pub fn add_exp(&mut self, amount: u32) -> bool {
        if self.is_max_level() {
            return false;
        }

        self.exp = self.exp.saturating_add(amount);
        let mut leveled = false;

        while !self.is_max_level() && self.exp >= self.threshold() {
            self.exp -= self.threshold();
            self.level += 1;
            leveled = true;
        }

        if self.is_max_level() {
            self.exp = 0;
        }

        leveled
    }

    // ── Training ──

    /// Stat gain multiplier (+5% from level 2).
    pub fn training_stat_multiplier(&self) -> f32 {
        if self.level >= 2 {
            1.05
        } else {
            1.0
        }
    }

    /// Fatigue removed from each training session (level 3).
    pub fn training_fatigue_reduction(&self) -> u32 {
        if self.level >= 3 {
            1
        } else {
            0
        }
    }

    /// Injury chance reduction factor (level 4).
    pub fn injury_reduction(&self) -> f32 {
        if self.level >= 4 {
            0.5
        } else {
            0.0
        }
    }

    pub fn advanced_training_unlocked(&self) -> bool {
        self.level >= 5
    }

    // ── Investigation ──

    pub fn investigation_success_bonus(&self) -> f32 {
        if self.level >= 2 {
            0.05
        } else {
            0.0
        }
    }

    pub fn extra_clue_chance(&self) -> f32 {
        if self.level >= 3 {
            0.15
        } else {
            0.0
        }
    }

    pub fn advanced_investigation_unlocked(&self) -> bool {
        self.level >= 4
    }

    // ── Exploration ──

    /// Extra time blocks granted during night exploration (level 2).
    pub fn exploration_time_bonus(&self) -> u32 {
        if self.level >= 2 {
            2
        } else {
            0
        }
    }

    // ── Part-time ──

    pub fn part_time_big_success_bonus(&self) -> f32 {
        let mut bonus = 0.0;
        if self.level >= 2 {
            bonus += 0.03;
        }
        if self.level >= 4 {
            bonus += 0.05;
        }
        bonus
    }

    pub fn advanced_part_time_unlocked(&self) -> bool {
        self.level >= 5
    }
}

/// One proficiency record per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proficiencies {
    pub training: Proficiency,
    pub investigation: Proficiency,
    pub exploration: Proficiency,
    pub part_time: Proficiency,
}

impl Proficiencies {
    pub fn get(&self, kind: ProficiencyType) -> &Proficiency {
        match kind {
            ProficiencyType::Training => &self.training,
            ProficiencyType::Investigation => &self.investigation,
            ProficiencyType::Exploration => &self.exploration,
            ProficiencyType::PartTime => &self.part_time,
        }
    }

    pub fn get_mut(&mut self, kind: ProficiencyType) -> &mut Proficiency {
        match kind {
            ProficiencyType::Training => &mut self.training,
            ProficiencyType::Investigation => &mut self.investigation,
            ProficiencyType::Exploration => &mut self.exploration,
            ProficiencyType::PartTime => &mut self.part_time,
        }
    }

    /// Grant experience to one category. Returns the new level on level-up.
    pub fn grant(&mut self, kind: ProficiencyType, amount: u32) -> Option<u32> {
        let prof = self.get_mut(kind);
        if prof.add_exp(amount) {
            Some(prof.level)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_level_one() {
        let p = Proficiency::new();
        assert_eq!(p.level, 1);
        assert_eq!(p.exp, 0);
        assert_eq!(p.exp_to_next(), 10);
        assert!(p.exp_ratio().abs() < f32::EPSILON);
    }

    #[test]
    fn level_up_carries_remainder() {
        let mut p = Proficiency::new();
        assert!(!p.add_exp(9));
        assert_eq!(p.level, 1);
        assert!(p.add_exp(4));
        assert_eq!(p.level, 2);
        assert_eq!(p.exp, 3);
        assert_eq!(p.exp_to_next(), 22);
    }

    #[test]
    fn large_grant_crosses_several_levels() {
        let mut p = Proficiency::new();
        // 10 + 25 + 50 = 85 reaches level 4 with 5 left over.
        assert!(p.add_exp(90));
        assert_eq!(p.level, 4);
        assert_eq!(p.exp, 5);
    }

    #[test]
    fn cap_at_level_five_discards_exp() {
        let mut p = Proficiency::new();
        assert!(p.add_exp(1000));
        assert_eq!(p.level, 5);
        assert_eq!(p.exp, 0);
        assert!(p.is_max_level());
        assert!(!p.add_exp(50));
        assert_eq!(p.exp, 0);
        assert_eq!(p.exp_to_next(), 0);
        assert!((p.exp_ratio() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn level_never_exceeds_cap() {
        let mut p = Proficiency::new();
        for amount in [1, 3, 7, 20, 60, 200] {
            p.add_exp(amount);
            assert!(p.level <= MAX_LEVEL);
        }
    }

    #[test]
    fn sanitized_clamps() {
        assert_eq!(Proficiency::sanitized(0, -4), Proficiency { level: 1, exp: 0 });
        assert_eq!(Proficiency::sanitized(9, 30), Proficiency { level: 5, exp: 0 });
        assert_eq!(Proficiency::sanitized(3, 12), Proficiency { level: 3, exp: 12 });
    }

    #[test]
    fn bonuses_follow_level() {
        let p1 = Proficiency { level: 1, exp: 0 };
        let p2 = Proficiency { level: 2, exp: 0 };
        let p4 = Proficiency { level: 4, exp: 0 };
        let p5 = Proficiency { level: 5, exp: 0 };

        assert!((p1.training_stat_multiplier() - 1.0).abs() < f32::EPSILON);
        assert!((p2.training_stat_multiplier() - 1.05).abs() < f32::EPSILON);
        assert_eq!(p2.training_fatigue_reduction(), 0);
        assert_eq!(p4.training_fatigue_reduction(), 1);
        assert!((p1.part_time_big_success_bonus()).abs() < f32::EPSILON);
        assert!((p2.part_time_big_success_bonus() - 0.03).abs() < 1e-6);
        assert!((p4.part_time_big_success_bonus() - 0.08).abs() < 1e-6);
        assert!(!p4.advanced_training_unlocked());
        assert!(p5.advanced_training_unlocked());
        assert!(p4.advanced_investigation_unlocked());
        assert_eq!(p2.exploration_time_bonus(), 2);
        assert!(p2.injury_reduction().abs() < f32::EPSILON);
        assert!((p4.injury_reduction() - 0.5).abs() < f32::EPSILON);
        assert!(!p4.advanced_part_time_unlocked());
        assert!(p5.advanced_part_time_unlocked());
    }

    #[test]
    fn grant_reports_new_level() {
        let mut profs = Proficiencies::default();
        assert_eq!(profs.grant(ProficiencyType::PartTime, 2), None);
        assert_eq!(profs.grant(ProficiencyType::PartTime, 8), Some(2));
        assert_eq!(profs.get(ProficiencyType::PartTime).level, 2);
        assert_eq!(profs.get(ProficiencyType::Training).level, 1);
    }
}
