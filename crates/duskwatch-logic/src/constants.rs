//! Game constants for the day structure, gauge bounds and thresholds.
//!
//! Plain integer constants with no engine dependency. Both the core engine
//! and the headless simtest read these.

/// Number of fighter schedule slots in one day.
pub const DAY_SLOT_COUNT: usize = 4;

/// Place actions the player may take before the day is over.
pub const MAX_PLAYER_ACTIONS: u32 = 4;

pub mod clock {
    pub const HOURS_PER_SLOT: u32 = 3;
    pub const DAY_START_HOUR: u32 = 8;
    pub const NIGHT_START_HOUR: u32 = 20;
    pub const SLEEP_HOUR: u32 = 22;
}

pub mod gauges {
    pub const GAUGE_MIN: u32 = 0;
    pub const GAUGE_MAX: u32 = 100;

    /// At or above this stress only resting is allowed at night.
    pub const STRESS_LOCK_THRESHOLD: u32 = 80;
    pub const STRESS_WARNING_THRESHOLD: u32 = 60;

    /// Returns true if night activities other than rest are refused.
    pub fn is_stress_locked(stress: u32) -> bool {
        stress >= STRESS_LOCK_THRESHOLD
    }

    /// Returns true if the stress gauge should be flagged to the player.
    pub fn is_stress_warning(stress: u32) -> bool {
        stress >= STRESS_WARNING_THRESHOLD
    }
}

pub mod ending {
    pub const ENDING_MIN: i32 = -100;
    pub const ENDING_MAX: i32 = 100;
}

pub mod proficiency {
    pub const MIN_LEVEL: u32 = 1;
    pub const MAX_LEVEL: u32 = 5;

    /// Experience needed to advance from `level` to `level + 1`, indexed by level.
    /// Index 0 is unused; level 5 is the cap.
    pub const EXP_THRESHOLDS: [u32; 5] = [0, 10, 25, 50, 80];
}
