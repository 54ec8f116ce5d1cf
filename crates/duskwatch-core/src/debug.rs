//! Debug commands for playtesting, enabled with the `dev-tools` feature.
//!
//! They bypass the phase rules on purpose and are not part of normal play.

use duskwatch_logic::proficiency::ProficiencyType;

use crate::engine::{GameEngine, GamePhase};
use crate::systems::{finish_fighter_day, grant_proficiency_exp};

impl GameEngine {
    pub fn debug_add_gold(&mut self, amount: u32) {
        self.state.add_gold(amount);
        log::info!("[debug] +{}G, now {}G", amount, self.state.gold);
    }

    pub fn debug_reduce_stress(&mut self, amount: u32) {
        self.state.add_stress(-(amount.min(i32::MAX as u32) as i32));
        log::info!("[debug] stress now {}", self.state.stress);
    }

    pub fn debug_add_proficiency_exp(&mut self, kind: ProficiencyType, amount: u32) {
        grant_proficiency_exp(&mut self.state, kind, amount, &mut self.events);
    }

    /// Jump straight to the day summary. Pending fighter slots still run;
    /// the night counts as rest.
    pub fn debug_force_summary(&mut self) {
        if self.phase == GamePhase::DaySummary {
            return;
        }
        finish_fighter_day(&mut self.state, &self.config, &mut self.rng, &mut self.events);
        self.state.night_completed = true;
        log::info!("[debug] forced summary on day {}", self.state.day);
        self.set_phase(GamePhase::DaySummary);
    }
}
