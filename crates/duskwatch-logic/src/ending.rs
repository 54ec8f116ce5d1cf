//! Ending variables, long-running narrative scores in −100..=100.

use serde::{Deserialize, Serialize};

use crate::constants::ending::{ENDING_MAX, ENDING_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndingVar {
    Reputation,
    CorpA,
    CorpB,
    Sync,
    /// Positive leans ethical, negative leans efficient.
    Ethics,
}

impl EndingVar {
    pub const ALL: [EndingVar; 5] = [
        EndingVar::Reputation,
        EndingVar::CorpA,
        EndingVar::CorpB,
        EndingVar::Sync,
        EndingVar::Ethics,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingVariables {
    pub reputation: i32,
    pub corp_a: i32,
    pub corp_b: i32,
    pub sync: i32,
    pub ethics: i32,
}

impl EndingVariables {
    pub fn get(&self, var: EndingVar) -> i32 {
        match var {
            EndingVar::Reputation => self.reputation,
            EndingVar::CorpA => self.corp_a,
            EndingVar::CorpB => self.corp_b,
            EndingVar::Sync => self.sync,
            EndingVar::Ethics => self.ethics,
        }
    }

    fn slot(&mut self, var: EndingVar) -> &mut i32 {
        match var {
            EndingVar::Reputation => &mut self.reputation,
            EndingVar::CorpA => &mut self.corp_a,
            EndingVar::CorpB => &mut self.corp_b,
            EndingVar::Sync => &mut self.sync,
            EndingVar::Ethics => &mut self.ethics,
        }
    }

    /// Shift a variable by `delta`, clamped to the ending range.
    /// Returns the new value.
    pub fn modify(&mut self, var: EndingVar, delta: i32) -> i32 {
        let slot = self.slot(var);
        *slot = slot.saturating_add(delta).clamp(ENDING_MIN, ENDING_MAX);
        *slot
    }

    /// Set a variable from untrusted input, clamped to the ending range.
    pub fn set_clamped(&mut self, var: EndingVar, value: i64) {
        *self.slot(var) = value.clamp(ENDING_MIN as i64, ENDING_MAX as i64) as i32;
    }

    /// Display label. The ethics axis names whichever side it currently leans to.
    pub fn label(&self, var: EndingVar) -> &'static str {
        match var {
            EndingVar::Reputation => "Reputation",
            EndingVar::CorpA => "Corp A relation",
            EndingVar::CorpB => "Corp B relation",
            EndingVar::Sync => "Synchronization",
            EndingVar::Ethics if self.ethics >= 0 => "Ethics",
            EndingVar::Ethics => "Efficiency",
        }
    }
}
