//! Systems - logic that advances the game state

mod day;
mod night;
mod town;

pub use day::*;
pub use night::*;
pub use town::*;
