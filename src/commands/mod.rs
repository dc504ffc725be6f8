//! Command implementations

pub mod families;
pub mod simple;
pub mod simulate;

pub use families::{FamilyReport, FamilySummary, analyze_letter};
pub use simple::{play, run_simple};
pub use simulate::{GameRecord, SimulationResult, pick_letter, run_simulation};
