//! Cargo allocation for a storage bay.
//!
//! Picks which cargo units fit a bay under a dual weight/volume budget using a
//! deterministic greedy heuristic, and projects the result to its external
//! shape. Pure and stateless: no IO, no shared state.

pub mod cargo;
pub mod config;
pub mod planner;
pub mod report;

pub use cargo::CargoUnit;
pub use config::{PlannerConfig, TieBreak};
pub use planner::{AllocationPlan, AllocationPlanner};
pub use report::{AllocationReport, CargoRow, ReportFormatter};
