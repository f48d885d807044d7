//! Goal planner
//!
//! - `allocation` - priority-weighted surplus split and completion projection
//! - `scenario` - income/expense what-ifs built on the latest period

pub mod allocation;
pub mod scenario;

pub use allocation::{
    simulate_allocation, split_surplus, AllocationResult, SurplusSplit, PAUSED_MONTHS,
    PRIORITY_SHARE,
};
pub use scenario::{net_surplus, run_simulation, Simulation, SimulationParams};
