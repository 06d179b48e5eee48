//! Garden layout: greedy companion-aware placement, conflict audit and plan summary.
//!
//! The entry points are [`planner::GardenPlanner`], [`planner::plan_layout`] and
//! [`planner::plan_garden`]. Placement is deterministic: requests are placed largest footprint
//! first, each unit on the best-scoring free square found by a row-major scan.
pub mod audit;
pub mod events;
pub mod grid;
pub mod planner;
pub mod request;
pub mod scoring;
pub mod summary;
pub mod zones;

pub use audit::{audit, audit_conflicts, CompanionConflict};
pub use grid::Grid;
pub use planner::{
    plan_garden, plan_layout, GardenPlan, GardenPlanner, LayoutConfig, PlanStats, Shortfall,
};
pub use request::PlantRequest;
pub use summary::{summarize, PlantSummary};
pub use zones::Zone;
