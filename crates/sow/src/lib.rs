#![forbid(unsafe_code)]
//! sow: Companion-aware garden layout planning.
//!
//! Modules:
//! - catalog: plant facts, companion relationships, hardiness zones and companion reports
//! - layout: grid placement, conflict audit, plan summary and plan events
//! - calendar: sowing and harvest dates from zone frost dates
//! - harvest: yield, value and harvest timeline estimates
//!
//! Everything here is deterministic and in-memory; reading catalog files is left to callers.
pub mod calendar;
pub mod catalog;
pub mod error;
pub mod harvest;
pub mod layout;

/// Convenient re-exports for common types. Import with `use sow::prelude::*;`.
pub mod prelude {
    pub use crate::calendar::{build_calendar, CalendarEntry, PlantingCalendar};
    pub use crate::catalog::report::{companions_for, families, quick_matrix};
    pub use crate::catalog::{
        normalize_kind, Catalog, CatalogProvider, CompanionMatrix, CompanionRelationship,
        FrostDate, HardinessZone, KindId, PlantSeason, PlantSpec,
    };
    pub use crate::error::{Error, Result};
    pub use crate::harvest::{estimate_yield, parse_yield_requests, YieldReport, YieldRequest};
    pub use crate::layout::events::{
        FnSink, MultiSink, PlanEvent, PlanEventKind, PlanEventSink, VecSink,
    };
    pub use crate::layout::{
        audit, audit_conflicts, plan_garden, plan_layout, summarize, CompanionConflict,
        GardenPlan, GardenPlanner, Grid, LayoutConfig, PlanStats, PlantSummary, Shortfall,
    };
}
