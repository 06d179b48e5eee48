//! High-level planner that lays out requested kinds on a grid.
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogProvider, KindId};
use crate::error::{Error, Result};
use crate::layout::audit::{audit_conflicts, CompanionConflict};
use crate::layout::events::{PlanEvent, PlanEventKind, PlanEventSink};
use crate::layout::grid::Grid;
use crate::layout::request::{resolve_requests, PlantRequest};
use crate::layout::scoring::choose_position;
use crate::layout::summary::{summarize, PlantSummary};
use crate::layout::zones::{partition, Zone};

/// Plot dimensions for one planning call.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Plot width in cells (feet).
    pub width: u32,
    /// Plot height in cells (feet).
    pub height: u32,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] for a `width x height` plot.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Plot area in cells.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// A kind that did not reach its target quantity because no legal square remained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub kind: KindId,
    pub placed: u32,
    pub requested: u32,
}

/// Aggregate counters for a finished plan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanStats {
    pub units_requested: u32,
    pub units_placed: u32,
    pub cells_occupied: usize,
    pub space_used: f32,
    pub conflicts: usize,
    pub space_utilization_percent: f32,
}

/// Result of a successful planning call.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct GardenPlan {
    pub width: u32,
    pub height: u32,
    pub grid: Grid,
    /// 3x3 partition of the plot, informational only.
    pub zones: Vec<Zone>,
    /// One entry per resolved request, in request order.
    pub summary: Vec<PlantSummary>,
    /// Conflict messages, one per offending pair.
    pub warnings: Vec<String>,
    pub conflicts: Vec<CompanionConflict>,
    pub shortfalls: Vec<Shortfall>,
    /// Requested kinds missing from the catalog.
    pub skipped_kinds: Vec<KindId>,
    pub space_utilization_percent: f32,
}

impl GardenPlan {
    pub fn stats(&self) -> PlanStats {
        PlanStats {
            units_requested: self.summary.iter().map(|s| s.quantity_requested).sum(),
            units_placed: self.summary.iter().map(|s| s.quantity_placed).sum(),
            cells_occupied: self.grid.occupied_count(),
            space_used: self.space_used(),
            conflicts: self.conflicts.len(),
            space_utilization_percent: self.space_utilization_percent,
        }
    }

    /// Footprint of everything placed.
    pub fn space_used(&self) -> f32 {
        self.summary.iter().map(|s| s.space_used).sum()
    }

    /// Whether every request reached its target quantity.
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }
}

/// Planner bound to a catalog and a plot size.
pub struct GardenPlanner<'a, P: CatalogProvider + ?Sized = Catalog> {
    /// Plot configuration applied to every plan.
    pub config: LayoutConfig,
    /// Reference data used to resolve kinds and score neighbours.
    pub catalog: &'a P,
}

impl<'a, P: CatalogProvider + ?Sized> GardenPlanner<'a, P> {
    /// Create a planner after validating `config`.
    ///
    /// Returns [`Error::InvalidDimensions`] when either side is zero.
    pub fn try_new(config: LayoutConfig, catalog: &'a P) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, catalog })
    }

    /// Create a planner without validation.
    ///
    /// Zero dimensions trip a debug assertion; use [`Self::try_new`] for untrusted input.
    pub fn new(config: LayoutConfig, catalog: &'a P) -> Self {
        debug_assert!(
            config.width > 0 && config.height > 0,
            "width and height must be > 0"
        );
        Self { config, catalog }
    }

    /// Plans the given kinds, returning the finished layout.
    pub fn plan<S: AsRef<str>>(&self, kinds: &[S]) -> Result<GardenPlan> {
        plan_layout(&self.config, self.catalog, kinds, None)
    }

    /// Plans the given kinds and reports progress to `sink`.
    pub fn plan_with_events<S: AsRef<str>>(
        &self,
        kinds: &[S],
        sink: &mut dyn PlanEventSink,
    ) -> Result<GardenPlan> {
        plan_layout(&self.config, self.catalog, kinds, Some(sink))
    }
}

/// Plan a `width x height` garden for `kinds` against `catalog`.
pub fn plan_garden<S: AsRef<str>>(
    width: u32,
    height: u32,
    kinds: &[S],
    catalog: &Catalog,
) -> Result<GardenPlan> {
    plan_layout(&LayoutConfig::new(width, height), catalog, kinds, None)
}

/// Lay out `kinds` on a plot described by `config`.
///
/// Unknown kinds are skipped with a warning. Fails with [`Error::NoValidPlants`] when none
/// remain and with [`Error::CapacityExceeded`] when the requested footprint exceeds the plot
/// area, before any cell is filled. Units that find no free square are recorded as
/// [`Shortfall`]s. If `sink` is given, [`PlanEvent`]s are sent to it as planning proceeds.
pub fn plan_layout<P, S>(
    config: &LayoutConfig,
    catalog: &P,
    kinds: &[S],
    sink: Option<&mut dyn PlanEventSink>,
) -> Result<GardenPlan>
where
    P: CatalogProvider + ?Sized,
    S: AsRef<str>,
{
    if let Some(s) = sink {
        plan_layout_internal(config, catalog, kinds, s)
    } else {
        plan_layout_internal(config, catalog, kinds, &mut ())
    }
}

fn plan_layout_internal<P, S>(
    config: &LayoutConfig,
    catalog: &P,
    kinds: &[S],
    sink: &mut dyn PlanEventSink,
) -> Result<GardenPlan>
where
    P: CatalogProvider + ?Sized,
    S: AsRef<str>,
{
    config.validate()?;

    info!(
        "Planning {}x{} garden | requested kinds: {}.",
        config.width,
        config.height,
        kinds.len()
    );
    if sink.wants(PlanEventKind::PlanStarted) {
        sink.send(PlanEvent::PlanStarted {
            config: *config,
            requested_kinds: kinds.len(),
        });
    }

    let resolved = resolve_requests(catalog, kinds);
    for kind in &resolved.skipped {
        warn!("Plant '{kind}' not found in catalog; skipping.");
        if sink.wants(PlanEventKind::KindSkipped) {
            sink.send(PlanEvent::KindSkipped { kind: kind.clone() });
        }
    }
    if resolved.requests.is_empty() {
        return Err(Error::NoValidPlants);
    }

    let required = resolved.required_space();
    let available = config.area();
    if required > available as f32 {
        return Err(Error::CapacityExceeded {
            required,
            available,
        });
    }

    let skipped_kinds = resolved.skipped;
    let mut requests = resolved.requests;
    if sink.wants(PlanEventKind::RequestResolved) {
        for r in &requests {
            sink.send(PlanEvent::RequestResolved {
                kind: r.kind.clone(),
                quantity: r.quantity,
                footprint: r.footprint,
                side: r.side(),
            });
        }
    }

    let mut grid = Grid::new(config.width, config.height);
    let shortfalls = place_all(&mut grid, &mut requests, catalog, sink);

    let conflicts = audit_conflicts(&grid, catalog);
    if sink.wants(PlanEventKind::ConflictFound) {
        for c in &conflicts {
            sink.send(PlanEvent::ConflictFound {
                message: c.message.clone(),
            });
        }
    }
    let warnings: Vec<String> = conflicts.iter().map(|c| c.message.clone()).collect();

    let summary = summarize(&requests);
    let space_used: f32 = summary.iter().map(|s| s.space_used).sum();
    let space_utilization_percent = space_used / available as f32 * 100.0;

    let plan = GardenPlan {
        width: config.width,
        height: config.height,
        grid,
        zones: partition(config.width, config.height),
        summary,
        warnings,
        conflicts,
        shortfalls,
        skipped_kinds,
        space_utilization_percent,
    };

    let stats = plan.stats();
    info!(
        "Placed {} of {} unit(s) | cells: {} | utilization: {:.1}% | conflicts: {}.",
        stats.units_placed,
        stats.units_requested,
        stats.cells_occupied,
        stats.space_utilization_percent,
        stats.conflicts,
    );
    if sink.wants(PlanEventKind::PlanFinished) {
        sink.send(PlanEvent::PlanFinished { stats });
    }

    Ok(plan)
}

/// Greedy per-unit placement, largest footprint first. Returns the kinds that ran out of room.
fn place_all<P>(
    grid: &mut Grid,
    requests: &mut [PlantRequest<'_>],
    catalog: &P,
    sink: &mut dyn PlanEventSink,
) -> Vec<Shortfall>
where
    P: CatalogProvider + ?Sized,
{
    let mut order: Vec<usize> = (0..requests.len()).collect();
    order.sort_by(|&a, &b| requests[b].footprint.total_cmp(&requests[a].footprint));

    let mut shortfalls = Vec::new();
    for idx in order {
        let request = &mut requests[idx];
        let side = request.side();
        while !request.is_complete() {
            let Some(candidate) = choose_position(grid, side, &request.kind, catalog) else {
                let shortfall = Shortfall {
                    kind: request.kind.clone(),
                    placed: request.placed,
                    requested: request.quantity,
                };
                warn!(
                    "Only placed {} of {} '{}'; no room left.",
                    shortfall.placed, shortfall.requested, shortfall.kind
                );
                if sink.wants(PlanEventKind::PartialPlacement) {
                    sink.send(PlanEvent::PartialPlacement {
                        shortfall: shortfall.clone(),
                    });
                }
                shortfalls.push(shortfall);
                break;
            };

            grid.fill_square(candidate.origin, side, &request.kind);
            request.placed += 1;
            debug!(
                "Placed '{}' at ({}, {}) side {} score {:?}.",
                request.kind, candidate.origin.x, candidate.origin.y, side, candidate.score
            );
            if sink.wants(PlanEventKind::PlacementMade) {
                sink.send(PlanEvent::PlacementMade {
                    kind: request.kind.clone(),
                    origin: candidate.origin,
                    side,
                    score: candidate.score,
                });
            }
        }
    }
    shortfalls
}
