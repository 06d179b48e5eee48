//! Event types and sinks for observing planning runs.
//!
//! This module defines [`PlanEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while a [`crate::layout::planner::GardenPlanner`] or
//! [`crate::layout::planner::plan_layout`] lays out a garden.
use glam::UVec2;

use crate::catalog::KindId;
use crate::layout::planner::{LayoutConfig, PlanStats, Shortfall};

/// Describes events emitted while planning.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PlanEvent {
    /// Emitted when planning starts, after the configuration was validated.
    PlanStarted {
        /// The layout configuration used.
        config: LayoutConfig,
        /// Number of kinds requested, unknown ones included.
        requested_kinds: usize,
    },

    /// Emitted for every requested kind missing from the catalog.
    KindSkipped {
        /// The kind as requested (normalized).
        kind: KindId,
    },

    /// Emitted once per resolved request, in request order.
    RequestResolved {
        kind: KindId,
        /// Target number of units.
        quantity: u32,
        /// Footprint of one unit in area units.
        footprint: f32,
        /// Edge length of the square each unit occupies, in cells.
        side: u32,
    },

    /// Emitted when a unit was placed on the grid.
    PlacementMade {
        kind: KindId,
        /// Top-left cell of the occupied square.
        origin: UVec2,
        side: u32,
        /// Companion score of the chosen square, `None` when the unscored fallback was used.
        score: Option<f32>,
    },

    /// Emitted when a kind ran out of room before reaching its target quantity.
    PartialPlacement { shortfall: Shortfall },

    /// Emitted for every conflict found by the audit.
    ConflictFound {
        /// Display-ready conflict message.
        message: String,
    },

    /// Emitted when the plan is complete.
    PlanFinished { stats: PlanStats },
}

impl PlanEvent {
    pub fn kind(&self) -> PlanEventKind {
        match self {
            PlanEvent::PlanStarted { .. } => PlanEventKind::PlanStarted,
            PlanEvent::KindSkipped { .. } => PlanEventKind::KindSkipped,
            PlanEvent::RequestResolved { .. } => PlanEventKind::RequestResolved,
            PlanEvent::PlacementMade { .. } => PlanEventKind::PlacementMade,
            PlanEvent::PartialPlacement { .. } => PlanEventKind::PartialPlacement,
            PlanEvent::ConflictFound { .. } => PlanEventKind::ConflictFound,
            PlanEvent::PlanFinished { .. } => PlanEventKind::PlanFinished,
        }
    }
}

/// Discriminant of [`PlanEvent`], used by sinks to opt out of event families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanEventKind {
    PlanStarted,
    KindSkipped,
    RequestResolved,
    PlacementMade,
    PartialPlacement,
    ConflictFound,
    PlanFinished,
}

/// A generic event sink that accepts [`PlanEvent`]s.
pub trait PlanEventSink {
    fn send(&mut self, event: PlanEvent);

    /// Whether the sink cares about events of `kind`. Planners skip building events
    /// nobody wants.
    #[inline]
    fn wants(&self, _kind: PlanEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl PlanEventSink for () {
    #[inline]
    fn send(&mut self, _event: PlanEvent) {}

    #[inline]
    fn wants(&self, _kind: PlanEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PlanEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PlanEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> PlanEventSink for FnSink<F>
where
    F: FnMut(PlanEvent),
{
    #[inline]
    fn send(&mut self, event: PlanEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PlanEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<PlanEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[PlanEvent] {
        &self.events
    }

    /// Number of collected events of `kind`.
    pub fn count(&self, kind: PlanEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl PlanEventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PlanEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: PlanEventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: PlanEventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: PlanEventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PlanEventSink> PlanEventSink for MultiSink<S> {
    fn send(&mut self, event: PlanEvent) {
        let kind = event.kind();
        let targets: Vec<usize> = (0..self.sinks.len())
            .filter(|&i| self.sinks[i].wants(kind))
            .collect();
        let Some((&last, rest)) = targets.split_last() else {
            return;
        };
        for &i in rest {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last].send(event);
    }

    fn wants(&self, kind: PlanEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
