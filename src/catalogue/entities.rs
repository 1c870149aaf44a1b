use std::sync::Arc;

use crate::shared::geo::Coordinate;

/// Index handle into the catalogue's stop arena.
///
/// Handles stay valid for the lifetime of the catalogue; records are never
/// removed once inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub(crate) u32);

impl StopId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index handle into the catalogue's route arena.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub(crate) u32);

impl RouteId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named geographic point in the transit network.
#[derive(Debug, Default, Clone)]
pub struct Stop {
    /// Handle of this record inside the owning catalogue.
    pub id: StopId,
    /// Unique name; any string is allowed, including whitespace-only ones.
    pub name: Arc<str>,
    pub coordinate: Coordinate,
}

/// A named traversal of stops, either a closed ring or a there-and-back line.
#[derive(Debug, Default, Clone)]
pub struct Route {
    /// Handle of this record inside the owning catalogue.
    pub id: RouteId,
    /// Unique name.
    pub name: Arc<str>,
    /// Ring routes keep the declared stop sequence verbatim (the input is
    /// expected to repeat the first stop last). There-and-back routes store
    /// the forward sequence followed by its reverse minus the turnaround
    /// stop, so a declared sequence of length n is stored as 2n - 1 entries.
    pub stops: Box<[Option<StopId>]>,
    pub is_ring: bool,
}
