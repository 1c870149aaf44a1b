use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use tracing::warn;

use crate::shared::geo::Coordinate;

mod entities;
mod stats;

pub use entities::*;
pub use stats::*;

/// In-memory transit catalogue: stop and route records in append-only
/// arenas, name indices on top, and a directed stop-pair distance table.
///
/// The catalogue is bulk-built once and then only queried. Records are never
/// mutated or removed; re-adding a name re-points the name index at the new
/// record and leaves the old one unreachable in its arena.
#[derive(Debug, Default, Clone)]
pub struct Catalogue {
    stops: Vec<Stop>,
    routes: Vec<Route>,
    stop_lookup: HashMap<Arc<str>, StopId>,
    route_lookup: HashMap<Arc<str>, RouteId>,
    distances: HashMap<(StopId, StopId), u32>,
    stop_to_routes: HashMap<StopId, BTreeSet<Arc<str>>>,
}

impl Catalogue {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_stop(&mut self, name: &str, coordinate: Coordinate) {
        let id = StopId(self.stops.len() as u32);
        let name: Arc<str> = name.into();
        self.stops.push(Stop {
            id,
            name: name.clone(),
            coordinate,
        });
        self.stop_lookup.insert(name, id);
    }

    /// Registers a route over the given stop names.
    ///
    /// Names that were never declared as stops resolve to absent references
    /// and are kept as such in the stored sequence; they are not fabricated
    /// into stops and never reachable through lookups.
    pub fn add_route<S: AsRef<str>>(&mut self, name: &str, stop_names: &[S], is_ring: bool) {
        let forward: Vec<Option<StopId>> = stop_names
            .iter()
            .map(|stop_name| self.stop_lookup.get(stop_name.as_ref()).copied())
            .collect();

        let mut expanded = forward.clone();
        if !is_ring {
            expanded.extend(forward.iter().rev().skip(1).copied());
        }

        let id = RouteId(self.routes.len() as u32);
        let name: Arc<str> = name.into();
        for stop_id in expanded.iter().flatten() {
            self.stop_to_routes
                .entry(*stop_id)
                .or_default()
                .insert(name.clone());
        }
        self.routes.push(Route {
            id,
            name: name.clone(),
            stops: expanded.into_boxed_slice(),
            is_ring,
        });
        self.route_lookup.insert(name, id);
    }

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        let id = self.stop_lookup.get(name)?;
        Some(&self.stops[id.index()])
    }

    pub fn route(&self, name: &str) -> Option<&Route> {
        let id = self.route_lookup.get(name)?;
        Some(&self.routes[id.index()])
    }

    /// Declares the road distance from `from` to `to` in meters, overwriting
    /// any earlier declaration for that ordered pair.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: u32) {
        let (Some(&from_id), Some(&to_id)) =
            (self.stop_lookup.get(from), self.stop_lookup.get(to))
        else {
            warn!("Dropped distance {from:?} -> {to:?}, unknown stop");
            return;
        };
        self.distances.insert((from_id, to_id), meters);
    }

    /// Road distance from `from` to `to`: the declared value for the ordered
    /// pair if present, otherwise the value declared for the opposite
    /// direction, otherwise 0. Unknown names yield 0.
    pub fn distance(&self, from: &str, to: &str) -> u32 {
        match (self.stop_lookup.get(from), self.stop_lookup.get(to)) {
            (Some(&from_id), Some(&to_id)) => self.distance_between(from_id, to_id),
            _ => 0,
        }
    }

    pub(crate) fn distance_between(&self, from: StopId, to: StopId) -> u32 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn stop_by_id(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// Names of all addressable stops, lexicographically sorted.
    pub fn stop_names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<_> = self.stop_lookup.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Names of all addressable routes, lexicographically sorted.
    pub fn route_names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<_> = self.route_lookup.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Names of the routes passing through `stop`, ordered by name.
    /// `None` means the stop was never referenced by any route, as opposed
    /// to an empty set.
    pub fn routes_at(&self, stop: &Stop) -> Option<&BTreeSet<Arc<str>>> {
        self.stop_to_routes.get(&stop.id)
    }
}
