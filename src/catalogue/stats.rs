use std::{
    collections::{BTreeSet, HashSet},
    sync::Arc,
};

use crate::shared::geo::Distance;

use super::{Catalogue, Route, Stop};

/// Figures derived for one route on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStats {
    pub name: Arc<str>,
    /// Length of the stored, already-expanded stop sequence.
    pub stops_amount: usize,
    pub unique_stops_amount: usize,
    /// Sum of declared road distances along the sequence, in meters.
    pub road_length: f64,
    /// Ratio of road length to great-circle length. Plain IEEE division:
    /// a route with zero geographic length yields NaN or infinity.
    pub curvature: f64,
}

/// Route membership of one stop.
#[derive(Debug, Clone)]
pub struct StopStats<'c> {
    pub name: Arc<str>,
    /// Names of the routes passing through the stop, ordered by name.
    /// `None` when no route has ever referenced the stop.
    pub routes: Option<&'c BTreeSet<Arc<str>>>,
}

impl Catalogue {
    pub fn route_stats(&self, route: &Route) -> RouteStats {
        let mut unique_stops: HashSet<&str> = HashSet::new();
        let mut road_length = 0.0;
        let mut geo_length = Distance::default();

        // The scan starts at the second element: the head of the sequence is
        // only counted as unique if it recurs, which it does for every
        // well-formed ring or there-and-back route.
        for window in route.stops.windows(2) {
            if let Some(id) = window[1] {
                unique_stops.insert(&self.stop_by_id(id).name);
            }
            if let (Some(prev), Some(next)) = (window[0], window[1]) {
                road_length += f64::from(self.distance_between(prev, next));
                geo_length = geo_length
                    + self
                        .stop_by_id(prev)
                        .coordinate
                        .distance_to(&self.stop_by_id(next).coordinate);
            }
        }

        RouteStats {
            name: route.name.clone(),
            stops_amount: route.stops.len(),
            unique_stops_amount: unique_stops.len(),
            road_length,
            curvature: road_length / geo_length.as_meters(),
        }
    }

    pub fn stop_stats(&self, stop: &Stop) -> StopStats<'_> {
        StopStats {
            name: stop.name.clone(),
            routes: self.routes_at(stop),
        }
    }
}
