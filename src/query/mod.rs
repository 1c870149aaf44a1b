use serde::Serialize;

use crate::{
    catalogue::Catalogue,
    ingest::StatRequest,
    render::{MapRenderer, RenderSettings, RouteLine, StopMarker},
};

/// Answer to a single stat request. Serializes straight into the wire shape,
/// with the request id echoed back.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Route {
        request_id: i64,
        curvature: f64,
        route_length: f64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        /// Empty when the stop exists but no route references it.
        buses: Vec<String>,
    },
    Map {
        request_id: i64,
        map: String,
    },
    NotFound {
        request_id: i64,
        error_message: String,
    },
}

impl StatResponse {
    fn not_found(request_id: i64) -> Self {
        StatResponse::NotFound {
            request_id,
            error_message: "not found".into(),
        }
    }
}

/// Answers every request in order against the built catalogue.
pub fn execute(
    catalogue: &Catalogue,
    settings: &RenderSettings,
    requests: &[StatRequest],
) -> Vec<StatResponse> {
    requests
        .iter()
        .map(|request| answer(catalogue, settings, request))
        .collect()
}

fn answer(catalogue: &Catalogue, settings: &RenderSettings, request: &StatRequest) -> StatResponse {
    match request {
        StatRequest::Bus { id, name } => match catalogue.route(name) {
            Some(route) => {
                let stats = catalogue.route_stats(route);
                StatResponse::Route {
                    request_id: *id,
                    curvature: stats.curvature,
                    route_length: stats.road_length,
                    stop_count: stats.stops_amount,
                    unique_stop_count: stats.unique_stops_amount,
                }
            }
            None => StatResponse::not_found(*id),
        },
        StatRequest::Stop { id, name } => match catalogue.stop(name) {
            Some(stop) => {
                let stats = catalogue.stop_stats(stop);
                let buses = stats
                    .routes
                    .map(|routes| routes.iter().map(|name| name.to_string()).collect())
                    .unwrap_or_default();
                StatResponse::Stop {
                    request_id: *id,
                    buses,
                }
            }
            None => StatResponse::not_found(*id),
        },
        StatRequest::Map { id } => StatResponse::Map {
            request_id: *id,
            map: render_network(catalogue, settings),
        },
    }
}

/// Assembles a renderer view of the catalogue and draws it.
///
/// Stops and routes are added in ascending name order; only stops referenced
/// by at least one route are drawn.
pub fn render_network(catalogue: &Catalogue, settings: &RenderSettings) -> String {
    let mut renderer = MapRenderer::new(settings.clone());

    for name in catalogue.stop_names() {
        let Some(stop) = catalogue.stop(&name) else {
            continue;
        };
        if catalogue.routes_at(stop).is_some() {
            renderer.add_stop(StopMarker {
                name: stop.name.clone(),
                coordinate: stop.coordinate,
            });
        }
    }

    for name in catalogue.route_names() {
        let Some(route) = catalogue.route(&name) else {
            continue;
        };
        let stops = route
            .stops
            .iter()
            .flatten()
            .map(|id| {
                let stop = catalogue.stop_by_id(*id);
                StopMarker {
                    name: stop.name.clone(),
                    coordinate: stop.coordinate,
                }
            })
            .collect();
        renderer.add_route(RouteLine {
            name: route.name.clone(),
            is_ring: route.is_ring,
            stops,
        });
    }

    renderer.render().to_svg_string()
}
