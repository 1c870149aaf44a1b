//! Local-first transit catalogue: stops and routes in memory, statistics on
//! demand, and an SVG map of the whole network.

pub mod catalogue;
pub mod ingest;
pub mod query;
pub mod render;
pub mod shared;

pub mod prelude {
    pub use crate::catalogue::{Catalogue, Route, RouteStats, Stop, StopStats};
    pub use crate::query::{StatResponse, execute, render_network};
    pub use crate::render::{MapRenderer, RenderSettings, RouteLine, SphereProjector, StopMarker};
    pub use crate::shared::geo::{Coordinate, Distance};
}
