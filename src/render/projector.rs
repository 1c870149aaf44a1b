use crate::shared::geo::Coordinate;

use super::svg::Point;

/// Spans below this are treated as degenerate and produce no zoom constraint.
const EPSILON: f64 = 1e-6;

/// Affine map from the geographic bounding box of a point set onto a canvas
/// with a top-left origin. The aspect ratio is preserved by scaling both
/// axes with the tighter of the two per-axis factors.
#[derive(Debug, Default, Clone)]
pub struct SphereProjector {
    padding: f64,
    min_lon: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    pub fn new(points: &[Coordinate], width: f64, height: f64, padding: f64) -> Self {
        let mut projector = Self {
            padding,
            ..Default::default()
        };
        if points.is_empty() {
            return projector;
        }

        let min_lon = points
            .iter()
            .map(|c| c.longitude)
            .fold(f64::INFINITY, f64::min);
        let max_lon = points
            .iter()
            .map(|c| c.longitude)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_lat = points
            .iter()
            .map(|c| c.latitude)
            .fold(f64::INFINITY, f64::min);
        let max_lat = points
            .iter()
            .map(|c| c.latitude)
            .fold(f64::NEG_INFINITY, f64::max);
        projector.min_lon = min_lon;
        projector.max_lat = max_lat;

        let width_zoom =
            (max_lon - min_lon >= EPSILON).then(|| (width - 2.0 * padding) / (max_lon - min_lon));
        let height_zoom =
            (max_lat - min_lat >= EPSILON).then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        projector.zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            // A single point, or all points coincident: everything collapses
            // onto (padding, padding).
            (None, None) => 0.0,
        };
        projector
    }

    /// Latitude is inverted so that north maps to smaller y.
    pub fn project(&self, coordinate: Coordinate) -> Point {
        Point {
            x: (coordinate.longitude - self.min_lon) * self.zoom + self.padding,
            y: (self.max_lat - coordinate.latitude) * self.zoom + self.padding,
        }
    }
}

#[test]
fn single_point_collapses_to_padding() {
    let projector = SphereProjector::new(&[Coordinate::from((48.0, 2.0))], 600.0, 400.0, 50.0);
    let point = projector.project(Coordinate::from((48.0, 2.0)));
    assert_eq!((point.x, point.y), (50.0, 50.0));
}

#[test]
fn coincident_points_collapse_to_padding() {
    let point = Coordinate::from((48.0, 2.0));
    let projector = SphereProjector::new(&[point, point, point], 600.0, 400.0, 50.0);
    let projected = projector.project(point);
    assert_eq!((projected.x, projected.y), (50.0, 50.0));
}

#[test]
fn empty_input_is_constructible() {
    let projector = SphereProjector::new(&[], 600.0, 400.0, 50.0);
    let point = projector.project(Coordinate::default());
    assert_eq!((point.x, point.y), (50.0, 50.0));
}
