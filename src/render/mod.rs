use std::sync::Arc;

use crate::shared::geo::Coordinate;

mod projector;
mod settings;
pub mod svg;

pub use projector::SphereProjector;
pub use settings::{RenderSettings, SettingsError};

use svg::{Circle, Color, Document, LineCap, LineJoin, Point, Polyline, Style, Text};

/// A stop pinned for drawing.
#[derive(Debug, Clone)]
pub struct StopMarker {
    pub name: Arc<str>,
    pub coordinate: Coordinate,
}

/// A route pinned for drawing: its expanded stop sequence with absent
/// references already dropped.
#[derive(Debug, Clone)]
pub struct RouteLine {
    pub name: Arc<str>,
    pub is_ring: bool,
    pub stops: Vec<StopMarker>,
}

/// Draws the network in four fixed layers: route lines, route name labels,
/// stop circles, stop name labels. Within a layer, drawing follows the order
/// in which stops and routes were added; callers add both in ascending name
/// order so that palette assignment and z-order are reproducible.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    settings: RenderSettings,
    stops: Vec<StopMarker>,
    routes: Vec<RouteLine>,
}

impl MapRenderer {
    /// `settings` are expected to have passed [`RenderSettings::validate`].
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            stops: Vec::new(),
            routes: Vec::new(),
        }
    }

    pub fn add_stop(&mut self, marker: StopMarker) {
        self.stops.push(marker);
    }

    pub fn add_route(&mut self, line: RouteLine) {
        self.routes.push(line);
    }

    pub fn render(&self) -> Document {
        let coords: Vec<Coordinate> = self
            .routes
            .iter()
            .flat_map(|route| route.stops.iter().map(|stop| stop.coordinate))
            .collect();
        let projector = SphereProjector::new(
            &coords,
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        let mut doc = Document::default();
        self.draw_route_lines(&mut doc, &projector);
        self.draw_route_labels(&mut doc, &projector);
        self.draw_stop_markers(&mut doc, &projector);
        self.draw_stop_labels(&mut doc, &projector);
        doc
    }

    fn palette_color(&self, index: usize) -> Color {
        self.settings.color_palette[index % self.settings.color_palette.len()].clone()
    }

    fn draw_route_lines(&self, doc: &mut Document, projector: &SphereProjector) {
        let mut color_index = 0;
        for route in &self.routes {
            // Empty routes are not drawn and consume no palette slot.
            if route.stops.is_empty() {
                continue;
            }
            doc.push(Polyline {
                points: route
                    .stops
                    .iter()
                    .map(|stop| projector.project(stop.coordinate))
                    .collect(),
                style: Style {
                    fill: Some(Color::from("none")),
                    stroke: Some(self.palette_color(color_index)),
                    stroke_width: Some(self.settings.line_width),
                    line_cap: Some(LineCap::Round),
                    line_join: Some(LineJoin::Round),
                },
            });
            color_index += 1;
        }
    }

    fn draw_route_labels(&self, doc: &mut Document, projector: &SphereProjector) {
        let mut color_index = 0;
        for route in &self.routes {
            if route.stops.is_empty() {
                continue;
            }

            let first = &route.stops[0];
            let final_index = if route.is_ring {
                route.stops.len() - 1
            } else {
                // Midpoint of the doubled sequence, not necessarily the
                // geographic terminus.
                route.stops.len() / 2
            };
            let last = &route.stops[final_index];

            let mut labeled = vec![first];
            if last.name != first.name {
                labeled.push(last);
            }

            for stop in labeled {
                let position = projector.project(stop.coordinate);
                doc.push(self.underlay(self.route_label(position, &route.name)));
                let mut label = self.route_label(position, &route.name);
                label.style.fill = Some(self.palette_color(color_index));
                doc.push(label);
            }
            color_index += 1;
        }
    }

    fn draw_stop_markers(&self, doc: &mut Document, projector: &SphereProjector) {
        for stop in &self.stops {
            doc.push(Circle {
                center: projector.project(stop.coordinate),
                radius: self.settings.stop_radius,
                style: Style {
                    fill: Some(Color::from("white")),
                    ..Default::default()
                },
            });
        }
    }

    fn draw_stop_labels(&self, doc: &mut Document, projector: &SphereProjector) {
        for stop in &self.stops {
            let position = projector.project(stop.coordinate);
            doc.push(self.underlay(self.stop_label(position, &stop.name)));
            let mut label = self.stop_label(position, &stop.name);
            label.style.fill = Some(Color::from("black"));
            doc.push(label);
        }
    }

    fn route_label(&self, position: Point, name: &str) -> Text {
        Text {
            position,
            offset: Point {
                x: self.settings.bus_label_offset[0],
                y: self.settings.bus_label_offset[1],
            },
            font_size: self.settings.bus_label_font_size,
            font_family: Some("Verdana".into()),
            font_weight: Some("bold".into()),
            content: name.into(),
            style: Style::default(),
        }
    }

    fn stop_label(&self, position: Point, name: &str) -> Text {
        Text {
            position,
            offset: Point {
                x: self.settings.stop_label_offset[0],
                y: self.settings.stop_label_offset[1],
            },
            font_size: self.settings.stop_label_font_size,
            font_family: Some("Verdana".into()),
            font_weight: None,
            content: name.into(),
            style: Style::default(),
        }
    }

    fn underlay(&self, mut label: Text) -> Text {
        label.style = Style {
            fill: Some(self.settings.underlayer_color.clone()),
            stroke: Some(self.settings.underlayer_color.clone()),
            stroke_width: Some(self.settings.underlayer_width),
            line_cap: Some(LineCap::Round),
            line_join: Some(LineJoin::Round),
        };
        label
    }
}
