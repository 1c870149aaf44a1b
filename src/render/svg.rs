//! Typed writer for the small SVG subset the map renderer emits.

use std::fmt::{self, Display, Write};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A color in any of the three accepted forms: a named/string color, an RGB
/// triple, or an RGB triple with an opacity in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, opacity) => write!(f, "rgba({r},{g},{b},{opacity})"),
        }
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Color::Named(value.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Arcs => "arcs",
            LineJoin::Bevel => "bevel",
            LineJoin::Miter => "miter",
            LineJoin::MiterClip => "miter-clip",
            LineJoin::Round => "round",
        })
    }
}

/// Presentation attributes shared by every shape. Unset attributes are
/// omitted from the output.
#[derive(Debug, Default, Clone)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub line_cap: Option<LineCap>,
    pub line_join: Option<LineJoin>,
}

impl Style {
    fn write_attrs(&self, out: &mut impl Write) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(out, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(out, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(out, " stroke-width=\"{width}\"")?;
        }
        if let Some(cap) = self.line_cap {
            write!(out, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.line_join {
            write!(out, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub style: Style,
}

impl Circle {
    fn write(&self, out: &mut impl Write) -> fmt::Result {
        write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            self.center.x, self.center.y, self.radius
        )?;
        self.style.write_attrs(out)?;
        out.write_str("/>")
    }
}

#[derive(Debug, Default, Clone)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub style: Style,
}

impl Polyline {
    fn write(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str("<polyline points=\"")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{},{}", point.x, point.y)?;
        }
        out.write_char('"')?;
        self.style.write_attrs(out)?;
        out.write_str("/>")
    }
}

#[derive(Debug, Default, Clone)]
pub struct Text {
    pub position: Point,
    /// Rendered as the `dx`/`dy` attributes.
    pub offset: Point,
    pub font_size: u32,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub content: String,
    pub style: Style,
}

impl Text {
    fn write(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str("<text")?;
        self.style.write_attrs(out)?;
        write!(
            out,
            " x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(out, " font-family=\"{family}\"")?;
        }
        if let Some(weight) = &self.font_weight {
            write!(out, " font-weight=\"{weight}\"")?;
        }
        out.write_char('>')?;
        write_escaped(out, &self.content)?;
        out.write_str("</text>")
    }
}

#[derive(Debug, Clone)]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Shape::Circle(value)
    }
}

impl From<Polyline> for Shape {
    fn from(value: Polyline) -> Self {
        Shape::Polyline(value)
    }
}

impl From<Text> for Shape {
    fn from(value: Text) -> Self {
        Shape::Text(value)
    }
}

/// An ordered list of shapes; later shapes occlude earlier ones.
#[derive(Debug, Default, Clone)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn write(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>")?;
        writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">"
        )?;
        for shape in &self.shapes {
            out.write_str("  ")?;
            match shape {
                Shape::Circle(circle) => circle.write(out)?,
                Shape::Polyline(polyline) => polyline.write(out)?,
                Shape::Text(text) => text.write(out)?,
            }
            out.write_char('\n')?;
        }
        out.write_str("</svg>")
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        self.write(&mut out).unwrap();
        out
    }
}

fn write_escaped(out: &mut impl Write, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            _ => out.write_char(ch)?,
        }
    }
    Ok(())
}

#[test]
fn color_display_test() {
    assert_eq!(Color::from("red").to_string(), "red");
    assert_eq!(Color::Rgb(255, 16, 12).to_string(), "rgb(255,16,12)");
    assert_eq!(
        Color::Rgba(255, 200, 23, 0.85).to_string(),
        "rgba(255,200,23,0.85)"
    );
}

#[test]
fn text_escaping_test() {
    let text = Text {
        content: "R&D <\"Quote's\">".into(),
        ..Default::default()
    };
    let mut out = String::new();
    text.write(&mut out).unwrap();
    assert!(out.contains("R&amp;D &lt;&quot;Quote&apos;s&quot;&gt;"));
}

#[test]
fn document_layout_test() {
    let mut doc = Document::default();
    doc.push(Circle {
        center: Point { x: 20.0, y: 20.0 },
        radius: 5.0,
        style: Style {
            fill: Some(Color::from("white")),
            ..Default::default()
        },
    });
    let rendered = doc.to_svg_string();
    assert!(rendered.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n"));
    assert!(rendered.contains("  <circle cx=\"20\" cy=\"20\" r=\"5\" fill=\"white\"/>\n"));
    assert!(rendered.ends_with("</svg>"));
}
