//! Display list produced by the renderers
//!
//! Every drawing step appends a layered [`PaintCommand`] to a [`Scene`].
//! Order in the list is paint order. The scene serializes to SVG for the
//! rasterizer and doubles as an inspection surface for tests.

use crate::geometry::{rounded_rect_path, Rgb};
use std::fmt::Write as _;

/// What a command depicts. Used to query scenes, never affects output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Background,
    Title,
    WeekendShade,
    HolidayShade,
    HolidayAccent,
    DayHeader,
    RowLabel,
    VacationBar,
    Grid,
    MonthTitle,
    WeekdayHeader,
    DayCell,
    DayNumber,
    VacationDot,
    OverflowMarker,
    LegendSeparator,
    LegendTitle,
    LegendBadge,
    LegendText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f32,
}

/// A run of text sharing one style inside a [`PaintCommand::Text`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Axis-aligned rectangle, optionally rounded and outlined
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        fill: Rgb,
        opacity: f32,
        stroke: Option<Stroke>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgb,
        width: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgb,
    },
    /// Text vertically centered on `y`
    Text {
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        anchor: Anchor,
        spans: Vec<TextSpan>,
    },
}

impl PaintCommand {
    pub fn fill_rect(x: f32, y: f32, width: f32, height: f32, fill: Rgb) -> Self {
        PaintCommand::Rect {
            x,
            y,
            width,
            height,
            radius: 0.0,
            fill,
            opacity: 1.0,
            stroke: None,
        }
    }

    pub fn text(x: f32, y: f32, size: f32, color: Rgb, anchor: Anchor, text: impl Into<String>) -> Self {
        PaintCommand::Text {
            x,
            y,
            size,
            color,
            anchor,
            spans: vec![TextSpan::plain(text)],
        }
    }

    pub fn bold_text(x: f32, y: f32, size: f32, color: Rgb, anchor: Anchor, text: impl Into<String>) -> Self {
        PaintCommand::Text {
            x,
            y,
            size,
            color,
            anchor,
            spans: vec![TextSpan::bold(text)],
        }
    }

    /// Concatenated text of a text command; empty for shapes.
    pub fn text_content(&self) -> String {
        match self {
            PaintCommand::Text { spans, .. } => spans.iter().map(|s| s.text.as_str()).collect(),
            _ => String::new(),
        }
    }

    fn write_svg(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = match self {
            PaintCommand::Rect {
                x,
                y,
                width,
                height,
                radius,
                fill,
                opacity,
                stroke,
            } => {
                if *width <= 0.0 || *height <= 0.0 {
                    return;
                }
                let paint = paint_attrs(*fill, *opacity, stroke.as_ref());
                if *radius > 0.0 {
                    writeln!(
                        out,
                        r#"<path d="{}"{}/>"#,
                        rounded_rect_path(*x, *y, *width, *height, *radius),
                        paint
                    )
                } else {
                    writeln!(
                        out,
                        r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
                        x, y, width, height, paint
                    )
                }
            }
            PaintCommand::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                x1, y1, x2, y2, color, width
            ),
            PaintCommand::Circle { cx, cy, r, fill } => writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                cx, cy, r, fill
            ),
            PaintCommand::Text {
                x,
                y,
                size,
                color,
                anchor,
                spans,
            } => {
                let mut body = String::new();
                for span in spans {
                    let mut attrs = String::new();
                    if span.bold {
                        attrs.push_str(r#" font-weight="bold""#);
                    }
                    if span.italic {
                        attrs.push_str(r#" font-style="italic""#);
                    }
                    let _ = write!(body, "<tspan{}>{}</tspan>", attrs, escape_xml(&span.text));
                }
                writeln!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}" dominant-baseline="central" xml:space="preserve">{}</text>"#,
                    x,
                    y,
                    size,
                    color,
                    anchor.as_svg(),
                    body
                )
            }
        };
    }
}

fn paint_attrs(fill: Rgb, opacity: f32, stroke: Option<&Stroke>) -> String {
    let mut attrs = format!(r#" fill="{}""#, fill);
    if opacity < 1.0 {
        let _ = write!(attrs, r#" fill-opacity="{}""#, opacity);
    }
    if let Some(stroke) = stroke {
        let _ = write!(
            attrs,
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color, stroke.width
        );
    }
    attrs
}

/// Escape markup and drop characters XML 1.0 cannot carry at all.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c < '\u{20}' || c == '\u{fffe}' || c == '\u{ffff}' => {}
            c => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub layer: Layer,
    pub command: PaintCommand,
}

/// An ordered, layered display list for one canvas.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub font_family: String,
    items: Vec<DrawItem>,
}

impl Scene {
    pub fn new(width: f32, height: f32, font_family: impl Into<String>) -> Self {
        Self {
            width,
            height,
            font_family: font_family.into(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: Layer, command: PaintCommand) {
        self.items.push(DrawItem { layer, command });
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &PaintCommand> + '_ {
        self.items
            .iter()
            .filter(move |item| item.layer == layer)
            .map(|item| &item.command)
    }

    pub fn count(&self, layer: Layer) -> usize {
        self.layer(layer).count()
    }

    /// Text content of every text command on `layer`, in paint order.
    pub fn texts(&self, layer: Layer) -> Vec<String> {
        self.layer(layer)
            .filter(|c| matches!(c, PaintCommand::Text { .. }))
            .map(PaintCommand::text_content)
            .collect()
    }

    /// Index of the first command on `layer` in paint order.
    pub fn first_index(&self, layer: Layer) -> Option<usize> {
        self.items.iter().position(|item| item.layer == layer)
    }

    /// Index of the last command on `layer` in paint order.
    pub fn last_index(&self, layer: Layer) -> Option<usize> {
        self.items.iter().rposition(|item| item.layer == layer)
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(128 + self.items.len() * 96);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{f}">"#,
            w = self.width,
            h = self.height,
            f = escape_xml(&self.font_family),
        );
        for item in &self.items {
            item.command.write_svg(&mut out);
        }
        out.push_str("</svg>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_queries_by_layer() {
        let mut scene = Scene::new(100.0, 50.0, "sans-serif");
        scene.push(Layer::Background, PaintCommand::fill_rect(0.0, 0.0, 100.0, 50.0, Rgb::WHITE));
        scene.push(
            Layer::Title,
            PaintCommand::bold_text(50.0, 10.0, 18.0, Rgb::BLACK, Anchor::Middle, "Hi"),
        );
        scene.push(Layer::Background, PaintCommand::fill_rect(0.0, 0.0, 1.0, 1.0, Rgb::BLACK));
        assert_eq!(scene.count(Layer::Background), 2);
        assert_eq!(scene.texts(Layer::Title), vec!["Hi".to_string()]);
        assert_eq!(scene.first_index(Layer::Title), Some(1));
        assert_eq!(scene.last_index(Layer::Background), Some(2));
    }

    #[test]
    fn svg_escapes_text_and_rounds_bars() {
        let mut scene = Scene::new(100.0, 50.0, "'DejaVu Sans', sans-serif");
        scene.push(
            Layer::LegendText,
            PaintCommand::text(0.0, 10.0, 12.0, Rgb::BLACK, Anchor::Start, "R&D <team>"),
        );
        scene.push(
            Layer::VacationBar,
            PaintCommand::Rect {
                x: 2.0,
                y: 5.0,
                width: 26.0,
                height: 30.0,
                radius: 5.0,
                fill: Rgb::new(255, 0, 0),
                opacity: 1.0,
                stroke: None,
            },
        );
        let svg = scene.to_svg();
        assert!(svg.contains("R&amp;D &lt;team&gt;"));
        assert!(svg.contains("font-family=\"&apos;DejaVu Sans&apos;, sans-serif\""));
        assert!(svg.contains(r##"<path d="M7 5H23A5 5 0 0 1 28 10"##));
        assert!(svg.contains(r##"fill="#ff0000""##));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn degenerate_rects_are_skipped() {
        let mut scene = Scene::new(10.0, 10.0, "sans-serif");
        scene.push(Layer::WeekendShade, PaintCommand::fill_rect(0.0, 0.0, 10.0, 0.0, Rgb::BLACK));
        assert!(!scene.to_svg().contains("<rect"));
    }

    #[test]
    fn svg_drops_characters_xml_cannot_hold() {
        assert_eq!(escape_xml("Bob\u{7}"), "Bob");
        assert_eq!(escape_xml("tab\u{1}x\tend\u{ffff}"), "tabx\tend");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
    }
}
