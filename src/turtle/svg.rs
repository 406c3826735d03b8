//! SVG output for a [`Canvas`].

use std::fmt::{self, Write};

use super::canvas::{Canvas, Point};
use crate::config::SvgConfig;

/// Presentation settings for rendered drawings.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub margin: f64,
    pub background: Option<String>,
}

impl SvgStyle {
    pub fn from_config(config: &SvgConfig) -> Self {
        Self {
            stroke: config.stroke.clone(),
            stroke_width: config.stroke_width,
            margin: config.margin.max(0.0),
            background: config.background.clone(),
        }
    }
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self::from_config(&SvgConfig::default())
    }
}

/// Render everything drawn on `canvas` as a standalone SVG document.
///
/// Turtle space is y-up; SVG is y-down, so y is negated.
pub fn render(canvas: &Canvas, style: &SvgStyle) -> String {
    let mut out = String::new();
    if let Err(e) = write_document(&mut out, canvas, style) {
        tracing::error!(%e, "svg rendering failed");
    }
    out
}

fn write_document(out: &mut impl Write, canvas: &Canvas, style: &SvgStyle) -> fmt::Result {
    let (min, max) = canvas
        .bounds()
        .unwrap_or((Point::ORIGIN, Point::ORIGIN));
    let m = style.margin;
    let x = min.x - m;
    let y = -max.y - m;
    let width = (max.x - min.x) + 2.0 * m;
    let height = (max.y - min.y) + 2.0 * m;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        fmt_coord(x),
        fmt_coord(y),
        fmt_coord(width),
        fmt_coord(height),
        fmt_coord(width),
        fmt_coord(height),
    )?;
    if let Some(background) = &style.background {
        writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{background}"/>"#,
            fmt_coord(x),
            fmt_coord(y),
            fmt_coord(width),
            fmt_coord(height),
        )?;
    }
    writeln!(
        out,
        r#"  <g stroke="{}" stroke-width="{}" stroke-linecap="round" fill="none">"#,
        style.stroke,
        fmt_coord(style.stroke_width),
    )?;
    for segment in canvas.segments() {
        writeln!(
            out,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            fmt_coord(segment.from.x),
            fmt_coord(-segment.from.y),
            fmt_coord(segment.to.x),
            fmt_coord(-segment.to.y),
        )?;
    }
    out.write_str("  </g>\n</svg>\n")
}

/// Three decimals, trailing zeros trimmed, no negative zero.
fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}
