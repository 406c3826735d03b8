//! Geometric turtle that records the line segments it draws.

use super::Turtle;
use crate::config::CanvasConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

/// A line drawn while the pen was down. Coordinates are y-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Turtle state plus everything it has drawn so far.
///
/// Heading is in degrees, counter-clockwise from the positive x axis.
#[derive(Debug, Clone)]
pub struct Canvas {
    position: Point,
    heading: f64,
    pen_down: bool,
    segments: Vec<Segment>,
}

impl Canvas {
    pub fn new(heading: f64, pen_down: bool) -> Self {
        Self {
            position: Point::ORIGIN,
            heading,
            pen_down,
            segments: Vec::new(),
        }
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.start_heading, config.pen_down)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Bounding box of all drawn segments as `(min, max)`.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.segments.iter().flat_map(|s| [s.from, s.to]);
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Point {
                    x: min.x.min(p.x),
                    y: min.y.min(p.y),
                },
                Point {
                    x: max.x.max(p.x),
                    y: max.y.max(p.y),
                },
            )
        }))
    }

    fn move_by(&mut self, distance: f64) {
        let radians = self.heading.to_radians();
        let to = Point {
            x: self.position.x + distance * radians.cos(),
            y: self.position.y + distance * radians.sin(),
        };
        if self.pen_down {
            self.segments.push(Segment {
                from: self.position,
                to,
            });
        }
        self.position = to;
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::from_config(&CanvasConfig::default())
    }
}

impl Turtle for Canvas {
    fn forward(&mut self, distance: f64) {
        self.move_by(distance);
    }

    fn backward(&mut self, distance: f64) {
        self.move_by(-distance);
    }

    fn left(&mut self, angle: f64) {
        self.heading = (self.heading + angle).rem_euclid(360.0);
    }

    fn pen_up(&mut self) {
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        self.pen_down = true;
    }
}
