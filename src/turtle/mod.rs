//! Turtle devices — the pen-and-cursor targets the evaluator drives.

pub mod canvas;
pub mod svg;

pub use canvas::{Canvas, Point, Segment};
pub use svg::SvgStyle;

use serde::Serialize;

/// The movement and pen API an evaluator needs from a device.
pub trait Turtle {
    fn forward(&mut self, distance: f64);
    fn backward(&mut self, distance: f64);
    /// Turn counter-clockwise by `angle` degrees.
    fn left(&mut self, angle: f64);
    fn pen_up(&mut self);
    fn pen_down(&mut self);
}

/// A single device command, as issued.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum Command {
    Forward(f64),
    Backward(f64),
    Left(f64),
    PenUp,
    PenDown,
}

/// Records every command in order without drawing anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommandLog {
    pub commands: Vec<Command>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn push(&mut self, command: Command) {
        tracing::trace!(?command, "turtle");
        self.commands.push(command);
    }
}

impl Turtle for CommandLog {
    fn forward(&mut self, distance: f64) {
        self.push(Command::Forward(distance));
    }

    fn backward(&mut self, distance: f64) {
        self.push(Command::Backward(distance));
    }

    fn left(&mut self, angle: f64) {
        self.push(Command::Left(angle));
    }

    fn pen_up(&mut self) {
        self.push(Command::PenUp);
    }

    fn pen_down(&mut self) {
        self.push(Command::PenDown);
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Forward(d) => write!(f, "forward {d}"),
            Command::Backward(d) => write!(f, "backward {d}"),
            Command::Left(a) => write!(f, "left {a}"),
            Command::PenUp => f.write_str("penup"),
            Command::PenDown => f.write_str("pendown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_records_in_order() {
        let mut log = CommandLog::new();
        log.pen_up();
        log.forward(10.0);
        log.left(90.0);
        log.backward(2.5);
        log.pen_down();
        assert_eq!(
            log.commands,
            vec![
                Command::PenUp,
                Command::Forward(10.0),
                Command::Left(90.0),
                Command::Backward(2.5),
                Command::PenDown,
            ]
        );
    }

    #[test]
    fn command_display() {
        assert_eq!(Command::Left(45.0).to_string(), "left 45");
        assert_eq!(Command::PenDown.to_string(), "pendown");
    }

    #[test]
    fn log_serializes_to_json() {
        let mut log = CommandLog::new();
        log.forward(1.5);
        log.pen_up();
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(
            json,
            r#"{"commands":[{"command":"forward","value":1.5},{"command":"pen_up"}]}"#
        );
    }
}
