//! Configuration — loads optional ~/.turtle-logo/config.yaml.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Top-level configuration. Every field falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub interpreter: InterpreterConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub svg: SvgConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InterpreterConfig {
    /// Procedure calls allowed to be active at once.
    #[serde(default = "default_max_call_depth")]
    pub max_call_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_call_depth: default_max_call_depth(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CanvasConfig {
    /// Initial heading in degrees, counter-clockwise from east.
    #[serde(default)]
    pub start_heading: f64,
    #[serde(default = "default_true")]
    pub pen_down: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            start_heading: 0.0,
            pen_down: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SvgConfig {
    #[serde(default = "default_stroke")]
    pub stroke: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default)]
    pub background: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            stroke: default_stroke(),
            stroke_width: default_stroke_width(),
            margin: default_margin(),
            background: None,
        }
    }
}

fn default_max_call_depth() -> usize {
    crate::lang::eval::DEFAULT_MAX_CALL_DEPTH
}

fn default_true() -> bool {
    true
}

fn default_stroke() -> String {
    "black".to_string()
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_margin() -> f64 {
    10.0
}

/// Default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".turtle-logo").join("config.yaml"))
}

/// Load configuration from a YAML file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config, io::Error> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
