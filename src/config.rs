use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FraktalError;
use crate::types::PlaneWindow;

/// RenderConfig - every knob of the render/serialize pipeline.
///
/// The defaults reproduce the reference output: a 100x100 grid over
/// [-2, 1] x [-1.5, 1.5] at 1000 iterations, written to `fraktal.bin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Lower bound of the real axis
    pub x_min: f64,
    /// Upper bound of the real axis
    pub x_max: f64,
    /// Lower bound of the imaginary axis (row 0 samples this edge)
    pub y_min: f64,
    /// Upper bound of the imaginary axis
    pub y_max: f64,
    /// Escape-time iteration cap
    pub max_iterations: u32,
    /// Output file path
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            x_min: -2.0,
            x_max: 1.0,
            y_min: -1.5,
            y_max: 1.5,
            max_iterations: 1000,
            output: PathBuf::from("fraktal.bin"),
        }
    }
}

impl RenderConfig {
    /// Loads a config from a JSON file; missing fields take the defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FraktalError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FraktalError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(file)
            .map_err(|err| FraktalError::InvalidConfiguration(format!("{path:?}: {err}")))
    }

    /// Rejects parameters the renderer cannot map: zero-area grids,
    /// inverted plane windows, a zero iteration cap.
    pub fn validate(&self) -> Result<(), FraktalError> {
        if self.width == 0 {
            return Err(FraktalError::InvalidConfiguration(
                "width must be positive".into(),
            ));
        }
        if self.height == 0 {
            return Err(FraktalError::InvalidConfiguration(
                "height must be positive".into(),
            ));
        }
        if self.x_max <= self.x_min {
            return Err(FraktalError::InvalidConfiguration(
                "x_max must be greater than x_min".into(),
            ));
        }
        if self.y_max <= self.y_min {
            return Err(FraktalError::InvalidConfiguration(
                "y_max must be greater than y_min".into(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(FraktalError::InvalidConfiguration(
                "max_iterations must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn window(&self) -> PlaneWindow {
        PlaneWindow::new(self.x_min, self.x_max, self.y_min, self.y_max)
    }
}
