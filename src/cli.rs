// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::RenderConfig;
use crate::error::FraktalError;

#[derive(Parser, Debug, Clone)]
#[command(name = "fraktal")]
#[command(about = "Mandelbrot escape-time renderer", long_about = None)]
pub struct Cli {
    /// JSON file with render settings (flags below override it)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Lower bound of the real axis
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,

    /// Upper bound of the real axis
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    /// Lower bound of the imaginary axis
    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,

    /// Upper bound of the imaginary axis
    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,

    /// Escape-time iteration cap
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Folds defaults, the optional config file, and explicit flags into
    /// the final render configuration
    pub fn resolve(&self) -> Result<RenderConfig, FraktalError> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_file(path)?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(x_min) = self.x_min {
            config.x_min = x_min;
        }
        if let Some(x_max) = self.x_max {
            config.x_max = x_max;
        }
        if let Some(y_min) = self.y_min {
            config.y_min = y_min;
        }
        if let Some(y_max) = self.y_max {
            config.y_max = y_max;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.max_iterations = max_iterations;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_resolves_to_defaults() {
        let cli = Cli::parse_from(["fraktal"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "fraktal",
            "--width",
            "200",
            "--x-min",
            "-1.2",
            "--max-iterations",
            "50",
            "--output",
            "out.bin",
        ]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.width, 200);
        assert_eq!(config.height, 100);
        assert_eq!(config.x_min, -1.2);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.output, PathBuf::from("out.bin"));
    }
}
