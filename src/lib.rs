pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod renderer;
pub mod serializer;
pub mod types;

// Re-export the pipeline surface so callers can skip the module paths
pub use config::RenderConfig;
pub use error::FraktalError;
pub use grid::PixelGrid;
pub use renderer::{escape_time, render};
pub use serializer::save_to_file;
pub use types::{Pixel, PlaneWindow};
