use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::info;

use fraktal::cli::Cli;
use fraktal::{render, save_to_file, PixelGrid};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve()?;
    config.validate()?;

    info!(
        "rendering {}x{} over [{}, {}] x [{}, {}], {} max iterations",
        config.width,
        config.height,
        config.x_min,
        config.x_max,
        config.y_min,
        config.y_max,
        config.max_iterations
    );

    let mut grid = PixelGrid::new(config.width, config.height);
    let started = Instant::now();
    render(&mut grid, &config.window(), config.max_iterations);
    info!("rendered in {:.2?}", started.elapsed());

    save_to_file(&grid, &config.output)?;
    println!("Wrote {} bytes to {}", grid.len() * 3, config.output.display());

    Ok(())
}
