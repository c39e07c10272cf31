use num_complex::Complex;
use rayon::prelude::*;

use crate::grid::PixelGrid;
use crate::types::{Pixel, PlaneWindow};

/// Escape radius squared; |z| >= 2 guarantees divergence
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Counts z <- z*z + c steps until |z| reaches 2 or the cap, starting from
/// z = 0. A point that never escapes returns exactly `max_iterations`.
pub fn escape_time(c: Complex<f64>, max_iterations: u32) -> u32 {
    let mut z = Complex::new(0.0, 0.0);
    let mut iteration = 0;
    while z.norm_sqr() < ESCAPE_RADIUS_SQ && iteration < max_iterations {
        z = z * z + c;
        iteration += 1;
    }
    iteration
}

/// Grayscale intensity for an escape count: the iteration/cap ratio scaled
/// onto 0..=255 with a truncating cast. Non-escaping points map to 255.
fn intensity(iteration: u32, max_iterations: u32) -> u8 {
    let ratio = iteration as f64 / max_iterations as f64;
    (ratio * 255.0) as u8
}

/// Fills the grid with the escape-time rendering of `window`.
///
/// Rows render in parallel. Every pixel depends only on its own coordinates
/// and each pixel's iteration runs sequentially, so the output is identical
/// to a sequential row-major pass. The grid must have non-zero dimensions
/// and `max_iterations` must be positive (`RenderConfig::validate` enforces
/// both ahead of this call).
pub fn render(grid: &mut PixelGrid, window: &PlaneWindow, max_iterations: u32) {
    let width = grid.width();
    let height = grid.height();

    grid.pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, pixels)| {
            render_row(pixels, row, width, height, window, max_iterations);
        });
}

/// Renders one row of `width` pixels at row index `row`
fn render_row(
    pixels: &mut [Pixel],
    row: usize,
    width: usize,
    height: usize,
    window: &PlaneWindow,
    max_iterations: u32,
) {
    for (column, pixel) in pixels.iter_mut().enumerate() {
        let c = window.point_at(column, row, width, height);
        let iteration = escape_time(c, max_iterations);
        *pixel = Pixel::splat(intensity(iteration, max_iterations));
    }
}
