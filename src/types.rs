use num_complex::Complex;

use crate::error::FraktalError;

/// Pixel - one RGB sample, exactly 3 bytes with no padding
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// All three channels set to the same intensity
    pub const fn splat(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Channel by position: 0 = red, 1 = green, 2 = blue
    pub fn channel(&self, index: usize) -> Result<u8, FraktalError> {
        match index {
            0 => Ok(self.r),
            1 => Ok(self.g),
            2 => Ok(self.b),
            _ => Err(FraktalError::IndexOutOfRange { index }),
        }
    }

    pub fn set_channel(&mut self, index: usize, value: u8) -> Result<(), FraktalError> {
        match index {
            0 => self.r = value,
            1 => self.g = value,
            2 => self.b = value,
            _ => return Err(FraktalError::IndexOutOfRange { index }),
        }
        Ok(())
    }
}

/// PlaneWindow - the rectangle of the complex plane an image maps onto
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlaneWindow {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Complex point for the pixel at (column, row) in a width x height
    /// image. Samples the top-left corner of the pixel cell, not its center.
    pub fn point_at(&self, column: usize, row: usize, width: usize, height: usize) -> Complex<f64> {
        let re = self.x_min + (self.x_max - self.x_min) * column as f64 / width as f64;
        let im = self.y_min + (self.y_max - self.y_min) * row as f64 / height as f64;
        Complex::new(re, im)
    }
}
