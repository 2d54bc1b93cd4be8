pub mod mandelbrot;

use num::Complex;

use crate::{
    colors::{set_color, Color},
    config::{RenderConfig, BYTES_PER_PIXEL},
    error::FractalError,
};

pub use mandelbrot::{render, verify_identical, Mode, Schedule};

pub type Result<T> = std::result::Result<T, FractalError>;

const ESCAPE_RADIUS_SQR: f32 = 4.0;

/// Maps pixel `index` of an axis `extent` pixels long onto `[min, max]`.
///
/// Index 0 lands on `min` and the last pixel, `extent - 1`, on `max`, both
/// exactly. A single-pixel axis sits on `min`. The interpolation runs in f64
/// so the end points survive the final rounding.
pub fn normalize(index: u32, extent: u32, min: f32, max: f32) -> f32 {
    let last = extent.saturating_sub(1).max(1) as f64;
    let (min, max) = (min as f64, max as f64);
    (min + (max - min) * index as f64 / last) as f32
}

/// Outcome of iterating a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// `|z|` passed 2 on the given step (0-based).
    Diverged(u32),
    /// Every step stayed inside the escape radius.
    Bounded,
}

impl Escape {
    /// Step count in `[0, max_iterations]`, with `Bounded` counted as the cap.
    pub fn iterations(self, max_iterations: u32) -> u32 {
        match self {
            Escape::Diverged(n) => n,
            Escape::Bounded => max_iterations,
        }
    }
}

pub fn escape_time(c: Complex<f32>, max_iterations: u32) -> Escape {
    let mut z = c;
    for n in 0..max_iterations {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            return Escape::Diverged(n);
        }
    }
    Escape::Bounded
}

#[derive(Debug, Clone, Copy)]
pub struct Fractal {
    config: RenderConfig,
}

impl Fractal {
    pub fn new(config: RenderConfig) -> Fractal {
        Fractal { config }
    }

    pub fn pix_to_coord(&self, x: u32, y: u32) -> Complex<f32> {
        let raster = self.config.raster;
        let view = self.config.viewport;
        Complex::new(
            normalize(x, raster.width, view.min_x, view.max_x),
            normalize(y, raster.height, view.min_y, view.max_y),
        )
    }

    pub fn escape_at(&self, x: u32, y: u32) -> Escape {
        escape_time(self.pix_to_coord(x, y), self.config.max_iterations)
    }

    pub fn pixel_color(&self, x: u32, y: u32) -> Color {
        set_color(self.escape_at(x, y), self.config.max_iterations)
    }

    /// Colors the pixels starting at flat index `first` into `chunk`, which
    /// holds a whole number of pixels.
    fn fill_range(&self, first: usize, chunk: &mut [u8]) {
        let width = self.config.raster.width as usize;
        for (offset, slot) in chunk.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let index = first + offset;
            let (x, y) = ((index % width) as u32, (index / width) as u32);
            slot.copy_from_slice(&self.pixel_color(x, y).to_bytes());
        }
    }
}
