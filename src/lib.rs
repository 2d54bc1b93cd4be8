//! Mandelbrot renderer with a sequential pixel loop and a data-parallel one
//! that produce byte-identical framebuffers.

pub mod colors;
pub mod config;
pub mod error;
pub mod fractals;
pub mod output;

pub use colors::Color;
pub use config::{Raster, RenderConfig, Viewport};
pub use error::FractalError;
pub use fractals::{render, verify_identical, Fractal, Mode, Result, Schedule};
pub use output::save_framebuffer;
