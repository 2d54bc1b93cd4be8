use crate::error::FractalError;
use crate::fractals::Result;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;
pub const BPP: u32 = 24;
pub const BYTES_PER_PIXEL: usize = (BPP / 8) as usize;
pub const MAX_ITERATIONS: u32 = 50;
pub const NUM_THREADS: usize = 4;
pub const VIEWPORT: (f32, f32, f32, f32) = (-2.0, 1.0, -1.0, 1.0); // min_x, max_x, min_y, max_y
pub const OUTPUT_FILE: &str = "mandelbrot.tga";
pub const USAGE: &str = "usage: mandelbrot-dp [<size> <min_x> <max_x> <min_y> <max_y> <iterations>]";

/// Rectangle of the complex plane that gets mapped onto the raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Viewport {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Result<Viewport> {
        let finite = [min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite());
        if !finite || min_x >= max_x || min_y >= max_y {
            return Err(FractalError::InvalidViewport {
                min_x,
                max_x,
                min_y,
                max_y,
            });
        }
        Ok(Viewport {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        let (min_x, max_x, min_y, max_y) = VIEWPORT;
        Viewport {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
}

/// Pixel extent of the image. Bit depth is always 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Result<Raster> {
        if width == 0 || height == 0 {
            return Err(FractalError::InvalidRaster { width, height });
        }
        Ok(Raster { width, height })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn buffer_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }
}

impl Default for Raster {
    fn default() -> Self {
        Raster {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

/// Everything a render needs. Built once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub raster: Raster,
    pub viewport: Viewport,
    pub max_iterations: u32,
}

impl RenderConfig {
    pub fn new(raster: Raster, viewport: Viewport, max_iterations: u32) -> Result<RenderConfig> {
        if max_iterations == 0 {
            return Err(FractalError::InvalidIterations);
        }
        Ok(RenderConfig {
            raster,
            viewport,
            max_iterations,
        })
    }

    /// Parses the positional command line (program name already stripped).
    ///
    /// No arguments keeps every default. Otherwise exactly six are expected:
    /// `<size> <min_x> <max_x> <min_y> <max_y> <iterations>`, where `size` is
    /// used for both width and height.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<RenderConfig> {
        match args {
            [] => Ok(RenderConfig::default()),
            [size, min_x, max_x, min_y, max_y, iterations] => {
                let size = parse_arg::<u32>("size", size.as_ref())?;
                let viewport = Viewport::new(
                    parse_arg("min_x", min_x.as_ref())?,
                    parse_arg("max_x", max_x.as_ref())?,
                    parse_arg("min_y", min_y.as_ref())?,
                    parse_arg("max_y", max_y.as_ref())?,
                )?;
                let iterations = parse_arg("iterations", iterations.as_ref())?;
                RenderConfig::new(Raster::new(size, size)?, viewport, iterations)
            }
            _ => Err(FractalError::Usage { got: args.len() }),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            raster: Raster::default(),
            viewport: Viewport::default(),
            max_iterations: MAX_ITERATIONS,
        }
    }
}

fn parse_arg<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| FractalError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}
