use thiserror::Error;

#[derive(Error, Debug)]
pub enum FractalError {
    #[error("expected 0 or 6 arguments, got {got}")]
    Usage { got: usize },

    #[error("invalid value for '{name}': {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("raster must be at least 1x1, got {width}x{height}")]
    InvalidRaster { width: u32, height: u32 },

    #[error("invalid viewport x:[{min_x}, {max_x}] y:[{min_y}, {max_y}]")]
    InvalidViewport {
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
    },

    #[error("iteration bound must be positive")]
    InvalidIterations,

    #[error("worker count must be positive")]
    InvalidWorkers,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("serial and parallel framebuffers differ at byte {offset}")]
    Mismatch { offset: usize },

    #[error("framebuffer holds {actual} bytes, raster needs {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("failed to create output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
