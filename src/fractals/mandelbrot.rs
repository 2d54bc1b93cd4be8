use log::debug;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::time::Instant;

use crate::config::{RenderConfig, BYTES_PER_PIXEL};

use super::*;

/// How the parallel renderer splits the flat pixel range between workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// One contiguous block of `ceil(pixels / workers)` pixels per worker.
    #[default]
    Static,
    /// One task per raster row, balanced by work stealing.
    Rows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Serial,
    Parallel { workers: usize, schedule: Schedule },
}

pub fn render(config: &RenderConfig, mode: Mode) -> Result<Vec<u8>> {
    let fractal = Fractal::new(*config);
    match mode {
        Mode::Serial => Ok(fractal.render_serial()),
        Mode::Parallel { workers, schedule } => fractal.render_parallel(workers, schedule),
    }
}

/// Fails with the first differing byte offset if two framebuffers disagree.
pub fn verify_identical(serial: &[u8], parallel: &[u8]) -> Result<()> {
    if serial.len() != parallel.len() {
        return Err(FractalError::Mismatch {
            offset: serial.len().min(parallel.len()),
        });
    }
    match serial.iter().zip(parallel).position(|(a, b)| a != b) {
        Some(offset) => Err(FractalError::Mismatch { offset }),
        None => Ok(()),
    }
}

impl Fractal {
    pub fn render_serial(&self) -> Vec<u8> {
        let raster = self.config.raster;
        let mut framebuffer = vec![0; raster.buffer_len()];
        let start = Instant::now();

        let mut current_byte = 0;
        for y in 0..raster.height {
            for x in 0..raster.width {
                let color = self.pixel_color(x, y);
                framebuffer[current_byte..current_byte + BYTES_PER_PIXEL]
                    .copy_from_slice(&color.to_bytes());
                current_byte += BYTES_PER_PIXEL;
            }
        }

        debug!("serial render took {:.2?}", start.elapsed());
        framebuffer
    }

    pub fn render_parallel(&self, workers: usize, schedule: Schedule) -> Result<Vec<u8>> {
        if workers == 0 {
            return Err(FractalError::InvalidWorkers);
        }
        let raster = self.config.raster;
        let mut framebuffer = vec![0; raster.buffer_len()];
        let pool = ThreadPoolBuilder::new().num_threads(workers).build()?;

        let chunk_pixels = match schedule {
            Schedule::Static => raster.pixel_count().div_ceil(workers),
            Schedule::Rows => raster.width as usize,
        }
        .max(1);

        let start = Instant::now();
        pool.install(|| {
            framebuffer
                .par_chunks_mut(chunk_pixels * BYTES_PER_PIXEL)
                .enumerate()
                .for_each(|(index, chunk)| self.fill_range(index * chunk_pixels, chunk));
        });

        debug!(
            "parallel render ({workers} workers, {schedule:?}) took {:.2?}",
            start.elapsed()
        );
        Ok(framebuffer)
    }
}
