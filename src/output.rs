use image::codecs::tga::TgaEncoder;
use image::{ExtendedColorType, ImageBuffer, ImageEncoder, Rgb};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::config::Raster;
use crate::error::FractalError;
use crate::fractals::Result;

fn is_tga(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tga"))
}

/// Writes a row-major RGB framebuffer to `path`.
///
/// `.tga` files are written uncompressed; any other extension is handed to
/// `image`'s format detection.
pub fn save_framebuffer(framebuffer: &[u8], raster: Raster, path: &Path) -> Result<()> {
    if framebuffer.len() != raster.buffer_len() {
        return Err(FractalError::BufferSize {
            expected: raster.buffer_len(),
            actual: framebuffer.len(),
        });
    }

    if is_tga(path) {
        let writer = BufWriter::new(File::create(path)?);
        TgaEncoder::new(writer).disable_rle().write_image(
            framebuffer,
            raster.width,
            raster.height,
            ExtendedColorType::Rgb8,
        )?;
    } else {
        let image_buffer =
            ImageBuffer::<Rgb<u8>, &[u8]>::from_raw(raster.width, raster.height, framebuffer)
                .ok_or(FractalError::BufferSize {
                    expected: raster.buffer_len(),
                    actual: framebuffer.len(),
                })?;
        image_buffer.save(path)?;
    }

    info!(
        "saved {}x{} image to {}",
        raster.width,
        raster.height,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_tga_extension() {
        assert!(is_tga(Path::new("out/frame.tga")));
        assert!(is_tga(Path::new("FRAME.TGA")));
        assert!(!is_tga(Path::new("frame.png")));
        assert!(!is_tga(Path::new("tga")));
    }

    #[test]
    fn wrong_length_is_rejected_before_touching_disk() {
        let raster = Raster::new(4, 4).unwrap();
        let path = Path::new("never-written.tga");
        let err = save_framebuffer(&[0; 10], raster, path).unwrap_err();
        assert!(matches!(
            err,
            FractalError::BufferSize {
                expected: 48,
                actual: 10
            }
        ));
        assert!(!path.exists());
    }
}
