//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// PNG encoder for framebuffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Encode `fb` as 8-bit RGBA into any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding or the underlying write fails.
    pub fn write<W: Write>(fb: &Framebuffer, out: W) -> Result<()> {
        let mut encoder = png::Encoder::new(out, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        // Use compact pixels to handle stride padding
        writer.write_image_data(&fb.to_compact_pixels())?;
        writer.finish()?;

        Ok(())
    }

    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::write(fb, BufWriter::new(file))
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::write(fb, &mut buffer)?;
        Ok(buffer)
    }

    /// Path of frame `index` in a numbered sequence: `dir/frame_00042.png`.
    #[must_use]
    pub fn frame_path<P: AsRef<Path>>(dir: P, index: usize) -> PathBuf {
        dir.as_ref().join(format!("frame_{index:05}.png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn decode(bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(bytes);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_png_to_bytes() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        let bytes = PngEncoder::to_bytes(&fb).unwrap();
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_png_decodes_to_same_pixels() {
        // Odd width exercises stride padding removal.
        let mut fb = Framebuffer::new(7, 3).unwrap();
        fb.clear(Rgba::new(10, 20, 30, 255));
        fb.set_pixel(6, 2, Rgba::new(200, 100, 50, 128));

        let (info, pixels) = decode(&PngEncoder::to_bytes(&fb).unwrap());
        assert_eq!((info.width, info.height), (7, 3));
        assert_eq!(pixels, fb.to_compact_pixels());
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = PngEncoder::frame_path(dir.path(), 3);
        assert!(path.ends_with("frame_00003.png"));

        let mut fb = Framebuffer::new(16, 16).unwrap();
        fb.clear(Rgba::BLUE);
        PngEncoder::write_to_file(&fb, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, PngEncoder::to_bytes(&fb).unwrap());
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fb = Framebuffer::new(2, 2).unwrap();
        let err = PngEncoder::write_to_file(&fb, dir.path().join("nope/frame.png"));
        assert!(matches!(err, Err(crate::Error::Io(_))));
    }
}
