//! JPEG decoding through the `image` crate.

use image::{ImageFormat, RgbImage};
use tracing::debug;

use crate::photosphere::common::error::{PadError, Result};
use crate::photosphere::jpeg::reader::PanoramaReader;

/// Decodes JPEG bytes into an 8-bit RGB raster.
///
/// Grayscale and CMYK sources are converted to RGB so the compositor only
/// ever sees one pixel layout.
pub struct JpegReader;

impl PanoramaReader for JpegReader {
    fn read_image(&self, data: &[u8]) -> Result<RgbImage> {
        debug!("Decoding JPEG image, {} bytes", data.len());

        let decoded = image::load_from_memory_with_format(data, ImageFormat::Jpeg)
            .map_err(|e| PadError::DecodeError(e.to_string()))?;

        let rgb = decoded.into_rgb8();
        debug!("Decoded image: {}x{}", rgb.width(), rgb.height());

        Ok(rgb)
    }
}
