use std::io::Write;

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use crate::photosphere::common::error::{PadError, Result};
use crate::photosphere::jpeg::types::PadConfig;
use crate::photosphere::jpeg::writer::PanoramaWriter;

pub struct JpegWriter;

impl PanoramaWriter for JpegWriter {
    fn write_image(&self, image: &RgbImage, output: &mut dyn Write, config: &PadConfig) -> Result<()> {
        let quality = config.effective_quality();
        debug!("Encoding JPEG image: {}x{} at quality {}", image.width(), image.height(), quality);

        // Encode fully before touching the output so a failed encode leaves it untouched.
        let mut buffer: Vec<u8> = Vec::new();
        JpegEncoder::new_with_quality(&mut buffer, quality)
            .encode_image(image)
            .map_err(|e| PadError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("JPEG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
