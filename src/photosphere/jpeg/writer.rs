use std::io::Write;

use image::RgbImage;

use crate::photosphere::common::error::Result;
use crate::photosphere::jpeg::types::PadConfig;

pub trait PanoramaWriter {
    fn write_image(&self, image: &RgbImage, output: &mut dyn Write, config: &PadConfig) -> Result<()>;
}
