use image::RgbImage;

use crate::photosphere::common::error::Result;

pub trait PanoramaReader {
    fn read_image(&self, data: &[u8]) -> Result<RgbImage>;
}
