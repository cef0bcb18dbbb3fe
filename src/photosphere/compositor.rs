//! Panorama compositing
//!
//! Reconciles declared geometry with the decoded raster and places the raster
//! on a black canvas of the full panorama size.

use image::{GenericImage, Rgb, RgbImage};
use tracing::{debug, warn};

use crate::photosphere::common::error::{PadError, Result};
use crate::photosphere::xmp::PanoramaGeometry;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Largest canvas side a JPEG frame header can describe.
pub const MAX_CANVAS_SIDE: u32 = u16::MAX as u32;

const CHANNELS: usize = 3;

/// Canvas size and the position of the source raster on it, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub left: u32,
    pub top: u32,
}

/// Rescales the canvas and offset fields when the decoded height differs from
/// the declared crop height. Crop width and height keep their declared values
/// and widths are never compared. Returns whether a rescale happened.
pub fn rescale_to_height(geometry: &mut PanoramaGeometry, decoded_height: u32) -> Result<bool> {
    let decoded_height = i64::from(decoded_height);
    if decoded_height == geometry.crop_height {
        return Ok(false);
    }

    if geometry.crop_height <= 0 {
        return Err(PadError::InvalidGeometry(format!(
            "declared crop height {} cannot be rescaled to {}",
            geometry.crop_height, decoded_height
        )));
    }

    let scale = decoded_height as f64 / geometry.crop_height as f64;
    debug!(
        declared = geometry.crop_height,
        decoded = decoded_height,
        scale,
        "Declared crop height does not match image, rescaling geometry"
    );

    let apply = |value: i64| (value as f64 * scale) as i64;
    geometry.total_width = apply(geometry.total_width);
    geometry.total_height = apply(geometry.total_height);
    geometry.crop_left = apply(geometry.crop_left);
    geometry.crop_top = apply(geometry.crop_top);

    Ok(true)
}

/// Checks that a `source_width` x `source_height` raster placed at the crop
/// offset lies inside the canvas.
pub fn placement(geometry: &PanoramaGeometry, source_width: u32, source_height: u32) -> Result<Placement> {
    let canvas_width = pixel_count("full panorama width", geometry.total_width)?;
    let canvas_height = pixel_count("full panorama height", geometry.total_height)?;
    if canvas_width == 0 || canvas_height == 0 {
        return Err(PadError::InvalidGeometry(format!(
            "empty panorama canvas {}x{}",
            canvas_width, canvas_height
        )));
    }
    check_canvas(canvas_width, canvas_height)?;

    let left = pixel_count("crop left", geometry.crop_left)?;
    let top = pixel_count("crop top", geometry.crop_top)?;

    let right = u64::from(left) + u64::from(source_width);
    let bottom = u64::from(top) + u64::from(source_height);
    if right > u64::from(canvas_width) || bottom > u64::from(canvas_height) {
        return Err(PadError::InvalidGeometry(format!(
            "{}x{} image at ({}, {}) exceeds {}x{} canvas",
            source_width, source_height, left, top, canvas_width, canvas_height
        )));
    }

    Ok(Placement {
        canvas_width,
        canvas_height,
        left,
        top,
    })
}

fn pixel_count(name: &str, value: i64) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| PadError::InvalidGeometry(format!("{} out of range: {}", name, value)))
}

/// Rejects canvases the encoder cannot write or whose buffer size overflows.
fn check_canvas(width: u32, height: u32) -> Result<()> {
    let too_large = || PadError::InvalidDimensions(u64::from(width), u64::from(height));

    if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
        return Err(too_large());
    }

    usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .and_then(|(w, h)| w.checked_mul(h))
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or_else(too_large)?;

    Ok(())
}

/// Allocates an opaque black canvas and copies `source` onto it unchanged.
pub fn composite(placement: &Placement, source: &RgbImage) -> Result<RgbImage> {
    check_canvas(placement.canvas_width, placement.canvas_height)?;
    let mut canvas = RgbImage::from_pixel(placement.canvas_width, placement.canvas_height, BLACK);
    canvas
        .copy_from(source, placement.left, placement.top)
        .map_err(|e| PadError::InvalidGeometry(e.to_string()))?;
    Ok(canvas)
}

/// Rescale, validate and composite in one step. `geometry` is left in its
/// rescaled state. A canvas side larger than `max_dimension` is rejected
/// before allocation.
pub fn pad_raster(
    geometry: &mut PanoramaGeometry,
    source: &RgbImage,
    max_dimension: Option<u32>,
) -> Result<RgbImage> {
    rescale_to_height(geometry, source.height())?;

    let placement = placement(geometry, source.width(), source.height())?;
    if let Some(max) = max_dimension {
        if placement.canvas_width > max || placement.canvas_height > max {
            warn!(
                "Canvas {}x{} exceeds maximum {}",
                placement.canvas_width, placement.canvas_height, max
            );
            return Err(PadError::InvalidDimensions(
                u64::from(placement.canvas_width),
                u64::from(placement.canvas_height),
            ));
        }
    }

    debug!(?placement, "Compositing onto canvas");
    composite(&placement, source)
}
