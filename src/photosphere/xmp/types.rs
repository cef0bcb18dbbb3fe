//! Panorama geometry types

/// Namespace URI a description must declare to be read as Photo Sphere metadata.
pub const GPANO_NAMESPACE: &str = "http://ns.google.com/photos/1.0/panorama/";

/// Crop and placement of a cropped photo inside a full equirectangular panorama
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanoramaGeometry {
    /// Width of the full panorama canvas in pixels
    pub total_width: i64,
    /// Height of the full panorama canvas in pixels
    pub total_height: i64,
    /// Column of the cropped photo's left edge within the canvas
    pub crop_left: i64,
    /// Row of the cropped photo's top edge within the canvas
    pub crop_top: i64,
    /// Declared width of the cropped photo; the decoded width is authoritative
    pub crop_width: i64,
    /// Declared height of the cropped photo; the decoded height is authoritative
    pub crop_height: i64,
    /// Pose heading in degrees. Not used for placement.
    pub heading_degrees: f64,
    /// Namespace declared by the description this record came from
    pub namespace: String,
}

impl PanoramaGeometry {
    pub fn has_panorama_namespace(&self) -> bool {
        self.namespace == GPANO_NAMESPACE
    }
}
