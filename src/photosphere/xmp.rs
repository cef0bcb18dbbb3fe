//! Photo Sphere XMP metadata
//!
//! Finds the XMP packet carrying Google Photo Sphere (GPano) properties and
//! turns it into a canonical [`PanoramaGeometry`].

mod schema;
mod resolver;
pub mod types;

pub use resolver::{extract_geometry, is_xmp, xmp_packet, XMP_SENTINEL};
pub use types::{PanoramaGeometry, GPANO_NAMESPACE};
