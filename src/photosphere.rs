//! Photosphere padding module
//!
//! Turns a cropped Photo Sphere JPEG into a full 360x180 equirectangular JPEG.
//! The work is split into a marker segment scanner, an XMP metadata resolver
//! and a compositor, orchestrated by the pad pipeline.

pub mod common;
pub mod segment;
pub mod xmp;
pub mod jpeg;
pub mod compositor;
pub mod conversions;

pub use common::{
    PadError,
    Result,
};

pub use segment::{
    Marker,
    Segment,
    SegmentScanner,
    Segments,
};

pub use xmp::{
    PanoramaGeometry,
    extract_geometry,
    is_xmp,
    xmp_packet,
    GPANO_NAMESPACE,
    XMP_SENTINEL,
};

pub use jpeg::{
    PadConfig,
    PadConfigBuilder,
    DEFAULT_QUALITY,
    PanoramaReader,
    PanoramaWriter,
    JpegReader,
    JpegWriter,
};

pub use conversions::{
    PadPipeline,
    pad,
};
