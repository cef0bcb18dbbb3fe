//! JPEG codec module
//!
//! Decode and encode seams for the pad pipeline, backed by the `image` crate.

mod reader;
mod writer;
mod jpeg_reader;
mod jpeg_writer;
pub mod types;

pub use reader::PanoramaReader;
pub use writer::PanoramaWriter;
pub use jpeg_reader::JpegReader;
pub use jpeg_writer::JpegWriter;
pub use types::{PadConfig, PadConfigBuilder, DEFAULT_QUALITY};
