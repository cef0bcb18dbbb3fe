//! JPEG marker segment scanning
//!
//! Locates length-prefixed marker segments in a forward-only byte stream
//! without parsing the rest of the JPEG structure.

mod scanner;
pub mod types;

pub use scanner::{SegmentScanner, Segments};
pub use types::{Marker, Segment};
