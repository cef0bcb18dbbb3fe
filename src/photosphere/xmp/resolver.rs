use tracing::{debug, instrument};

use crate::photosphere::common::error::{PadError, Result};
use crate::photosphere::segment::{Marker, Segment, SegmentScanner};
use crate::photosphere::xmp::schema;
use crate::photosphere::xmp::types::PanoramaGeometry;

/// Prefix that marks an APP1 payload as an XMP packet.
pub const XMP_SENTINEL: &[u8] = b"http://ns.adobe.com/xap/1.0/\0";

pub fn is_xmp(segment: &Segment) -> bool {
    segment.data.starts_with(XMP_SENTINEL)
}

/// The XML following the sentinel, or `None` for non-XMP payloads.
pub fn xmp_packet(segment: &Segment) -> Option<&[u8]> {
    segment.data.strip_prefix(XMP_SENTINEL)
}

/// Scans APP1 segments for the first XMP packet that carries Photo Sphere
/// properties and returns its normalized geometry.
///
/// Segments without the XMP sentinel, packets that fail to deserialize and
/// packets without a GPano description are skipped. Scanner errors abort the
/// search. Running out of segments yields [`PadError::MetadataNotFound`].
#[instrument(skip(data), fields(input_size = data.len()))]
pub fn extract_geometry(data: &[u8]) -> Result<PanoramaGeometry> {
    let mut scanner = SegmentScanner::new(data);

    while let Some(segment) = scanner.next_segment(Marker::APP1)? {
        let Some(packet) = xmp_packet(&segment) else {
            debug!(offset = segment.offset, "Skipping APP1 segment without XMP sentinel");
            continue;
        };

        let meta = match schema::parse_packet(packet) {
            Ok(meta) => meta,
            Err(e) => {
                debug!(offset = segment.offset, error = %e, "Skipping unreadable XMP packet");
                continue;
            }
        };

        let Some(description) = meta.into_panorama_description() else {
            debug!(offset = segment.offset, "Skipping XMP packet without panorama namespace");
            continue;
        };

        let geometry = description.normalize();
        debug!(offset = segment.offset, ?geometry, "Found photo sphere metadata");
        return Ok(geometry);
    }

    Err(PadError::MetadataNotFound)
}
