//! Marker segment types

/// Byte that introduces every JPEG marker code.
pub const MARKER_PREFIX: u8 = 0xFF;

/// Size of the big-endian length field that follows a marker. The declared
/// length counts these two bytes.
pub const LENGTH_FIELD_SIZE: u16 = 2;

/// Second byte of a JPEG marker code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker(pub u8);

impl Marker {
    /// Application segment 1, used for EXIF and XMP packets.
    pub const APP1: Marker = Marker(0xE1);

    pub const fn byte(self) -> u8 {
        self.0
    }
}

/// A located marker segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Absolute stream position of the first payload byte (marker byte + 3).
    /// Counted from where the scanner started, not from each `next_segment` call.
    pub offset: u64,
    /// Payload bytes, without the length field
    pub data: Vec<u8>,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
