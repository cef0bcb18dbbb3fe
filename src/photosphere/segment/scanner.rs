use std::io::{ErrorKind, Read};

use tracing::trace;

use crate::photosphere::common::error::{PadError, Result};
use crate::photosphere::segment::types::{Marker, Segment, LENGTH_FIELD_SIZE, MARKER_PREFIX};

/// Forward-only scanner over a byte stream.
///
/// Bytes are pulled one at a time, so unbuffered sources (files, sockets)
/// should be wrapped in a `BufReader`. The scanner never seeks and keeps
/// track of the absolute stream position it has consumed.
pub struct SegmentScanner<R> {
    reader: R,
    position: u64,
}

impl<R: Read> SegmentScanner<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Finds the next segment introduced by `0xFF` followed by `marker`.
    ///
    /// Returns `Ok(None)` when the stream ends before a marker is seen. A stream
    /// that ends inside the length field or payload, or a declared length below
    /// two, yields [`PadError::CorruptSegment`]. Repeated calls continue from
    /// the end of the previous segment.
    pub fn next_segment(&mut self, marker: Marker) -> Result<Option<Segment>> {
        let mut prev = 0u8;

        loop {
            let Some(byte) = self.read_byte()? else {
                return Ok(None);
            };

            if prev == MARKER_PREFIX && byte == marker.byte() {
                return self.read_segment().map(Some);
            }

            prev = byte;
        }
    }

    /// Iterates over every remaining segment with `marker`.
    pub fn segments(&mut self, marker: Marker) -> Segments<'_, R> {
        Segments {
            scanner: self,
            marker,
            done: false,
        }
    }

    fn read_segment(&mut self) -> Result<Segment> {
        let length_at = self.position;

        let mut length = [0u8; 2];
        self.fill(&mut length, length_at, "length field")?;
        let declared = u16::from_be_bytes(length);

        let size = declared.checked_sub(LENGTH_FIELD_SIZE).ok_or_else(|| {
            PadError::CorruptSegment {
                offset: length_at,
                reason: format!("declared length {} is shorter than the length field", declared),
            }
        })?;

        let offset = self.position;
        let mut data = vec![0u8; usize::from(size)];
        self.fill(&mut data, offset, "payload")?;

        trace!(offset, size, "Read segment");
        Ok(Segment { offset, data })
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.position += 1;
                    return Ok(Some(byte[0]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn fill(&mut self, buf: &mut [u8], at: u64, what: &str) -> Result<()> {
        match self.reader.read_exact(buf) {
            Ok(()) => {
                self.position += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(PadError::CorruptSegment {
                offset: at,
                reason: format!("truncated {}: expected {} bytes", what, buf.len()),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

/// Iterator returned by [`SegmentScanner::segments`]. Stops after the first error.
pub struct Segments<'a, R> {
    scanner: &'a mut SegmentScanner<R>,
    marker: Marker,
    done: bool,
}

impl<R: Read> Iterator for Segments<'_, R> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.next_segment(self.marker) {
            Ok(Some(segment)) => Some(Ok(segment)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
