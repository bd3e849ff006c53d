//! Header probe acquisition
//!
//! Reads a bounded prefix from a seekable source without disturbing the
//! caller's cursor. The saved position is restored on every exit path,
//! including read failures, so a validated upload stream can still be
//! consumed in full afterwards.

use std::io::{self, Read, Seek, SeekFrom};

use crate::detection::image_signature::{sniff_header, ImageKind, PROBE_CAP};
use crate::errors::AppResult;

/// Restores the source position when dropped.
struct PositionGuard<'a, S: Seek> {
    source: &'a mut S,
    saved: u64,
}

impl<'a, S: Seek> PositionGuard<'a, S> {
    fn new(source: &'a mut S) -> io::Result<Self> {
        let saved = source.stream_position()?;
        Ok(Self { source, saved })
    }
}

impl<S: Seek> Drop for PositionGuard<'_, S> {
    fn drop(&mut self) {
        // A failed restore cannot be reported from drop
        let _ = self.source.seek(SeekFrom::Start(self.saved));
    }
}

/// Read up to `cap` bytes from the start of `source`.
///
/// The source's read position is left where it was before the call, whether
/// the read succeeds or fails. A source shorter than `cap` yields a shorter
/// probe rather than an error.
pub fn read_header_probe<S: Read + Seek>(source: &mut S, cap: usize) -> io::Result<Vec<u8>> {
    let mut guard = PositionGuard::new(source)?;
    guard.source.seek(SeekFrom::Start(0))?;

    let mut header = Vec::with_capacity(cap);
    guard
        .source
        .by_ref()
        .take(cap as u64)
        .read_to_end(&mut header)?;
    Ok(header)
}

/// Validate a seekable upload stream by sniffing its leading bytes.
///
/// Equivalent to [`validate_image_bytes`] for in-memory data; owned buffers
/// can be wrapped in [`io::Cursor`] to use this path. The stream position is
/// unchanged after the call on both success and rejection.
///
/// [`validate_image_bytes`]: crate::detection::validate_image_bytes
pub fn validate_image_stream<S: Read + Seek>(source: &mut S) -> AppResult<ImageKind> {
    let header = read_header_probe(source, PROBE_CAP)?;
    Ok(sniff_header(&header)?)
}
