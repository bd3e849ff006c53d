//! Image signature whitelisting
//!
//! Classifies the leading bytes of an upload against a closed set of image
//! magic-byte signatures. Detection is deny-by-default: anything that does
//! not match the whitelist exactly is rejected, regardless of the extension
//! or content type the upload declared.
//!
//! ## Design Principles
//!
//! 1. **Whitelist over blacklist**: only JPEG, PNG and WebP pass; every other
//!    payload is rejected, including well-formed formats like GIF
//!
//! 2. **Header bytes only**: classification depends on at most the first 12
//!    bytes of the probe and never interprets or executes the payload
//!
//! 3. **Pure function**: no side effects, no state between calls
//!
//! ## Usage
//!
//! ```rust
//! use upload_guard::detection::{validate_image_bytes, ImageKind};
//!
//! let data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]; // PNG magic
//! let kind = validate_image_bytes(&data).unwrap();
//! assert_eq!(kind, ImageKind::Png);
//! assert_eq!(kind.mime_type(), "image/png");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// Maximum number of bytes inspected from the start of an upload.
///
/// WebP detection needs 12 bytes, PNG 8 and JPEG 3; the 32-byte cap is
/// headroom rather than a requirement, and is part of the public contract.
pub const PROBE_CAP: usize = 32;

/// Shortest probe that could possibly carry a recognizable signature.
pub const MIN_SIGNATURE_LEN: usize = 4;

/// JPEG: FF D8 FF
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

/// PNG: 89 50 4E 47 0D 0A 1A 0A
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// WebP: RIFF container with a WEBP form type at offset 8
const RIFF_MAGIC: &[u8] = b"RIFF";
const WEBP_FORM: &[u8] = b"WEBP";

/// Whitelisted image kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageKind {
    /// JPEG image (magic: FF D8 FF)
    Jpeg,
    /// PNG image (magic: 89 50 4E 47 0D 0A 1A 0A)
    Png,
    /// WebP image (magic: RIFF....WEBP)
    Webp,
}

impl ImageKind {
    /// Canonical lowercase tag, the value upload handlers store
    pub fn tag(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpeg",
            ImageKind::Png => "png",
            ImageKind::Webp => "webp",
        }
    }

    /// Standard MIME type string
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
            ImageKind::Webp => "image/webp",
        }
    }

    /// Canonical file extension without leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpg",
            ImageKind::Png => "png",
            ImageKind::Webp => "webp",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classify a header probe against the signature whitelist.
///
/// Rules are evaluated in fixed priority order and the first match wins.
/// Every comparison is prefix-based, so a probe shorter than a rule's
/// signature simply cannot match that rule; nothing past offset 12 is ever
/// consulted.
pub fn sniff_header(header: &[u8]) -> ValidationResult<ImageKind> {
    if header.len() < MIN_SIGNATURE_LEN {
        return Err(ValidationError::TooSmall { len: header.len() });
    }

    if header.starts_with(JPEG_MAGIC) {
        return Ok(ImageKind::Jpeg);
    }

    if header.starts_with(PNG_MAGIC) {
        return Ok(ImageKind::Png);
    }

    if header.len() >= 12 && header.starts_with(RIFF_MAGIC) && &header[8..12] == WEBP_FORM {
        return Ok(ImageKind::Webp);
    }

    Err(ValidationError::UnrecognizedFormat)
}

/// Validate an in-memory upload by sniffing its leading bytes.
///
/// Only the first [`PROBE_CAP`] bytes are inspected; trailing content has no
/// influence on the result.
pub fn validate_image_bytes(data: &[u8]) -> ValidationResult<ImageKind> {
    let probe_len = data.len().min(PROBE_CAP);
    sniff_header(&data[..probe_len])
}
