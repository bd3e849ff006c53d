//! Magic-byte content validation
//!
//! This module contains the signature classifier used to vet uploaded image
//! content, plus the bounded header probe that feeds it. The classifier is
//! whitelist-only and operates purely on the leading bytes of a payload; it
//! never consults file extensions or declared content types.

pub mod image_signature;
pub mod probe;

// Re-export for convenience
pub use image_signature::{
    sniff_header, validate_image_bytes, ImageKind, MIN_SIGNATURE_LEN, PROBE_CAP,
};
pub use probe::{read_header_probe, validate_image_stream};
