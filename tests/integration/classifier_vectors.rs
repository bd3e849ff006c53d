//! Classifier vector tests
//!
//! Byte-exact vectors through the public byte-slice entry point, covering
//! each whitelisted signature, each rejected payload class, and the
//! boundary behaviour around the minimum probe length.

use upload_guard::detection::{validate_image_bytes, ImageKind, MIN_SIGNATURE_LEN};
use upload_guard::errors::ValidationError;

use crate::common::{jpeg_payload, png_payload, riff_wave_payload, webp_payload};

#[test]
fn jpeg_vector_classifies() {
    assert_eq!(validate_image_bytes(&jpeg_payload()), Ok(ImageKind::Jpeg));
}

#[test]
fn png_vector_classifies() {
    assert_eq!(validate_image_bytes(&png_payload()), Ok(ImageKind::Png));
}

#[test]
fn webp_vector_classifies() {
    assert_eq!(validate_image_bytes(&webp_payload()), Ok(ImageKind::Webp));
}

#[test]
fn jpeg_magic_wins_regardless_of_trailer() {
    // Anything after the first three bytes is irrelevant to the JPEG rule
    let mut data = vec![0xFF, 0xD8, 0xFF];
    data.extend(b"GIF89a this trailer is a lie");
    assert_eq!(validate_image_bytes(&data), Ok(ImageKind::Jpeg));
}

#[test]
fn riff_without_webp_form_is_rejected() {
    assert_eq!(
        validate_image_bytes(&riff_wave_payload()),
        Err(ValidationError::UnrecognizedFormat)
    );
}

#[test]
fn inputs_below_minimum_fail_as_too_small() {
    for len in 0..MIN_SIGNATURE_LEN {
        let data = vec![0x89; len];
        assert_eq!(
            validate_image_bytes(&data),
            Err(ValidationError::TooSmall { len })
        );
    }
}

#[test]
fn malicious_payloads_are_rejected() {
    let payloads: [&[u8]; 4] = [
        b"<?php system($_GET[\"cmd\"]); ?>",
        b"#!/bin/bash\nrm -rf /",
        b"This is just text",
        b"GIF89a\x01\x00\x01\x00",
    ];
    for payload in payloads {
        assert_eq!(
            validate_image_bytes(payload),
            Err(ValidationError::UnrecognizedFormat),
            "payload must be rejected: {:?}",
            &payload[..payload.len().min(12)]
        );
    }
}

#[test]
fn classification_is_idempotent() {
    let vectors = [jpeg_payload(), png_payload(), webp_payload()];
    for vector in &vectors {
        assert_eq!(validate_image_bytes(vector), validate_image_bytes(vector));
    }

    let rejected = b"plain text body";
    assert_eq!(
        validate_image_bytes(rejected),
        validate_image_bytes(rejected)
    );
}

#[test]
fn truncated_signatures_cannot_match() {
    // 4..7 byte prefixes of the PNG signature clear the size floor but
    // cannot satisfy the 8-byte rule
    let full = png_payload();
    for len in MIN_SIGNATURE_LEN..8 {
        assert_eq!(
            validate_image_bytes(&full[..len]),
            Err(ValidationError::UnrecognizedFormat)
        );
    }
}
