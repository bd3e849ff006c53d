//! Common Test Utilities
//!
//! Shared payload builders used across integration tests. These mirror the
//! built-in fixture headers byte for byte so tests can assemble variants
//! (truncated, padded, mislabeled) without duplicating magic constants.

/// JPEG payload: JFIF header plus zero padding
pub fn jpeg_payload() -> Vec<u8> {
    let mut data =
        b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00\x01\x01\x00\x00\x01\x00\x01\x00\x00".to_vec();
    data.extend(vec![0x00; 100]);
    data
}

/// PNG payload: signature plus IHDR chunk start and zero padding
pub fn png_payload() -> Vec<u8> {
    let mut data = b"\x89\x50\x4E\x47\x0D\x0A\x1A\x0A\x00\x00\x00\x0DIHDR\x00\x00\x00\x01".to_vec();
    data.extend(vec![0x00; 100]);
    data
}

/// WebP payload: RIFF container, WEBP form type, VP8 chunk tag, padding
pub fn webp_payload() -> Vec<u8> {
    let mut data = b"RIFF\x00\x00\x00\x00WEBPVP8 ".to_vec();
    data.extend(vec![0x00; 100]);
    data
}

/// RIFF container that is not WebP (WAVE form type)
pub fn riff_wave_payload() -> Vec<u8> {
    b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec()
}
