//! Built-in validation fixtures
//!
//! The fixed test-vector table: three whitelisted image headers that must
//! classify, and four payloads that must never pass content validation. The
//! payloads carry realistic trailing content so tests exercise more than the
//! bare signatures.

use crate::detection::ImageKind;

/// Expected classifier behaviour for a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The payload must classify as this image kind
    Accept(ImageKind),
    /// The payload must be rejected
    Reject,
}

/// A named test payload with its expected outcome
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Short identifier used in report lines
    pub name: &'static str,
    /// What the payload simulates
    pub description: &'static str,
    pub payload: Vec<u8>,
    pub expectation: Expectation,
}

fn with_padding(head: &[u8], padding: usize) -> Vec<u8> {
    let mut payload = head.to_vec();
    payload.extend(std::iter::repeat(0x00).take(padding));
    payload
}

/// The fixed fixture table
pub fn builtin_fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "jpeg",
            description: "JFIF header",
            payload: with_padding(
                b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00\x01\x01\x00\x00\x01\x00\x01\x00\x00",
                100,
            ),
            expectation: Expectation::Accept(ImageKind::Jpeg),
        },
        Fixture {
            name: "png",
            description: "PNG signature with IHDR chunk start",
            payload: with_padding(
                b"\x89\x50\x4E\x47\x0D\x0A\x1A\x0A\x00\x00\x00\x0DIHDR\x00\x00\x00\x01",
                100,
            ),
            expectation: Expectation::Accept(ImageKind::Png),
        },
        Fixture {
            name: "webp",
            description: "RIFF container with WEBP form type and VP8 chunk",
            payload: with_padding(b"RIFF\x00\x00\x00\x00WEBPVP8 ", 100),
            expectation: Expectation::Accept(ImageKind::Webp),
        },
        Fixture {
            name: "php",
            description: "PHP webshell one-liner",
            payload: b"<?php system($_GET[\"cmd\"]); ?>".to_vec(),
            expectation: Expectation::Reject,
        },
        Fixture {
            name: "shell",
            description: "shell script with destructive command",
            payload: b"#!/bin/bash\nrm -rf /".to_vec(),
            expectation: Expectation::Reject,
        },
        Fixture {
            name: "text",
            description: "plain ASCII text",
            payload: b"This is just text".to_vec(),
            expectation: Expectation::Reject,
        },
        Fixture {
            name: "gif",
            description: "GIF89a header, deliberately not whitelisted",
            payload: with_padding(b"GIF89a", 100),
            expectation: Expectation::Reject,
        },
    ]
}

/// Webshell payload for the simulated `shell.php` upload scenario
pub fn webshell_payload() -> Vec<u8> {
    b"<?php\nif(isset($_GET[\"cmd\"])) {\n    system($_GET[\"cmd\"]);\n}\n?>".to_vec()
}
