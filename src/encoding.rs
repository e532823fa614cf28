//! Character encoding detection and transcoding for byte input.
//!
//! The extractor works on UTF-8 text. Raw bytes are decoded using, in order
//! of precedence, a byte-order mark, a `<meta charset>` declaration, a
//! `<meta http-equiv="Content-Type">` declaration, and finally UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use tracing::debug;

/// Bytes inspected for a charset declaration.
const SNIFF_LEN: usize = 1024;

#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("CHARSET_META_RE regex")
});

#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("CONTENT_TYPE_CHARSET_RE regex")
});

/// Decoded document text.
#[derive(Debug, Clone)]
pub struct Transcoded {
    /// Document as UTF-8.
    pub text: String,
    /// Encoding used for decoding.
    pub encoding: &'static Encoding,
    /// Whether malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

/// Detect the character encoding of HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    [&*CHARSET_META_RE, &*CONTENT_TYPE_CHARSET_RE]
        .into_iter()
        .filter_map(|re| declared_label(re, &head))
        .find_map(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_label(re: &Regex, head: &str) -> Option<String> {
    re.captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode HTML bytes to UTF-8, replacing malformed sequences.
///
/// # Examples
///
/// ```
/// use rs_coreex::encoding::transcode;
///
/// let decoded = transcode(b"<html><meta charset=\"ISO-8859-1\"><body>Caf\xE9</body></html>");
/// assert!(decoded.text.contains("Café"));
/// assert_eq!(decoded.encoding.name(), "windows-1252");
/// ```
#[must_use]
pub fn transcode(html: &[u8]) -> Transcoded {
    let detected = detect_encoding(html);
    let (text, encoding, had_errors) = detected.decode(html);

    if had_errors {
        debug!(encoding = encoding.name(), "replaced malformed byte sequences");
    }

    Transcoded {
        text: text.into_owned(),
        encoding,
        had_errors,
    }
}

/// Decode HTML bytes to a UTF-8 string.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    transcode(html).text
}
