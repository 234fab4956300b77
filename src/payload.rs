//! Payload formatting
//!
//! A payload is `w1=XNLV1&w2=XNLV2&...`. Words are emitted byte for byte:
//! `&`, `=` and bytes that are not UTF-8 end up in the payload unescaped.

use bstr::BString;

/// Placeholder value prefix; the chunk-local index follows it
pub const MARKER: &str = "XNLV";

/// Separator between parameters
pub const PARAM_SEPARATOR: &str = "&";

/// Line placed between payloads in batch chunked output
pub const CHUNK_SEPARATOR: &str = "\n---\n";

/// Format words as `word=XNLV<i>` joined by `&`, with `i` starting at 1
pub fn format_payload<S: AsRef<[u8]>>(words: &[S]) -> BString {
    let mut payload = Vec::with_capacity(estimate_len(words));

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            payload.extend_from_slice(PARAM_SEPARATOR.as_bytes());
        }
        payload.extend_from_slice(word.as_ref());
        payload.push(b'=');
        payload.extend_from_slice(MARKER.as_bytes());
        payload.extend_from_slice((i + 1).to_string().as_bytes());
    }

    BString::from(payload)
}

fn estimate_len<S: AsRef<[u8]>>(words: &[S]) -> usize {
    // word + "=XNLV" + a few digits + "&"
    words.iter().map(|w| w.as_ref().len() + MARKER.len() + 4).sum()
}
