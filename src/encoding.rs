//! Encoding handling of raw input
//!
//! Payload bytes are the input bytes. The only rewrite is for BOM-marked
//! input: a UTF-8 BOM is dropped and UTF-16 is transcoded to UTF-8 so it can
//! be split into lines at all. Anything else, valid UTF-8 or not, passes
//! through untouched.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Input bytes ready for line splitting
#[derive(Debug, Clone)]
pub struct InputText {
    pub bytes: Vec<u8>,
    /// Encoding of the input as read (guessed when not UTF-8)
    pub encoding: &'static str,
    /// True when `bytes` is valid UTF-8
    pub utf8: bool,
}

/// Prepare raw input bytes for splitting
pub fn prepare_input(bytes: Vec<u8>) -> InputText {
    if let Some((encoding, bom_len)) = Encoding::for_bom(&bytes) {
        if encoding == encoding_rs::UTF_8 {
            let bytes = bytes[bom_len..].to_vec();
            let utf8 = std::str::from_utf8(&bytes).is_ok();
            return InputText {
                bytes,
                encoding: encoding.name(),
                utf8,
            };
        }
        return transcode(encoding, &bytes);
    }

    if std::str::from_utf8(&bytes).is_ok() {
        return InputText {
            bytes,
            encoding: encoding_rs::UTF_8.name(),
            utf8: true,
        };
    }

    let guess = guess_encoding(&bytes);
    log::warn!(
        "Input is not valid UTF-8 (looks like {}); passing bytes through unchanged",
        guess.name()
    );

    InputText {
        bytes,
        encoding: guess.name(),
        utf8: false,
    }
}

/// Transcode BOM-marked UTF-16 to UTF-8
fn transcode(encoding: &'static Encoding, bytes: &[u8]) -> InputText {
    // decode() strips the BOM
    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        log::warn!("Encoding errors in {} input, using lossy conversion", used.name());
    }

    InputText {
        bytes: decoded.into_owned().into_bytes(),
        encoding: used.name(),
        utf8: true,
    }
}

fn guess_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
