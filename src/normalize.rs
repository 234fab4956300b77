//! Line normalization
//!
//! Turns raw input lines into the ordered list of words that gets packed.
//! Words are byte strings; bytes that are not UTF-8 are kept as they are.

use bstr::{BString, ByteSlice};

/// Ordered list of trimmed, non-empty words
///
/// Order matters: it decides each word's parameter index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList(Vec<BString>);

impl WordList {
    /// Number of words
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[BString] {
        &self.0
    }
}

/// Trim every line and drop the ones left empty
pub fn normalize<I, S>(lines: I) -> WordList
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let words = lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            (!trimmed.is_empty()).then(|| BString::from(trimmed))
        })
        .collect();

    WordList(words)
}
