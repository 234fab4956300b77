//! Chunked output of payloads
//!
//! Splits the word list into fixed-size chunks and prints one payload per
//! chunk, either all at once or one chunk per confirmation.

use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::slice::Chunks;

use bstr::BString;

use crate::payload::{format_payload, CHUNK_SEPARATOR};

/// Prompt shown between chunks in interactive output
pub const NEXT_CHUNK_PROMPT: &str = "Press Enter for the next chunk...";

/// Split words into contiguous chunks of `size`; the last may be shorter
pub fn chunk_words<T>(words: &[T], size: NonZeroUsize) -> Chunks<'_, T> {
    words.chunks(size.get())
}

/// What a pagination run emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary {
    pub chunks: usize,
    pub words: usize,
}

/// Output driver
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    chunk_size: Option<NonZeroUsize>,
    interactive: bool,
}

impl Paginator {
    /// `chunk_size` of None prints the whole list as one payload
    pub fn new(chunk_size: Option<NonZeroUsize>, interactive: bool) -> Self {
        Self {
            chunk_size,
            interactive,
        }
    }

    pub fn is_chunked(&self) -> bool {
        self.chunk_size.is_some()
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// All payloads as one byte string, chunks joined by `\n---\n`
    pub fn render_batch<S: AsRef<[u8]>>(&self, words: &[S]) -> BString {
        let Some(size) = self.chunk_size else {
            return format_payload(words);
        };

        let mut rendered = Vec::new();
        for (i, chunk) in chunk_words(words, size).enumerate() {
            if i > 0 {
                rendered.extend_from_slice(CHUNK_SEPARATOR.as_bytes());
            }
            rendered.extend_from_slice(&format_payload(chunk));
        }

        BString::from(rendered)
    }

    /// Write the payloads to `out`
    ///
    /// Interactive chunked output shows `prompt` and reads one line from
    /// `confirm` between chunks. The line's content is ignored, and so are
    /// EOF and read errors.
    pub fn run<S, W, P, R>(
        &self,
        words: &[S],
        out: &mut W,
        prompt: &mut P,
        confirm: &mut R,
    ) -> io::Result<PaginationSummary>
    where
        S: AsRef<[u8]>,
        W: Write,
        P: Write,
        R: BufRead,
    {
        let summary = match self.chunk_size {
            None => {
                write_line(out, &format_payload(words))?;
                PaginationSummary {
                    chunks: 1,
                    words: words.len(),
                }
            }
            Some(_) if words.is_empty() => PaginationSummary {
                chunks: 0,
                words: 0,
            },
            Some(size) if self.interactive => {
                self.run_interactive(words, size, out, prompt, confirm)?
            }
            Some(size) => {
                write_line(out, &self.render_batch(words))?;
                PaginationSummary {
                    chunks: chunk_words(words, size).len(),
                    words: words.len(),
                }
            }
        };

        out.flush()?;
        Ok(summary)
    }

    fn run_interactive<S, W, P, R>(
        &self,
        words: &[S],
        size: NonZeroUsize,
        out: &mut W,
        prompt: &mut P,
        confirm: &mut R,
    ) -> io::Result<PaginationSummary>
    where
        S: AsRef<[u8]>,
        W: Write,
        P: Write,
        R: BufRead,
    {
        let chunks = chunk_words(words, size);
        let total = chunks.len();

        for (i, chunk) in chunks.enumerate() {
            writeln!(out, "Chunk {}:", i + 1)?;
            write_line(out, &format_payload(chunk))?;
            out.flush()?;

            if i + 1 < total {
                wait_for_confirmation(prompt, confirm);
            }
        }

        Ok(PaginationSummary {
            chunks: total,
            words: words.len(),
        })
    }
}

/// Write raw payload bytes followed by a newline
fn write_line<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(bytes)?;
    out.write_all(b"\n")
}

/// Block until one line (or EOF) arrives on `confirm`
fn wait_for_confirmation<P: Write, R: BufRead>(prompt: &mut P, confirm: &mut R) {
    if let Err(e) = write!(prompt, "{}", NEXT_CHUNK_PROMPT).and_then(|_| prompt.flush()) {
        log::debug!("Could not show chunk prompt: {}", e);
    }

    let mut line = Vec::new();
    match confirm.read_until(b'\n', &mut line) {
        Ok(0) => log::debug!("Confirmation input closed, continuing"),
        Ok(_) => {}
        Err(e) => log::debug!("Ignoring confirmation read error: {}", e),
    }
}
