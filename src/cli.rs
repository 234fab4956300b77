//! Command-line interface definition for param-packer

use clap::Parser;
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Pack a parameter-name wordlist into a query-string payload
#[derive(Parser, Debug, Clone)]
#[command(
    name = "param-packer",
    author = "m0h1nd4",
    version,
    about = "Pack parameter-name wordlists into query-string payloads",
    long_about = r#"
Turns a wordlist of parameter names into a single payload of the form

    word1=XNLV1&word2=XNLV2&word3=XNLV3

ready to paste into a URL or request body. Use exactly one input method:
-f <file>, -i (paste, finish with Ctrl+D), or piped stdin.

EXAMPLES:
    # Whole list from a file
    param-packer -f params.txt

    # Piped input, 50 parameters per payload
    cat params.txt | param-packer -n 50

    # One chunk at a time, Enter for the next
    param-packer -f params.txt -n 50 -oi
"#
)]
pub struct Args {
    /// Paste the wordlist interactively (finish with Ctrl+D)
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Read the wordlist from a file
    #[arg(short, long, value_name = "PATH", allow_hyphen_values = true)]
    pub file: Option<PathBuf>,

    /// Show chunks one at a time, waiting for Enter between them (-oi)
    #[arg(long = "oi", visible_alias = "interactive-output", default_value_t = false)]
    pub interactive_output: bool,

    /// Words per chunk; 0 or negative prints everything as one payload
    #[arg(
        short = 'n',
        long = "chunk-size",
        value_name = "INT",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub chunk_size: i64,
}

impl Args {
    /// Parse from the process arguments, accepting the single-dash `-oi`
    pub fn parse_with_legacy_flags() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    /// Chunk size, or None when output is not chunked
    pub fn chunk_size(&self) -> Option<NonZeroUsize> {
        usize::try_from(self.chunk_size)
            .ok()
            .and_then(NonZeroUsize::new)
    }

    /// Input file path, if one was given
    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

/// Options whose next argument is their value
const VALUE_OPTIONS: [&str; 4] = ["-f", "--file", "-n", "--chunk-size"];

/// Rewrite `-oi` into `--oi`
///
/// clap reads `-oi` as the short flags `-o -i`, which would also switch on
/// interactive input. Values of `-f`/`-n` and anything after `--` are left
/// alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_terminator = false;
    let mut is_value = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if past_terminator || std::mem::take(&mut is_value) {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    past_terminator = true;
                    arg
                }
                Some("-oi") => OsString::from("--oi"),
                Some(s) => {
                    is_value = VALUE_OPTIONS.contains(&s);
                    arg
                }
                None => arg,
            }
        })
        .collect()
}
