//! # Param Packer
//!
//! Packs parameter-name wordlists into query-string payloads for web fuzzing.
//!
//! ## Pipeline
//!
//! - **Input**: exactly one of a file, an interactive paste, or piped stdin
//! - **Normalization**: lines are trimmed, blank lines dropped
//! - **Payload**: `word=XNLV<i>` pairs joined by `&`, `i` starting at 1
//! - **Pagination**: optional fixed-size chunks, printed at once or one per
//!   confirmation; the index restarts at 1 in every chunk
//!
//! ## Usage
//!
//! ```bash
//! param-packer -f params.txt
//! cat params.txt | param-packer -n 50
//! param-packer -f params.txt -n 50 -oi
//! ```
//!
//! ## Example
//!
//! ```rust
//! use param_packer::normalize::normalize;
//! use param_packer::paginate::Paginator;
//! use std::num::NonZeroUsize;
//!
//! let words = normalize("a\n b \n\nc\n".lines());
//! let paginator = Paginator::new(NonZeroUsize::new(2), false);
//!
//! assert_eq!(
//!     paginator.render_batch(words.as_slice()),
//!     "a=XNLV1&b=XNLV2\n---\nc=XNLV1"
//! );
//! ```

pub mod cli;
pub mod console;
pub mod encoding;
pub mod error;
pub mod input;
pub mod normalize;
pub mod paginate;
pub mod payload;

pub use cli::Args;
pub use error::InputError;
pub use input::Channel;
pub use normalize::WordList;
pub use paginate::Paginator;
