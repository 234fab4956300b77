//! Error types for input resolution and reading

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::input::Channel;

/// Failures that stop the tool before any payload is produced
#[derive(Error, Debug)]
pub enum InputError {
    /// Zero or several input methods were selected
    #[error("Use exactly one input method: -i, -f <file>, or piped stdin ({active} selected)")]
    AmbiguousInput { active: usize },

    /// The wordlist file could not be read
    #[error("failed to read input file {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading pasted or piped input failed midway
    #[error("failed to read {channel} input")]
    StreamRead {
        channel: Channel,
        #[source]
        source: io::Error,
    },

    /// Stdin could not be inspected for a pipe
    #[error("failed to check stdin")]
    StdinCheck {
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_ambiguous_message() {
        let err = InputError::AmbiguousInput { active: 2 };
        let msg = err.to_string();
        assert!(msg.starts_with("Use exactly one input method"));
        assert!(msg.contains("(2 selected)"));
    }

    #[test]
    fn test_file_read_keeps_source() {
        let err = InputError::FileRead {
            path: PathBuf::from("words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to read input file words.txt");
        assert_eq!(err.source().unwrap().to_string(), "no such file");
    }

    #[test]
    fn test_stream_read_names_channel() {
        let err = InputError::StreamRead {
            channel: Channel::Piped,
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        assert_eq!(err.to_string(), "failed to read piped input");
    }
}
