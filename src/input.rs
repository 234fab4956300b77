//! Input channel resolution and reading
//!
//! Exactly one of three channels feeds the wordlist: a file (`-f`), an
//! interactive paste (`-i`), or a pipe on stdin.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use bstr::{BString, ByteSlice};
use bytesize::ByteSize;

use crate::encoding::prepare_input;
use crate::error::InputError;

/// Prompt shown before reading a pasted wordlist
pub const PASTE_PROMPT: &str = "Paste your wordlist and press Ctrl+D when done:";

/// The selected input source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channel {
    File(PathBuf),
    Interactive,
    Piped,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Interactive => f.write_str("pasted"),
            Self::Piped => f.write_str("piped"),
        }
    }
}

/// Pick the single active input channel
///
/// An empty path counts as "no file".
pub fn resolve_channel(
    file: Option<&Path>,
    interactive: bool,
    piped: bool,
) -> Result<Channel, InputError> {
    let file = file.filter(|p| !p.as_os_str().is_empty());
    let active = usize::from(file.is_some()) + usize::from(interactive) + usize::from(piped);

    if active != 1 {
        return Err(InputError::AmbiguousInput { active });
    }

    let channel = match file {
        Some(path) => Channel::File(path.to_path_buf()),
        None if interactive => Channel::Interactive,
        None => Channel::Piped,
    };
    log::debug!("Input channel: {}", channel);

    Ok(channel)
}

/// Check whether stdin is fed by a pipe or a redirected file
///
/// Anything that is not a character device counts, so a terminal or
/// `/dev/null` on stdin is not an input method.
#[cfg(unix)]
pub fn stdin_is_piped() -> Result<bool, InputError> {
    use std::os::fd::AsFd;
    use std::os::unix::fs::FileTypeExt;

    let fd = io::stdin()
        .as_fd()
        .try_clone_to_owned()
        .map_err(|source| InputError::StdinCheck { source })?;
    let metadata = fs::File::from(fd)
        .metadata()
        .map_err(|source| InputError::StdinCheck { source })?;

    Ok(!metadata.file_type().is_char_device())
}

#[cfg(not(unix))]
pub fn stdin_is_piped() -> Result<bool, InputError> {
    use std::io::IsTerminal;

    Ok(!io::stdin().is_terminal())
}

/// Read raw, unnormalized lines from the channel
///
/// Pasted and piped input come from `stdin`; the paste prompt goes to
/// `prompt`. Lines are raw bytes. Zero lines is a valid result.
pub fn read_raw_lines<R: Read, W: Write>(
    channel: &Channel,
    stdin: R,
    prompt: &mut W,
) -> Result<Vec<BString>, InputError> {
    let bytes = match channel {
        Channel::File(path) => read_file(path)?,
        Channel::Interactive => {
            // A prompt that fails to show does not stop the paste
            if let Err(e) = writeln!(prompt, "{}", PASTE_PROMPT).and_then(|_| prompt.flush()) {
                log::debug!("Could not show paste prompt: {}", e);
            }
            read_stream(channel, stdin)?
        }
        Channel::Piped => read_stream(channel, stdin)?,
    };

    let size = ByteSize(bytes.len() as u64);
    let input = prepare_input(bytes);
    log::debug!(
        "Read {} from {} input ({}, utf8: {})",
        size,
        channel,
        input.encoding,
        input.utf8
    );

    Ok(split_lines(&input.bytes))
}

fn read_file(path: &Path) -> Result<Vec<u8>, InputError> {
    fs::read(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stream<R: Read>(channel: &Channel, mut stream: R) -> Result<Vec<u8>, InputError> {
    let mut bytes = Vec::new();
    stream
        .read_to_end(&mut bytes)
        .map_err(|source| InputError::StreamRead {
            channel: channel.clone(),
            source,
        })?;
    Ok(bytes)
}

/// Split on `\n`; a trailing newline does not add a line
fn split_lines(bytes: &[u8]) -> Vec<BString> {
    bytes.lines().map(BString::from).collect()
}
