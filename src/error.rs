//! Error types for lolcat.

use std::io;
use std::path::PathBuf;

/// Errors reported while running an invocation.
///
/// Only [`LolcatError::Argument`] and [`LolcatError::Output`] end the run;
/// every other kind is reported and processing continues.
#[derive(Debug, thiserror::Error)]
pub enum LolcatError {
    #[error("Error parsing arguments: {0}")]
    Argument(String),

    #[error("{}: {source}", .path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{name}: {source}")]
    Stream {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Error setting locale: {0}")]
    Locale(String),

    #[error("Ignoring config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("write error: {0}")]
    Output(#[source] io::Error),
}

impl LolcatError {
    /// Whether the output sink went away (e.g. `lolcat file | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Failure while moving one stream to the output.
///
/// Keeps source failures apart from sink failures so the caller can skip a
/// bad input but stop on a dead output.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("read error: {0}")]
    Read(#[source] io::Error),

    #[error("write error: {0}")]
    Write(#[source] io::Error),
}
