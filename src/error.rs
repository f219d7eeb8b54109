use std::io;

use thiserror::Error;

use crate::format::Specifier;

/// A caller-side contract violation: the format string or the destination
/// list handed to the dispatcher cannot be honored.
///
/// These are never caused by user input and are detected before anything is
/// printed or read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown format specifier '%{0}'")]
    UnknownSpecifier(String),
    #[error("malformed format string {format:?}: unexpected text at byte {offset}")]
    MalformedFormat { format: String, offset: usize },
    #[error("format string has {specifiers} specifier(s) but {destinations} destination(s) were given")]
    ArgumentCount {
        specifiers: usize,
        destinations: usize,
    },
    #[error("destination #{index} is {found} but specifier '%{expected}' needs {}", .expected.destination_kind())]
    DestinationMismatch {
        index: usize,
        expected: Specifier,
        found: &'static str,
    },
}

/// Everything a prompt call can fail with.
///
/// End-of-stream, empty input and out-of-range numbers are not errors; they
/// are reported through [`crate::ScanOutcome`] and [`crate::LineStatus`].
#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("i/o error while prompting: {0}")]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;
