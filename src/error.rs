/// Error and diagnostic types
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no level-1 heading found in document")]
    MissingTitle,

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to list directory {}: {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },
}

/// A block the parser could not render as classified.
///
/// Never returned as an error: the parser degrades or drops the block, logs a
/// warning and records a [`crate::parser::Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedBlock {
    #[error("heading has no text, rendered as a paragraph")]
    HeadingWithoutText,

    #[error("fenced code block has no content, dropped")]
    EmptyCodeBlock,

    #[error("fenced code block is not terminated by a bare fence, dropped")]
    UnterminatedCodeBlock,
}
