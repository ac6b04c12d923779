//! Error types for document construction and rendering.

use thiserror::Error;

/// Errors that can occur while building or rendering a document.
///
/// Structural misuse (unbalanced sub-sections, nesting past the border
/// table) is reported through dedicated variants, distinct from the I/O
/// failures the export layer can hit. None of these are retried or
/// recovered internally.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no sub-section is open")]
    NoOpenSubSection,

    #[error("{0} sub-section(s) still open; close them before building")]
    UnclosedSubSection(usize),

    #[error("no border glyph is defined for nesting depth {0}")]
    DepthExceeded(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
