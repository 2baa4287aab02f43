//! Rich diagnostic error types for the lexisim engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so users know exactly what went wrong
//! and how to fix it.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the lexisim engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text, sources) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum LexiError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Ontology(#[from] OntologyError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Batch(#[from] BatchError),
}

// ---------------------------------------------------------------------------
// Ontology errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum OntologyError {
    #[error("failed to read ontology snapshot {path:?}")]
    #[diagnostic(
        code(lexisim::ontology::io),
        help(
            "The ontology snapshot file could not be read. Check that the path \
             exists and is readable, or point --ontology at a different file."
        )
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ontology snapshot {path:?}: {message}")]
    #[diagnostic(
        code(lexisim::ontology::parse),
        help(
            "The snapshot is not valid ontology JSON. Expected an object with a \
             `concepts` array and an `index` map of word -> ordered concept ids."
        )
    )]
    Parse { path: PathBuf, message: String },

    #[error("ontology provider unavailable: {message}")]
    #[diagnostic(
        code(lexisim::ontology::unavailable),
        help(
            "A lookup against the ontology provider failed. The failing query is \
             abandoned; other queries (e.g. the rest of a batch) are unaffected."
        )
    )]
    Unavailable { message: String },
}

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("no root hypernym for concept {concept}")]
    #[diagnostic(
        code(lexisim::graph::no_root),
        help(
            "Every noun concept must reach a root hypernym through its hypernym \
             chain. The snapshot likely has a concept whose chain dead-ends; \
             check the `hypernyms` entries for this concept."
        )
    )]
    NoRoot { concept: String },
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("failed to write graph rendering to {path:?}")]
    #[diagnostic(
        code(lexisim::render::io),
        help("Check that the output directory exists and is writable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Batch errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum BatchError {
    #[error("failed to read batch input {path:?}")]
    #[diagnostic(
        code(lexisim::batch::read),
        help("The batch file must be plain text with one `word1 word2` pair per line.")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write batch results to {path:?}")]
    #[diagnostic(
        code(lexisim::batch::write),
        help("Check that the output directory exists and is writable.")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for functions returning lexisim results.
pub type LexiResult<T> = std::result::Result<T, LexiError>;
