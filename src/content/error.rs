//! Errors raised by the content collaborators

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or compiling site content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content category `{category}` not found at {path:?}")]
    MissingCategory { category: String, path: PathBuf },

    #[error("Document `{category}/{name}` not found (looked for {path:?}.{{mdx,md,markdown}})")]
    DocumentNotFound {
        category: String,
        name: String,
        path: PathBuf,
    },

    #[error("Failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list content category at {path:?}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid front-matter in {path:?}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("Failed to compile {path:?}: {message}")]
    Compile { path: PathBuf, message: String },
}
