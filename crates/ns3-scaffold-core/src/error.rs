//! Unified error types for the ns3-scaffold toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding a project.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Arguments ---

    /// The project name or ns-3 version is empty or not a valid directory-name fragment.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // --- Output path ---

    /// The parent directory does not exist or is not a directory.
    #[error("output path is not an existing directory: {0}")]
    OutputPathNotFound(PathBuf),

    /// The parent directory exists but is read-only.
    #[error("output path is not writable: {0}")]
    OutputPathNotWritable(PathBuf),

    // --- Project ---

    /// Something already exists where the project root would be created.
    #[error("project directory already exists: {0}")]
    ProjectAlreadyExists(PathBuf),

    /// An OS-level failure while creating a directory or writing a file.
    #[error("filesystem error at {path}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The creation pass failed and the partial project tree could not be removed.
    #[error("{cause}; additionally failed to remove partial project at {path}")]
    CleanupFailed {
        path: PathBuf,
        cause: Box<ScaffoldError>,
        #[source]
        source: std::io::Error,
    },

    // --- Layout ---

    /// A custom layout file was not found.
    #[error("layout file not found at {path}")]
    LayoutNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A custom layout file exists but contains invalid JSON.
    #[error("failed to parse layout at {path}")]
    LayoutParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A layout entry is absolute, escapes the project root, or is duplicated.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Manifest ---

    /// The project manifest could not be serialized or parsed.
    #[error("project manifest error")]
    Manifest(#[from] serde_json::Error),
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it happened at.
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
