//! Error types for template materialization

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while materializing a project from a template
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The template root contains no files at all
    #[error("No files found in \"{}\". Are you sure you specified the correct path?", .source_dir.display())]
    EmptySource { source_dir: PathBuf },

    /// Errors from the template renderer, passed through untouched
    #[error(transparent)]
    Render(#[from] minijinja::Error),

    #[error("chmod failed for gradlew file under {}", .dir.display())]
    Chmod { dir: PathBuf },

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("Invalid template manifest: {0}")]
    Manifest(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Import alias \"{0}\" must follow the pattern <prefix>/*")]
    InvalidImportAlias(String),

    #[error("The application path {} is not writable, please check folder permissions and try again", .path.display())]
    NotWritable { path: PathBuf },

    #[error("The directory {} contains files that could conflict: {}", .path.display(), .conflicts.join(", "))]
    DirectoryNotEmpty {
        path: PathBuf,
        conflicts: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
