//! Error types for the converter.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations.
///
/// Variants fall into the three classes surfaced by the CLI: read failures
/// (input missing, unparseable, or empty), write failures, and argument
/// failures (missing positionals or a dismissed dialog).
#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not exist or is not a regular file
    #[error("File not found: {0}")]
    InputNotFound(PathBuf),

    /// The dataset library could not parse the input
    #[error("Failed to read dataset from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: vtkio::Error,
    },

    /// Parsing succeeded but yielded no usable dataset
    #[error("No usable dataset in {0}")]
    EmptyDataset(PathBuf),

    /// The dataset library could not write the output
    #[error("Failed to write ASCII VTK to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: vtkio::Error,
    },

    /// Fewer than two positional arguments were supplied
    #[error("Missing input and output file arguments")]
    MissingArguments,

    /// A file dialog was dismissed without a selection
    #[error("{0} was not selected")]
    Cancelled(&'static str),
}

impl Error {
    /// Read-class error naming the input path.
    pub fn read(path: impl Into<PathBuf>, source: vtkio::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    /// Write-class error naming the output path.
    pub fn write(path: impl Into<PathBuf>, source: vtkio::Error) -> Self {
        Self::Write { path: path.into(), source }
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
