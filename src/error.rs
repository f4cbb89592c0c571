//! Error types for the vacant CLI.

use std::io;
use std::path::PathBuf;

/// Failures that end a run with a nonzero exit status.
///
/// A root without any subdirectories is not an error; the scanner reports it
/// as `None` and the CLI treats it like an empty result.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The starting path handed to the CLI does not exist.
    #[error("path '{}' does not exist", .0.display())]
    InvalidRoot(PathBuf),

    /// A directory the scanner classified as empty could not be removed,
    /// typically because it gained content after the scan or permissions
    /// changed.
    #[error("failed to remove directory '{}'", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
