//! Sequential removal of classified empty directories.

use crate::error::Error;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Remove each directory in the order given, which the scanner guarantees is
/// deepest first. Stops at the first failure; directories removed before the
/// failure stay removed.
///
/// `fs::remove_dir` is deliberate: if a directory gained content between the
/// scan and this call, rmdir fails instead of deleting what appeared.
pub fn remove_all(paths: &[PathBuf]) -> Result<(), Error> {
    for path in paths {
        fs::remove_dir(path).map_err(|source| Error::Remove {
            path: path.clone(),
            source,
        })?;
        println!("{} '{}'", "Removed directory".green(), path.display());
    }

    Ok(())
}
