//! Vacant - Empty Directory Cleaner
//!
//! Vacant scans a directory tree and reports the directories that contain no
//! regular files anywhere beneath them, then optionally removes them. Hidden
//! entries are treated as a sign the directory is in use: a directory holding
//! so much as one dotfile (or a hidden subdirectory, at any depth) is never
//! reported, and hidden directories are never candidates themselves.
//!
//! The result list is ordered deepest first, so removing it front to back
//! never trips over a still-populated child.

pub mod error;
pub mod remover;
pub mod scanner;

// Re-export commonly used items
pub use error::Error;
pub use remover::remove_all;
pub use scanner::find_empty_dirs;
