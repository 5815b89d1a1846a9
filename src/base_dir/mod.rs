//! Layered base directory lookup.
//!
//! Config and data files are searched for in the per-user home directory first, then in each
//! system directory. Cache files only ever live in the per-user home.
//!
//! Strategies for dealing with several instances of the same file are up to the caller. Either
//! look only at the highest-priority one ([`BaseDirs::find_first_config_path`]), or read all of
//! them lowest priority first ([`BaseDirs::find_all_config_path`]) and let later ones override
//! earlier ones.
//!
//! ```rust,no_run
//! # use basedir::base_dir::{BaseDirs, SearchOrder};
//! # use std::ops::ControlFlow;
//! # fn main() -> basedir::Result<()> {
//! let dirs = BaseDirs::new();
//!
//! // First data file that is not empty, if any.
//! let non_empty = dirs.for_each_data_path("myapp/words.txt", SearchOrder::HighestFirst, |path| {
//!     match path.metadata() {
//!         Ok(meta) if meta.len() > 0 => ControlFlow::Break(path.to_path_buf()),
//!         _ => ControlFlow::Continue(()),
//!     }
//! })?;
//! # drop(non_empty);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use crate::error::Result;
use crate::fs::DirMode;

pub mod xdg;

pub use xdg::BaseDirs;

/// Order in which candidate directories are visited.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum SearchOrder {
    /// Home directory, then the search path left to right.
    HighestFirst,
    /// The search path right to left, then the home directory.
    LowestFirst,
}

/// Create `path` and all its missing ancestors, readable only by the owner.
///
/// Succeeds without doing anything if `path` already is a directory, so calling it again is
/// harmless. Any other failure, such as a regular file in the way, is
/// [`Error::DirectoryCreation`](crate::Error::DirectoryCreation).
pub fn ensure_directory(path: impl AsRef<Path>) -> Result<()> {
    xdg::create_dir(path.as_ref(), DirMode::OwnerOnly)
}
