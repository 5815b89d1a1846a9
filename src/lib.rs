//! Basedir - XDG base directory lookup for config, data and cache files.
//!
//! Resolves where to read existing files from (searching the per-user directory and then the
//! system-wide search path) and where to write new per-user files. See [`BaseDirs`].
//!
//! ```rust,no_run
//! # fn main() -> basedir::Result<()> {
//! let dirs = basedir::BaseDirs::new();
//! let themes = dirs.find_all_data_path("myapp/themes")?;
//! let cache = dirs.find_cache_path("myapp/index.db", true)?;
//! # drop((themes, cache));
//! # Ok(())
//! # }
//! ```

pub mod base_dir;
mod error;
pub mod fs;
pub mod os;

pub use base_dir::{BaseDirs, SearchOrder, ensure_directory};
pub use error::{Error, Result};
