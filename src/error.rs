use std::{io, path::PathBuf};

use thiserror::Error;

use crate::os::env::MissingVar;

/// Errors encountered while resolving or creating base directories.
#[derive(Debug, Error)]
pub enum Error {
    /// A variable needed to compute a default, in practice `$HOME`, is not set.
    #[error("cannot compute default base directory")]
    MissingEnvironment(#[from] MissingVar),

    /// `$HOME` is set, but is not an absolute path.
    #[error("`$HOME` must be an absolute path, got `{}`", .0.display())]
    RelativeHome(PathBuf),

    /// Creating `path` failed for a reason other than it already being a directory.
    #[error("failed to create directory `{}`", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Alias for [`std::result::Result`] with [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
