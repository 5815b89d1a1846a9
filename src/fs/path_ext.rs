use std::{
    fs::DirBuilder,
    io::{self},
    path::Path,
};

/// Permissions for directories created by [`PathExt::mkdir`].
///
/// Only meaningful on Unix. Elsewhere directories get the platform default and the mode is
/// ignored.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default)]
pub enum DirMode {
    /// `0o700`: read, write and search for the owner only.
    #[default]
    OwnerOnly,
    /// Explicit permission bits, still subject to the process umask.
    Custom(u32),
}

impl DirMode {
    /// Raw permission bits.
    pub fn bits(self) -> u32 {
        match self {
            DirMode::OwnerOnly => 0o700,
            DirMode::Custom(bits) => bits,
        }
    }
}

mod sealed {
    use std::path::Path;

    pub trait Sealed {}
    impl Sealed for Path {}
}

/// Extension trait for [`Path`] with directory creation helpers.
///
/// ```rust,no_run
/// # use basedir::fs::*;
/// # use std::path::Path;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let path = Path::new("cache/sub/file.bin");
/// path.mkdir_parent(DirMode::OwnerOnly)?; // Creates `cache/sub`, not `file.bin`.
/// path.parent().unwrap().mkdir(DirMode::OwnerOnly)?; // Already there, still fine.
/// # Ok(())
/// # }
/// ```
pub trait PathExt: sealed::Sealed {
    /// Create the directory at given [`Path`] and all its missing ancestors, equivalent of
    /// `mkdir -p -m $mode $path`.
    ///
    /// # Returns
    /// [`Ok(())`](Ok) if created successfully or if `self` already is a directory. Anything else
    /// is reported as returned by [`DirBuilder::create`], including the case where `self` (or
    /// one of its ancestors) exists but is not a directory.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use basedir::fs::*;
    /// # use std::path::PathBuf;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let buf = PathBuf::from("a/b");
    /// let path = buf.as_path();
    /// path.mkdir(DirMode::OwnerOnly)?;
    /// path.mkdir(DirMode::OwnerOnly)?;
    /// # Ok(())
    /// # }
    /// ```
    fn mkdir(&self, mode: DirMode) -> io::Result<()>;

    /// [`PathExt::mkdir`] on the parent of `self`, if there is one.
    ///
    /// A bare file name has an empty parent, which is treated as the current directory and left
    /// alone.
    fn mkdir_parent(&self, mode: DirMode) -> io::Result<()>;

    /// Whether something exists at `self`, following symlinks.
    ///
    /// Unlike [`Path::try_exists`] errors are folded into `false`.
    fn probe(&self) -> bool;
}

impl PathExt for Path {
    fn mkdir(&self, mode: DirMode) -> io::Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode.bits());
        }
        #[cfg(not(unix))]
        let _ = mode;
        match builder.create(self) {
            // Someone else won the race, which is fine as long as they made a directory.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.is_dir() => Ok(()),
            result => result,
        }
    }

    fn mkdir_parent(&self, mode: DirMode) -> io::Result<()> {
        match self.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.mkdir(mode),
            _ => Ok(()),
        }
    }

    fn probe(&self) -> bool {
        self.metadata().is_ok()
    }
}
