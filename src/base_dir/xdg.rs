//! XDG Base Directory resolution.
//!
//! Every lookup walks the per-user home directory of a category first, then the system search
//! path from `$XDG_CONFIG_DIRS`/`$XDG_DATA_DIRS`, left to right.

use std::borrow::Cow;
use std::convert::Infallible;
use std::ffi::OsStr;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::base_dir::SearchOrder;
use crate::error::{Error, Result};
use crate::fs::{DirMode, PathExt};
use crate::os::env::Env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Config,
    Data,
    Cache,
}

impl Category {
    fn home_var(self) -> &'static str {
        match self {
            Category::Config => "XDG_CONFIG_HOME",
            Category::Data => "XDG_DATA_HOME",
            Category::Cache => "XDG_CACHE_HOME",
        }
    }

    /// Default home, relative to `$HOME`.
    fn home_fallback(self) -> PathBuf {
        let segments: &[&str] = match self {
            Category::Config => &[".config"],
            Category::Data => &[".local", "share"],
            Category::Cache => &[".cache"],
        };
        segments.iter().collect()
    }

    /// System search path variable and its default.
    fn search_var(self) -> Option<(&'static str, &'static str)> {
        match self {
            // freedesktop.org says `/etc/xdg`, but `/etc` is where system config conventionally
            // lives and existing callers rely on it.
            Category::Config => Some(("XDG_CONFIG_DIRS", "/etc")),
            Category::Data => Some(("XDG_DATA_DIRS", "/usr/local/share:/usr/share")),
            Category::Cache => None,
        }
    }
}

/// Resolver for per-user and system-wide config, data and cache directories.
///
/// By default the process environment is consulted afresh on every call, so changes made between
/// calls are observed. [`BaseDirs::with_env`] pins a fixed [`Env`] instead.
///
/// ```rust,no_run
/// # use basedir::BaseDirs;
/// # fn main() -> basedir::Result<()> {
/// let dirs = BaseDirs::new();
///
/// // Where to read `myapp/settings.toml` from, if anywhere.
/// if let Some(path) = dirs.find_first_config_path("myapp/settings.toml")? {
///     println!("using {}", path.display());
/// }
///
/// // Every instance, lowest priority first, ready to be folded.
/// for path in dirs.find_all_config_path("myapp/settings.toml")? {
///     println!("merging {}", path.display());
/// }
///
/// // Where to write a new per-user file.
/// let out = dirs.get_config_home(true)?.join("myapp.toml");
/// # drop(out);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaseDirs {
    env: Option<Env>,
    dir_mode: DirMode,
}

impl BaseDirs {
    /// Resolver backed by the live process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver backed by a fixed `env`. Nothing is ever read from the process.
    pub fn with_env(env: Env) -> Self {
        Self {
            env: Some(env),
            ..Self::default()
        }
    }

    /// Set permissions for directories created by this resolver. Defaults to
    /// [`DirMode::OwnerOnly`].
    pub fn dir_mode(mut self, mode: DirMode) -> Self {
        self.dir_mode = mode;
        self
    }

    fn env(&self) -> Cow<'_, Env> {
        match &self.env {
            Some(env) => Cow::Borrowed(env),
            None => Cow::Owned(Env::new()),
        }
    }

    /// Join `$HOME` with `suffix`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingEnvironment`] if `$HOME` is unset, [`Error::RelativeHome`] if it is not an
    /// absolute path.
    pub fn home_relative(&self, suffix: impl AsRef<Path>) -> Result<PathBuf> {
        home_relative_in(&self.env(), suffix.as_ref())
    }

    /// Create `path` and its missing ancestors with this resolver's [`DirMode`].
    ///
    /// Succeeds if `path` already is a directory. See also [`crate::ensure_directory`].
    pub fn ensure_directory(&self, path: impl AsRef<Path>) -> Result<()> {
        create_dir(path.as_ref(), self.dir_mode)
    }

    fn home_in(&self, env: &Env, category: Category, ensure_exists: bool) -> Result<PathBuf> {
        let dir = match env.get_os(category.home_var()) {
            Some(dir) => PathBuf::from(dir),
            None => {
                trace!(var = category.home_var(), "unset, falling back to $HOME");
                home_relative_in(env, &category.home_fallback())?
            }
        };
        if ensure_exists {
            create_dir(&dir, self.dir_mode)?;
        }
        Ok(dir)
    }

    /// Directory for user-specific config files: `$XDG_CONFIG_HOME`, else `$HOME/.config`.
    ///
    /// With `ensure_exists` the directory and its ancestors are created. Otherwise the returned
    /// path may not exist.
    pub fn get_config_home(&self, ensure_exists: bool) -> Result<PathBuf> {
        self.home_in(&self.env(), Category::Config, ensure_exists)
    }

    /// Directory for user-specific data files: `$XDG_DATA_HOME`, else `$HOME/.local/share`.
    ///
    /// See [`BaseDirs::get_config_home`] for `ensure_exists`.
    pub fn get_data_home(&self, ensure_exists: bool) -> Result<PathBuf> {
        self.home_in(&self.env(), Category::Data, ensure_exists)
    }

    /// Directory for user-specific cache files: `$XDG_CACHE_HOME`, else `$HOME/.cache`.
    ///
    /// See [`BaseDirs::get_config_home`] for `ensure_exists`.
    pub fn get_cache_home(&self, ensure_exists: bool) -> Result<PathBuf> {
        self.home_in(&self.env(), Category::Cache, ensure_exists)
    }

    /// System config directories, highest priority first: `$XDG_CONFIG_DIRS`, else `/etc`.
    ///
    /// The list is split on `:` on every platform. Segments are returned as given, empty ones
    /// included.
    pub fn config_search_path(&self) -> Vec<PathBuf> {
        search_path_in(&self.env(), Category::Config)
    }

    /// System data directories, highest priority first: `$XDG_DATA_DIRS`, else
    /// `/usr/local/share:/usr/share`.
    ///
    /// Split like [`BaseDirs::config_search_path`].
    pub fn data_search_path(&self) -> Vec<PathBuf> {
        search_path_in(&self.env(), Category::Data)
    }

    fn scan<B>(
        &self,
        category: Category,
        item: &Path,
        order: SearchOrder,
        f: impl FnMut(&Path) -> ControlFlow<B>,
    ) -> Result<Option<B>> {
        let env = self.env();
        let mut dirs = vec![self.home_in(&env, category, false)?];
        dirs.extend(search_path_in(&env, category));
        let found = match order {
            SearchOrder::HighestFirst => visit(dirs.iter(), item, f),
            SearchOrder::LowestFirst => visit(dirs.iter().rev(), item, f),
        };
        Ok(found)
    }

    /// Call `f` with every existing expansion of `item` among the config directories, in `order`.
    ///
    /// # Returns
    ///
    /// `Ok(Some(b))` if `f` returned [`ControlFlow::Break(b)`](ControlFlow::Break), which stops
    /// the scan. `Ok(None)` if every candidate was visited.
    pub fn for_each_config_path<B>(
        &self,
        item: impl AsRef<Path>,
        order: SearchOrder,
        f: impl FnMut(&Path) -> ControlFlow<B>,
    ) -> Result<Option<B>> {
        self.scan(Category::Config, item.as_ref(), order, f)
    }

    /// Data counterpart of [`BaseDirs::for_each_config_path`].
    pub fn for_each_data_path<B>(
        &self,
        item: impl AsRef<Path>,
        order: SearchOrder,
        f: impl FnMut(&Path) -> ControlFlow<B>,
    ) -> Result<Option<B>> {
        self.scan(Category::Data, item.as_ref(), order, f)
    }

    fn find_first(&self, category: Category, item: &Path) -> Result<Option<PathBuf>> {
        let found = self.scan(category, item, SearchOrder::HighestFirst, |path| {
            ControlFlow::Break(path.to_path_buf())
        })?;
        match &found {
            Some(path) => debug!(path = %path.display(), "resolved"),
            None => debug!(item = %item.display(), ?category, "not found"),
        }
        Ok(found)
    }

    fn find_all(&self, category: Category, item: &Path) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        self.scan(category, item, SearchOrder::LowestFirst, |path| {
            found.push(path.to_path_buf());
            ControlFlow::<Infallible>::Continue(())
        })?;
        debug!(item = %item.display(), ?category, count = found.len(), "collected");
        Ok(found)
    }

    /// Highest-priority existing expansion of `item` among the config directories, or [`None`].
    ///
    /// Probing stops at the first hit.
    pub fn find_first_config_path(&self, item: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        self.find_first(Category::Config, item.as_ref())
    }

    /// Highest-priority existing expansion of `item` among the data directories, or [`None`].
    ///
    /// Probing stops at the first hit.
    pub fn find_first_data_path(&self, item: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        self.find_first(Category::Data, item.as_ref())
    }

    /// All existing expansions of `item` among the config directories, in order of
    /// **increasing** priority, so that folding over them lets later entries override earlier
    /// ones.
    pub fn find_all_config_path(&self, item: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.find_all(Category::Config, item.as_ref())
    }

    /// Data counterpart of [`BaseDirs::find_all_config_path`].
    pub fn find_all_data_path(&self, item: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.find_all(Category::Data, item.as_ref())
    }

    /// Expansion of `item` in the cache home.
    ///
    /// With `create_if` the cache home and every directory leading up to the final component of
    /// `item` are created. The final component itself is left for the caller, as it usually
    /// names a file.
    ///
    /// # Errors
    ///
    /// If creating the leading directories fails, [`Error::DirectoryCreation`] names the
    /// directory that was requested, the parent of the returned path. The component that
    /// actually blocked creation may be further up; the [`io::Error`](std::io::Error) source
    /// tells which.
    pub fn find_cache_path(&self, item: impl AsRef<Path>, create_if: bool) -> Result<PathBuf> {
        let path = self.get_cache_home(create_if)?.join(item);
        if create_if {
            path.mkdir_parent(self.dir_mode)
                .map_err(|source| Error::DirectoryCreation {
                    path: path.parent().map(Path::to_path_buf).unwrap_or_default(),
                    source,
                })?;
        }
        Ok(path)
    }
}

fn home_relative_in(env: &Env, suffix: &Path) -> Result<PathBuf> {
    let home = Path::new(env.require("HOME")?);
    if !home.is_absolute() {
        return Err(Error::RelativeHome(home.to_path_buf()));
    }
    Ok(home.join(suffix))
}

fn search_path_in(env: &Env, category: Category) -> Vec<PathBuf> {
    let Some((var, default)) = category.search_var() else {
        return Vec::new();
    };
    match env.get_os(var) {
        Some(dirs) => split_dirs(dirs),
        None => {
            trace!(var, default, "unset, using default");
            split_dirs(OsStr::new(default))
        }
    }
}

/// Split a `:`-separated directory list, on every platform. Empty segments are kept.
fn split_dirs(dirs: &OsStr) -> Vec<PathBuf> {
    dirs.as_encoded_bytes()
        .split(|&byte| byte == b':')
        // SAFETY: `dirs` is only split at an ASCII `:`, so each segment starts and ends on a
        // boundary of the encoding, as `from_encoded_bytes_unchecked` requires.
        .map(|segment| PathBuf::from(unsafe { OsStr::from_encoded_bytes_unchecked(segment) }))
        .collect()
}

fn visit<'a, B>(
    dirs: impl Iterator<Item = &'a PathBuf>,
    item: &Path,
    mut f: impl FnMut(&Path) -> ControlFlow<B>,
) -> Option<B> {
    for dir in dirs {
        let candidate = dir.join(item);
        let exists = candidate.probe();
        trace!(candidate = %candidate.display(), exists, "probe");
        if !exists {
            continue;
        }
        if let ControlFlow::Break(value) = f(&candidate) {
            return Some(value);
        }
    }
    None
}

pub(crate) fn create_dir(path: &Path, mode: DirMode) -> Result<()> {
    debug!(path = %path.display(), mode = %format_args!("{:o}", mode.bits()), "ensuring directory");
    path.mkdir(mode).map_err(|source| Error::DirectoryCreation {
        path: path.to_path_buf(),
        source,
    })
}
