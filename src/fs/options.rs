use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use log::debug;

use crate::fs::error::PathLengthError;
use crate::fs::{Mode, MkdirError, create_segments, limits};
use crate::path;

/// A builder for creating directories, using customizable options and logical defaults: mode
/// `0o777`, no parent creation and symlinks followed.
///
/// The maximum path length is queried from the OS when the builder is created, and can be
/// overridden with [`path_max`](DirBuilder::path_max).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirBuilder {
    pub(crate) mode: Mode,
    pub(crate) parents: bool,
    pub(crate) follow_links: bool,
    pub(crate) path_max: usize,
}

impl DirBuilder {
    pub fn new() -> DirBuilder {
        DirBuilder::default()
    }

    pub const fn mode(&mut self, value: Mode) -> &mut Self {
        self.mode = value;
        self
    }

    /// Create any missing intermediate directories, rather than failing with `ENOENT`.
    pub const fn parents(&mut self, value: bool) -> &mut Self {
        self.parents = value;
        self
    }

    /// Whether existence checks follow symlinks. When unset, a symlink to a directory counts as
    /// something other than a directory.
    pub const fn follow_links(&mut self, value: bool) -> &mut Self {
        self.follow_links = value;
        self
    }

    /// The longest path, in bytes, accepted by [`create`](DirBuilder::create).
    pub const fn path_max(&mut self, value: usize) -> &mut Self {
        self.path_max = value;
        self
    }

    /// Creates the directory at `dir_path`, and its parents if enabled.
    ///
    /// # Errors
    /// - [`PathLengthError`] if `dir_path` is longer than the configured maximum. Nothing else is
    ///   attempted in that case.
    /// - Any error from [`normalize`](path::normalize) or
    ///   [`create_segments`](crate::fs::create_segments).
    pub fn create<P: AsRef<OsStr>>(&self, dir_path: P) -> Result<(), MkdirError> {
        let raw = dir_path.as_ref().as_bytes();
        if raw.len() > self.path_max {
            Err(PathLengthError)?
        }

        let segments = path::normalize(raw)?;
        debug!("creating {segments} (from {:?}) with {self:?}", dir_path.as_ref());

        create_segments(&segments, self.mode, self.parents, self.follow_links)
    }
}

impl Default for DirBuilder {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            parents: false,
            follow_links: true,
            path_max: limits::path_max(),
        }
    }
}

/// Creates a directory with the given options. A shortcut for configuring a [`DirBuilder`].
///
/// Every call builds a new [`DirBuilder`], so the path length limit is queried again each time.
/// When creating many directories, configure one builder and reuse it instead.
///
/// # Errors
/// See [`DirBuilder::create`].
pub fn create_directories<P: AsRef<OsStr>>(
    dir_path: P,
    mode: Mode,
    parents: bool,
    follow_links: bool,
) -> Result<(), MkdirError> {
    DirBuilder::new()
        .mode(mode)
        .parents(parents)
        .follow_links(follow_links)
        .create(dir_path)
}

/// Creates a directory and all of its missing parents, like `mkdir -p`. Queries the path length
/// limit on every call, as [`create_directories`] does.
///
/// # Errors
/// See [`DirBuilder::create`].
pub fn create_dir_all<P: AsRef<OsStr>>(dir_path: P, mode: Mode) -> Result<(), MkdirError> {
    create_directories(dir_path, mode, true, true)
}
