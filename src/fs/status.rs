use std::ffi::CStr;
use std::mem::MaybeUninit;

use derive_more::IsVariant;
use libc::stat as Stat;
use log::trace;

use crate::fs::{FileType, MkdirError, util};

/// What currently exists at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Status {
    Directory,
    /// Something exists, but it isn't a directory (or a symlink to one, when following links).
    Other(FileType),
    Absent,
}

/// Checks whether `path` exists and is a directory. Uses `stat` when `follow_links` is set and
/// `lstat` otherwise.
///
/// Only `ENOENT` counts as absence. Every other failure is returned as an error, so that a path
/// which can't be inspected is never mistaken for one that can be created.
///
/// # Errors
/// Any error reported by the underlying call other than `ENOENT`.
pub fn check_status(path: &CStr, follow_links: bool) -> Result<Status, MkdirError> {
    let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();

    let res = if follow_links {
        // SAFETY: path is a valid nul-terminated string and raw_meta is writable.
        unsafe { libc::stat(path.as_ptr(), raw_meta.as_mut_ptr()) }
    } else {
        // SAFETY: As above.
        unsafe { libc::lstat(path.as_ptr(), raw_meta.as_mut_ptr()) }
    };

    if res == -1 {
        return match util::err_no() {
            libc::ENOENT => {
                trace!("status {path:?}: absent");
                Ok(Status::Absent)
            },
            e => Err(MkdirError::interpret_raw_error(e)),
        };
    }
    // SAFETY: stat and lstat initialize raw_meta unless they return an error, handled above.
    let raw = unsafe { raw_meta.assume_init() };

    let status = match FileType::from_stat_mode(raw.st_mode) {
        FileType::Directory => Status::Directory,
        other => Status::Other(other),
    };
    trace!("status {path:?}: {status:?}");
    Ok(status)
}
