use std::ffi::CStr;

use log::debug;

use crate::fs::error::{AlreadyExistsError, MissingComponentError};
use crate::fs::{Mode, MkdirError, Status, check_status, util};
use crate::path::Segments;

fn make_dir(path: &CStr, mode: Mode) -> Result<(), MkdirError> {
    // SAFETY: path is a valid nul-terminated string.
    if unsafe { libc::mkdir(path.as_ptr(), mode.bits() as libc::mode_t) } == -1 {
        Err(MkdirError::interpret_raw_error(util::err_no()))?
    }
    Ok(())
}

/// Walks a normalized path one prefix at a time, creating every directory that doesn't exist.
///
/// Separators and `..` literals in the middle of the path are never checked. For every other
/// prefix:
/// - An existing directory is skipped.
/// - A missing prefix is created with `mode`, unless it is an intermediate component and
///   `parents` is unset, in which case the walk fails with [`MissingComponentError`].
/// - Anything else that exists fails the walk with [`AlreadyExistsError`].
///
/// The walk stops at the first failure. Directories created before that point are left in place.
///
/// # Errors
/// See above, along with any error reported by `stat`, `lstat` or `mkdir` themselves.
pub fn create_segments(
    segments: &Segments<'_>,
    mode: Mode,
    parents: bool,
    follow_links: bool,
) -> Result<(), MkdirError> {
    let mut prefixes = segments.prefixes();

    while let Some(prefix) = prefixes.next() {
        if !prefix.needs_check() {
            continue;
        }
        let path = prefix.as_c_str();

        match check_status(path, follow_links)? {
            Status::Directory => debug!("{path:?}: already a directory"),
            Status::Other(file_type) => {
                debug!("{path:?}: exists as a {file_type}");
                Err(AlreadyExistsError)?
            },
            Status::Absent if !prefix.is_last && !parents => {
                debug!("{path:?}: missing and parent creation is disabled");
                Err(MissingComponentError)?
            },
            Status::Absent => {
                make_dir(path, mode)?;
                debug!("{path:?}: created with mode {mode}");
            },
        }
    }

    Ok(())
}
