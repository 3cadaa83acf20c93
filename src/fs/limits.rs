use log::debug;

/// Queries the maximum length of a path, in bytes, for the file system holding the current
/// directory. Falls back to `PATH_MAX` if the limit is indeterminate.
pub fn path_max() -> usize {
    // SAFETY: The path is a valid nul-terminated string.
    match unsafe { libc::pathconf(c".".as_ptr(), libc::_PC_PATH_MAX) } {
        max if max > 0 => max as usize,
        _ => {
            debug!("pathconf(_PC_PATH_MAX) is indeterminate, using PATH_MAX");
            libc::PATH_MAX as usize
        },
    }
}
