use std::io;

use libc::c_int;

/// The error code left behind by the last failed libc call on this thread.
pub fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or(libc::EIO)
}
