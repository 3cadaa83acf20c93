//! Directory creation on top of [`normalize`](crate::path::normalize), via thin `libc` wrappers.
//!
//! Most callers want [`DirBuilder`], or one of its shortcuts [`create_directories`] and
//! [`create_dir_all`]. The pieces it is built from are public too: [`check_status`] reports what
//! exists at a path, and [`create_segments`] walks an already normalized path.
//!
//! # Errors
//! Every fallible operation here returns a [`MkdirError`], which can be reduced to a POSIX code
//! with [`MkdirError::code`]. No errors are retried, and no partial progress is rolled back.
//!
//! # Concurrency
//! Nothing here is synchronized. Two walks racing to create the same directory can both see it as
//! absent, and the loser will fail with `EEXIST` rather than treating the directory as already
//! there.
#![cfg(target_os = "linux")]

mod create;
mod error;
mod file_type;
mod limits;
mod mode;
mod options;
mod panic;
mod status;
mod tests;
mod util;

pub use create::*;
pub use error::*;
pub use file_type::*;
pub use limits::*;
pub use mode::*;
pub use options::*;
pub use status::*;
