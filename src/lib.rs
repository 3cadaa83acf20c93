//! This crate implements recursive directory creation with `mkdir -p` semantics, built on top of a
//! purely lexical path normalization pass.
//!
//! # Method
//! Creation happens in two stages. First, [`path::normalize`] cleans the provided path by looking
//! at its bytes alone: runs of `/` are collapsed, `.` components are dropped and `..` components
//! cancel the component before them where that can be decided without touching the disk. The
//! result is an ordered list of [`Segment`](path::Segment)s. Second, the [`fs`] module replays
//! that list left to right, checking each cumulative prefix and creating whatever is missing.
//!
//! Normalization never resolves symlinks. A path like `link/..` is cancelled lexically, which is
//! exactly what a caller asking for `mkdir -p` on a cleaned path expects, but isn't necessarily
//! what the kernel would do while walking the same string.
//!
//! # Error Handling
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (mostly ZSTs) that implement
//! [`Error`](std::error::Error). Every error produced by the [`fs`] module can still be reduced to
//! the POSIX code that describes it, via [`MkdirError::code`](fs::MkdirError::code).
//!
//! Partial success is a valid outcome. If creation fails halfway along a path, the directories
//! that were already created are left in place for the caller to observe.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers, and is only available on
//! Linux. The [`path`] module has no such requirement.
//!
//! Logging goes through the `log` facade, so nothing is printed unless the final binary installs
//! a logger.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "fs")]
pub mod fs;
pub mod path;
