//! Lexical path normalization. Nothing in this module touches the filesystem.
//!
//! The main entry point is [`normalize`], which turns a raw byte path into [`Segments`]: the
//! ordered list of literals and separators that, concatenated, form the cleaned path. The same
//! list is what the [`fs`](crate::fs) module walks when creating directories, one prefix at a
//! time.

mod error;
mod normalize;
mod segment;

pub use error::*;
pub use normalize::*;
pub use segment::*;
