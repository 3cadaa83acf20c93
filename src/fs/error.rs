use std::fmt::{self, Display, Formatter};
use std::io;

use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

use crate::fs::mode::{InvalidModeError, ModeError, ModeRangeError};
use crate::fs::panic::{BadStackAddrPanic, Panic};
use crate::path::{InvalidPathError, MalformedPathError, NormalizeError};

/// The operation tag attached to every [`MkdirError`], for downstream formatting.
pub const OPERATION: &str = "mkdir";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("a component of the provided path exists but is not a directory")]
pub struct AlreadyExistsError;

/// Permission was denied, either while searching a component or writing to the parent. Holds the
/// exact code, since both `EACCES` and `EPERM` end up here.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("permission denied")]
pub struct AccessError(#[error(not(source))] pub c_int);

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("parent directory resides on a read-only file system")]
pub struct ReadOnlyFSError;

/// Either `ENOSPC` or `EDQUOT`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError(#[error(not(source))] pub c_int);

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("a component used as a directory in the provided path is not a directory")]
pub struct NonDirComponentError;

/// Any other error reported by the OS, passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub struct OsError(#[error(not(source))] pub c_int);

impl Display for OsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", io::Error::from_raw_os_error(self.0))
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum MkdirError {
    // ENAMETOOLONG
    PathLength(PathLengthError),
    // EINVAL
    InvalidPath(InvalidPathError),
    // EILSEQ
    MalformedPath(MalformedPathError),
    // EINVAL
    InvalidMode(InvalidModeError),
    // ERANGE
    ModeRange(ModeRangeError),
    // ENOENT
    MissingComponent(MissingComponentError),
    // EEXIST
    AlreadyExists(AlreadyExistsError),
    // EACCES, EPERM
    Access(AccessError),
    // EROFS
    ReadOnlyFS(ReadOnlyFSError),
    // ENOSPC, EDQUOT
    StorageExhausted(StorageExhaustedError),
    // ELOOP
    ExcessiveLinks(ExcessiveLinksError),
    // ENOTDIR
    NonDirComponent(NonDirComponentError),
    Os(OsError),
}

impl MkdirError {
    /// Interprets an error code reported by `stat`, `lstat` or `mkdir`.
    ///
    /// # Panics
    /// Panics on `EFAULT`, which can only be caused by passing an invalid pointer.
    pub(crate) fn interpret_raw_error(code: c_int) -> MkdirError {
        match code {
            libc::EACCES | libc::EPERM => AccessError(code).into(),
            libc::EDQUOT | libc::ENOSPC => StorageExhaustedError(code).into(),
            libc::EEXIST => AlreadyExistsError.into(),
            libc::EFAULT => BadStackAddrPanic.panic(),
            libc::ELOOP => ExcessiveLinksError.into(),
            libc::ENAMETOOLONG => PathLengthError.into(),
            libc::ENOENT => MissingComponentError.into(),
            libc::ENOTDIR => NonDirComponentError.into(),
            libc::EROFS => ReadOnlyFSError.into(),
            e => OsError(e).into(),
        }
    }

    /// The POSIX error code describing this error.
    pub const fn code(&self) -> c_int {
        match self {
            MkdirError::PathLength(_) => libc::ENAMETOOLONG,
            MkdirError::InvalidPath(_) => libc::EINVAL,
            MkdirError::MalformedPath(_) => libc::EILSEQ,
            MkdirError::InvalidMode(_) => libc::EINVAL,
            MkdirError::ModeRange(_) => libc::ERANGE,
            MkdirError::MissingComponent(_) => libc::ENOENT,
            MkdirError::AlreadyExists(_) => libc::EEXIST,
            MkdirError::Access(AccessError(code)) => *code,
            MkdirError::ReadOnlyFS(_) => libc::EROFS,
            MkdirError::StorageExhausted(StorageExhaustedError(code)) => *code,
            MkdirError::ExcessiveLinks(_) => libc::ELOOP,
            MkdirError::NonDirComponent(_) => libc::ENOTDIR,
            MkdirError::Os(OsError(code)) => *code,
        }
    }

    /// The name of the operation that failed, always `"mkdir"`.
    pub const fn operation(&self) -> &'static str {
        OPERATION
    }
}

impl From<NormalizeError> for MkdirError {
    fn from(value: NormalizeError) -> Self {
        match value {
            NormalizeError::Invalid(e) => e.into(),
            NormalizeError::Malformed(e) => e.into(),
        }
    }
}

impl From<ModeError> for MkdirError {
    fn from(value: ModeError) -> Self {
        match value {
            ModeError::Invalid(e) => e.into(),
            ModeError::Range(e) => e.into(),
        }
    }
}

impl From<MkdirError> for io::Error {
    fn from(value: MkdirError) -> Self {
        io::Error::from_raw_os_error(value.code())
    }
}
