use derive_more::Display;

/// The kind of entity found at a path, as reported by `stat` or `lstat`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    #[display("block device")]
    BlockDevice,
    #[display("character device")]
    CharDevice,
    #[display("directory")]
    Directory,
    #[display("fifo")]
    Fifo,
    #[display("symbolic link")]
    Symlink,
    #[display("regular file")]
    Regular,
    #[display("socket")]
    Socket,
    #[display("unknown file type")]
    Other,
}

use FileType::*;

impl FileType {
    #[inline(always)]
    pub(crate) const fn from_stat_mode(st_mode: libc::mode_t) -> FileType {
        match st_mode & libc::S_IFMT {
            libc::S_IFBLK => BlockDevice,
            libc::S_IFCHR => CharDevice,
            libc::S_IFDIR => Directory,
            libc::S_IFIFO => Fifo,
            libc::S_IFLNK => Symlink,
            libc::S_IFREG => Regular,
            libc::S_IFSOCK => Socket,
            _ => Other,
        }
    }
}
