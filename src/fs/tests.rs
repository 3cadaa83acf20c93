#![cfg(test)]

use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::Path;
use std::{fs as std_fs, io};

use tempfile::TempDir;

use super::*;
use crate::path::{InvalidPathError, MalformedPathError};

fn c_path(path: &Path) -> CString {
    CString::new(path.as_os_str().as_bytes()).unwrap()
}

fn is_dir(path: &Path) -> bool {
    std_fs::symlink_metadata(path).is_ok_and(|meta| meta.is_dir())
}

fn tmp() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn test_create_nested_with_parents() {
    let dir = tmp();
    let target = dir.path().join("a/b/c");

    create_directories(&target, Mode::new(0o700).unwrap(), true, true).unwrap();

    for sub in ["a", "a/b", "a/b/c"] {
        let path = dir.path().join(sub);
        assert!(is_dir(&path), "{sub} should have been created.");
        assert_eq!(
            std_fs::metadata(&path).unwrap().permissions().mode() & 0o777,
            0o700,
            "{sub} should have the requested permissions."
        );
    }

    assert_eq!(
        create_directories(&target, Mode::new(0o700).unwrap(), true, true),
        Ok(()),
        "Creating an existing tree again should be a no-op."
    );
}

#[test]
fn test_create_without_parents() {
    let dir = tmp();

    assert_eq!(
        DirBuilder::new().create(dir.path().join("a/b")),
        Err(MkdirError::MissingComponent(MissingComponentError)),
        "A missing parent shouldn't be created without the parents option."
    );
    assert!(!dir.path().join("a").exists(), "Nothing should have been created.");

    DirBuilder::new().create(dir.path().join("a")).unwrap();
    DirBuilder::new().create(dir.path().join("a/b")).unwrap();
    assert!(is_dir(&dir.path().join("a/b")), "Only the last component needs to be missing.");
}

#[test]
fn test_existing_target_without_parents() {
    let dir = tmp();
    std_fs::create_dir(dir.path().join("a")).unwrap();

    assert_eq!(
        DirBuilder::new().create(dir.path().join("a")),
        Ok(()),
        "An existing directory isn't an error, even without the parents option."
    );
}

#[test]
fn test_file_in_the_way() {
    let dir = tmp();
    std_fs::write(dir.path().join("f"), b"").unwrap();

    let err = DirBuilder::new()
        .parents(true)
        .create(dir.path().join("f/x"))
        .unwrap_err();
    assert_eq!(err, MkdirError::AlreadyExists(AlreadyExistsError));
    assert_eq!(err.code(), libc::EEXIST);

    assert_eq!(
        DirBuilder::new().create(dir.path().join("f")),
        Err(MkdirError::AlreadyExists(AlreadyExistsError)),
        "A file at the final component should be reported too."
    );
}

#[test]
fn test_partial_creation_is_kept() {
    let dir = tmp();
    // Longer than NAME_MAX, so the OS rejects the final component only after its parents exist.
    let target = dir.path().join(format!("x/y/../z/{}", "n".repeat(300)));

    let err = create_dir_all(&target, Mode::ALL).unwrap_err();
    assert_eq!(err, MkdirError::PathLength(PathLengthError));
    assert!(is_dir(&dir.path().join("x/z")), "Directories created before a failure should remain.");
    assert!(!dir.path().join("x/y").exists(), "'y' is cancelled lexically and never created.");
}

#[test]
fn test_lexical_parent_is_never_created() {
    let dir = tmp();

    create_dir_all(dir.path().join("a/../b//./c/"), Mode::ALL).unwrap();

    assert!(!dir.path().join("a").exists());
    assert!(is_dir(&dir.path().join("b/c")));
}

#[test]
fn test_path_too_long() {
    let dir = tmp();
    let target = dir.path().join("x".repeat(64));

    let err = DirBuilder::new()
        .parents(true)
        .path_max(dir.path().as_os_str().len() + 8)
        .create(&target)
        .unwrap_err();

    assert_eq!(err, MkdirError::PathLength(PathLengthError));
    assert_eq!(err.code(), libc::ENAMETOOLONG);
    assert!(!target.exists(), "Nothing should be created when the path is too long.");
}

#[test]
fn test_invalid_paths() {
    assert_eq!(DirBuilder::new().create("/"), Err(MkdirError::InvalidPath(InvalidPathError)));
    assert_eq!(DirBuilder::new().create(""), Err(MkdirError::InvalidPath(InvalidPathError)));
    assert_eq!(DirBuilder::new().create("a/.."), Err(MkdirError::InvalidPath(InvalidPathError)));

    let err = DirBuilder::new().create("a\0b").unwrap_err();
    assert_eq!(err, MkdirError::MalformedPath(MalformedPathError));
    assert_eq!(err.code(), libc::EILSEQ);
}

#[test]
fn test_symlinks() {
    let dir = tmp();
    std_fs::create_dir(dir.path().join("real")).unwrap();
    symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

    assert_eq!(
        DirBuilder::new()
            .follow_links(false)
            .create(dir.path().join("link/sub")),
        Err(MkdirError::AlreadyExists(AlreadyExistsError)),
        "Without following links, a symlink to a directory isn't a directory."
    );
    assert!(!dir.path().join("real/sub").exists());

    DirBuilder::new().create(dir.path().join("link/sub")).unwrap();
    assert!(is_dir(&dir.path().join("real/sub")), "Links should be followed by default.");
}

#[test]
fn test_check_status() {
    let dir = tmp();
    std_fs::write(dir.path().join("file"), b"").unwrap();

    assert_eq!(check_status(&c_path(dir.path()), true), Ok(Status::Directory));
    assert_eq!(
        check_status(&c_path(&dir.path().join("file")), true),
        Ok(Status::Other(FileType::Regular))
    );
    assert_eq!(check_status(&c_path(&dir.path().join("none")), true), Ok(Status::Absent));
    assert_eq!(
        check_status(&c_path(&dir.path().join("file/none")), true),
        Err(MkdirError::NonDirComponent(NonDirComponentError)),
        "Errors other than ENOENT shouldn't be treated as absence."
    );
}

#[test]
fn test_check_status_dangling_link() {
    let dir = tmp();
    let link = dir.path().join("dangling");
    symlink(dir.path().join("missing"), &link).unwrap();

    assert_eq!(check_status(&c_path(&link), true), Ok(Status::Absent));
    assert_eq!(check_status(&c_path(&link), false), Ok(Status::Other(FileType::Symlink)));
}

#[test]
fn test_permission_denied() {
    // SAFETY: geteuid is always successful.
    if unsafe { libc::geteuid() } == 0 {
        eprintln!("skipping test_permission_denied: root bypasses permission checks");
        return;
    }
    let dir = tmp();
    let locked = dir.path().join("locked");
    std_fs::create_dir(&locked).unwrap();
    std_fs::set_permissions(&locked, std_fs::Permissions::from_mode(0o500)).unwrap();

    let err = create_dir_all(locked.join("x"), Mode::ALL).unwrap_err();
    assert_eq!(err, MkdirError::Access(AccessError(libc::EACCES)));
    assert_eq!(err.code(), libc::EACCES);

    std_fs::set_permissions(&locked, std_fs::Permissions::from_mode(0o700)).unwrap();
}

#[test]
fn test_mkdir_failure_is_surfaced() {
    let dir = tmp();
    let link = dir.path().join("dangling");
    symlink(dir.path().join("missing"), &link).unwrap();

    // stat sees the link target as absent, but mkdir refuses to replace the link itself.
    assert_eq!(
        DirBuilder::new().create(&link),
        Err(MkdirError::AlreadyExists(AlreadyExistsError)),
        "An EEXIST from mkdir after an absence check should be reported, not ignored."
    );
    assert_eq!(
        create_dir_all(link.join("sub"), Mode::ALL),
        Err(MkdirError::AlreadyExists(AlreadyExistsError))
    );
    assert!(!dir.path().join("missing").exists(), "The link target shouldn't be created.");
    assert_eq!(check_status(&c_path(&link), false), Ok(Status::Other(FileType::Symlink)));
}

#[test]
fn test_error_codes() {
    assert_eq!(
        MkdirError::interpret_raw_error(libc::EACCES),
        MkdirError::Access(AccessError(libc::EACCES))
    );
    assert_eq!(MkdirError::interpret_raw_error(libc::EPERM).code(), libc::EPERM);
    assert_eq!(MkdirError::interpret_raw_error(libc::EDQUOT).code(), libc::EDQUOT);
    assert_eq!(
        MkdirError::interpret_raw_error(libc::EROFS),
        MkdirError::ReadOnlyFS(ReadOnlyFSError)
    );
    assert_eq!(MkdirError::interpret_raw_error(libc::EIO), MkdirError::Os(OsError(libc::EIO)));
    assert_eq!(MkdirError::interpret_raw_error(libc::EIO).code(), libc::EIO);

    let err = MkdirError::from(ModeRangeError);
    assert_eq!(err.code(), libc::ERANGE);
    assert_eq!(err.operation(), "mkdir");
    assert_eq!(MkdirError::from(InvalidModeError).code(), libc::EINVAL);

    let io_err = io::Error::from(MkdirError::MissingComponent(MissingComponentError));
    assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn test_mode_from_number() {
    assert_eq!(Mode::try_from(0o755_u32).map(|m| m.bits()), Ok(0o755));
    assert_eq!(Mode::try_from(0_u32).map(|m| m.bits()), Ok(0));
    assert_eq!(Mode::try_from(0o1000_u32), Err(ModeRangeError));
    assert_eq!(Mode::new(0o4755), Err(ModeRangeError), "Special bits aren't accepted.");
    assert_eq!(Mode::default(), Mode::ALL);
}

#[test]
fn test_mode_from_str() {
    let parse = |s: &str| s.parse::<Mode>().map(|mode| mode.bits());

    assert_eq!(parse("755"), Ok(0o755));
    assert_eq!(parse("0755"), Ok(0o755));
    assert_eq!(parse("  +17"), Ok(0o17), "Leading whitespace and '+' are accepted.");
    assert_eq!(parse("-0"), Ok(0));
    assert_eq!(parse("0"), Ok(0));

    assert_eq!(parse(""), Err(ModeError::Invalid(InvalidModeError)));
    assert_eq!(parse("  "), Err(ModeError::Invalid(InvalidModeError)));
    assert_eq!(parse("8"), Err(ModeError::Invalid(InvalidModeError)));
    assert_eq!(
        parse("75x"),
        Err(ModeError::Invalid(InvalidModeError)),
        "Leftover characters are invalid."
    );
    assert_eq!(parse("755 "), Err(ModeError::Invalid(InvalidModeError)));
    assert_eq!(parse("0o755"), Err(ModeError::Invalid(InvalidModeError)));

    assert_eq!(parse("1000"), Err(ModeError::Range(ModeRangeError)));
    assert_eq!(parse("-1"), Err(ModeError::Range(ModeRangeError)), "Negative values wrap around.");
    assert_eq!(
        parse("7777777777777777777777777x"),
        Err(ModeError::Range(ModeRangeError)),
        "Overflow is reported before leftover characters."
    );
}

#[test]
fn test_mode_display() {
    assert_eq!(Mode::new(0o55).unwrap().to_string(), "0o055");
    assert_eq!(format!("{:?}", Mode::ALL), "Mode(0o777)");
}

#[test]
fn test_path_max() {
    assert!(path_max() >= 256, "Any Linux file system allows paths this long.");
    assert_eq!(DirBuilder::new().path_max, path_max());
}
