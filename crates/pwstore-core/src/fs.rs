//! Filesystem utilities for atomic, owner-only writes.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Permission bits for store directories.
pub const DIR_MODE: u32 = 0o700;

/// Permission bits for store files.
pub const FILE_MODE: u32 = 0o600;

/// Create `path` as an owner-only directory if it does not exist.
///
/// An existing directory keeps its contents but has its mode tightened.
pub fn ensure_private_dir(path: &Path) -> io::Result<()> {
    if !path.is_dir() {
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder.create(path)?;
    }
    set_mode(path, DIR_MODE)
}

/// Write `contents` to `destination` without ever leaving it half-written.
///
/// The bytes go to a hidden temporary file next to the destination, are
/// synced to disk, then renamed over it. Until the rename succeeds the
/// previous contents stay intact.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(destination)?;

    let result = (|| {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        let mut file = options.open(&temp_path)?;
        file.write_all(contents)?;
        file.sync_all()
    })();

    if let Err(err) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    rename_with_fallback(&temp_path, destination)?;
    set_mode(destination, FILE_MODE)
}

/// Atomically rename a file over `destination`.
///
/// On Windows, `fs::rename` fails if the destination already exists, so the
/// destination is removed and the rename retried. Elsewhere the first error
/// is returned and the destination is never touched.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails (after the fallback attempt on Windows).
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(temp_path, destination) {
        Ok(()) => Ok(()),
        Err(err) => replace_after_failed_rename(temp_path, destination, err),
    }
}

#[cfg(windows)]
fn replace_after_failed_rename(
    temp_path: &Path,
    destination: &Path,
    initial_err: io::Error,
) -> io::Result<()> {
    let _ = fs::remove_file(destination);
    fs::rename(temp_path, destination).map_err(|retry_err| {
        let _ = fs::remove_file(temp_path);
        io::Error::new(
            retry_err.kind(),
            format!(
                "Atomic rename failed (initial: {}, retry: {})",
                initial_err, retry_err
            ),
        )
    })
}

#[cfg(not(windows))]
fn replace_after_failed_rename(
    temp_path: &Path,
    _destination: &Path,
    err: io::Error,
) -> io::Result<()> {
    let _ = fs::remove_file(temp_path);
    Err(err)
}

fn temp_path_for(destination: &Path) -> io::Result<PathBuf> {
    let name = destination.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Not a file path: {}", destination.display()),
        )
    })?;
    let temp_name = format!(".{}.{}.tmp", name.to_string_lossy(), std::process::id());
    Ok(destination.with_file_name(temp_name))
}

fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = (path, mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("entry.gpg");

        write_atomic(&dest, b"armored").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"armored");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("entry.gpg");
        File::create(&dest).unwrap().write_all(b"old").unwrap();

        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_missing_parent_keeps_nothing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing").join("entry.gpg");

        assert!(write_atomic(&dest, b"data").is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_rename_overwrites_existing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("dest.txt");

        File::create(&dest).unwrap().write_all(b"old").unwrap();
        File::create(&temp).unwrap().write_all(b"new").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_rename_keeps_destination() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("vanished.tmp");
        let dest = dir.path().join("init.gpg");
        File::create(&dest).unwrap().write_all(b"old").unwrap();

        assert!(rename_with_fallback(&missing, &dest).is_err());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "old");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_replace_keeps_destination_and_drops_temp() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("new.tmp");
        let dest = dir.path().join("occupied");
        fs::create_dir(&dest).unwrap();
        File::create(dest.join("keep")).unwrap().write_all(b"old").unwrap();
        File::create(&temp).unwrap().write_all(b"new").unwrap();

        assert!(rename_with_fallback(&temp, &dest).is_err());
        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(dest.join("keep")).unwrap(), "old");
    }

    #[cfg(unix)]
    #[test]
    fn test_private_modes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let store = dir.path().join("store");
        ensure_private_dir(&store).unwrap();
        let file = store.join("a.gpg");
        write_atomic(&file, b"x").unwrap();

        let dir_mode = fs::metadata(&store).unwrap().permissions().mode() & 0o777;
        let file_mode = fs::metadata(&file).unwrap().permissions().mode() & 0o777;
        assert_eq!(dir_mode, DIR_MODE);
        assert_eq!(file_mode, FILE_MODE);
    }
}
