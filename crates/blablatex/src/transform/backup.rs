//! Rename-based backups.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::error;

use crate::error::{BlablaError, Result};

/// Suffix appended to the original file name.
pub const DEFAULT_BACKUP_SUFFIX: &str = ".org";

/// Sibling path holding the pristine original: `paper.tex` -> `paper.tex.org`.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// An original file moved aside to its backup path.
#[derive(Debug)]
pub struct Backup {
    original: PathBuf,
    backup: PathBuf,
}

impl Backup {
    /// Move `original` to its backup path.
    ///
    /// Fails without touching anything if the backup already exists, also
    /// when it appears between the check and the move. Fails after the move
    /// if the filesystem does not show the backup in place of the original.
    pub fn create(original: &Path, suffix: &str) -> Result<Self> {
        let backup = backup_path(original, suffix);

        if backup.exists() {
            return Err(BlablaError::backup(&backup, "backup file already exists"));
        }

        move_aside(original, &backup)?;

        if !backup.exists() || original.exists() {
            return Err(BlablaError::backup(
                &backup,
                format!("rename of '{}' left an inconsistent state", original.display()),
            ));
        }

        Ok(Self {
            original: original.to_path_buf(),
            backup,
        })
    }

    /// Path of the file being rewritten.
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Path of the backup.
    pub fn path(&self) -> &Path {
        &self.backup
    }

    /// Put the backup back in place of a partially written original.
    pub fn restore(self) -> Result<()> {
        if self.original.exists() {
            fs::remove_file(&self.original).map_err(|e| BlablaError::io(&self.original, e))?;
        }
        fs::rename(&self.backup, &self.original).map_err(|e| {
            error!(
                "could not restore {} from {}: {}",
                self.original.display(),
                self.backup.display(),
                e
            );
            BlablaError::io(&self.backup, e)
        })
    }
}

/// Link `original` to `backup`, then unlink `original`.
///
/// Unlike `fs::rename`, linking never replaces an existing `backup`.
fn move_aside(original: &Path, backup: &Path) -> Result<()> {
    match fs::hard_link(original, backup) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(BlablaError::backup(backup, "backup file already exists"));
        }
        Err(e) => return Err(BlablaError::io(original, e)),
    }

    if let Err(e) = fs::remove_file(original) {
        let _ = fs::remove_file(backup);
        return Err(BlablaError::io(original, e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("dir/paper.tex"), ".org"),
            PathBuf::from("dir/paper.tex.org")
        );
        assert_eq!(backup_path(Path::new("notes"), ".bak"), PathBuf::from("notes.bak"));
    }

    #[test]
    fn test_create_and_restore() {
        let dir = TempDir::new().unwrap();
        let original = dir.path().join("a.tex");
        fs::write(&original, "content").unwrap();

        let backup = Backup::create(&original, DEFAULT_BACKUP_SUFFIX).unwrap();
        assert!(!original.exists());
        assert_eq!(fs::read_to_string(backup.path()).unwrap(), "content");

        fs::write(&original, "half-written").unwrap();
        backup.restore().unwrap();

        assert_eq!(fs::read_to_string(&original).unwrap(), "content");
        assert!(!dir.path().join("a.tex.org").exists());
    }

    #[test]
    fn test_existing_backup_is_refused() {
        let dir = TempDir::new().unwrap();
        let original = dir.path().join("b.tex");
        let existing = dir.path().join("b.tex.org");
        fs::write(&original, "new").unwrap();
        fs::write(&existing, "old").unwrap();

        let err = Backup::create(&original, DEFAULT_BACKUP_SUFFIX).unwrap_err();

        assert!(err.is_backup());
        assert_eq!(fs::read_to_string(&original).unwrap(), "new");
        assert_eq!(fs::read_to_string(&existing).unwrap(), "old");
    }

    #[test]
    fn test_move_aside_never_replaces_backup() {
        let dir = TempDir::new().unwrap();
        let original = dir.path().join("c.tex");
        let late = dir.path().join("c.tex.org");
        fs::write(&original, "mine").unwrap();
        fs::write(&late, "appeared late").unwrap();

        let err = move_aside(&original, &late).unwrap_err();

        assert!(err.is_backup());
        assert_eq!(fs::read_to_string(&original).unwrap(), "mine");
        assert_eq!(fs::read_to_string(&late).unwrap(), "appeared late");
    }

    #[test]
    fn test_missing_original_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Backup::create(&dir.path().join("nope.tex"), ".org").unwrap_err();
        assert!(matches!(err, BlablaError::Io { .. }));
    }
}
