//! Directory listing for fileexplorer.
//!
//! Only the immediate subdirectories of a path are reported. Files, sockets and
//! broken symlinks are skipped, and the names are sorted before they leave this
//! module so every caller sees the same ordering.

use crate::core::ExplorerError;

use std::ffi::OsString;
use std::fs::{self, DirEntry};
use std::path::Path;

/// Returns the sorted names of the subdirectories of `path`, following symlinks.
///
/// An empty directory yields an empty list. A missing or unreadable `path`
/// fails with [ExplorerError::Io].
pub fn list_dirs(path: &Path) -> Result<Vec<String>, ExplorerError> {
    list_dirs_with(path, true)
}

/// Same as [list_dirs], with control over whether symlinks to directories count.
pub fn list_dirs_with(path: &Path, follow_symlinks: bool) -> Result<Vec<String>, ExplorerError> {
    let read = fs::read_dir(path).map_err(|e| ExplorerError::io(path, e))?;

    let mut names: Vec<OsString> = Vec::new();
    for entry in read {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if is_directory(&entry, follow_symlinks) {
            names.push(entry.file_name());
        }
    }

    // byte-wise OsStr ordering; equals code point order for UTF-8 names
    names.sort_unstable();

    tracing::debug!(path = %path.display(), count = names.len(), "listed subdirectories");

    Ok(names
        .into_iter()
        .map(|n| n.to_string_lossy().into_owned())
        .collect())
}

fn is_directory(entry: &DirEntry, follow_symlinks: bool) -> bool {
    let ft = match entry.file_type() {
        Ok(ft) => ft,
        Err(_) => return false,
    };

    if ft.is_symlink() {
        // broken links fail the metadata call and are dropped
        return follow_symlinks
            && fs::metadata(entry.path())
                .map(|md| md.is_dir())
                .unwrap_or(false);
    }
    ft.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn skips_files() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("src"))?;
        File::create(tmp.path().join("Cargo.toml"))?;

        assert_eq!(list_dirs(tmp.path())?, vec!["src".to_string()]);
        Ok(())
    }

    #[test]
    fn hidden_dirs_are_listed() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join(".git"))?;
        fs::create_dir(tmp.path().join("docs"))?;

        assert_eq!(list_dirs(tmp.path())?, vec![".git", "docs"]);
        Ok(())
    }

    #[test]
    fn sorted_by_name_bytes() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        for name in ["beta", "Alpha", "gamma"] {
            fs::create_dir(tmp.path().join(name))?;
        }

        assert_eq!(list_dirs(tmp.path())?, vec!["Alpha", "beta", "gamma"]);
        Ok(())
    }

    #[test]
    fn listing_a_file_fails() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let file = tmp.path().join("notes.txt");
        File::create(&file)?;

        let err = list_dirs(&file).expect_err("listing a regular file should fail");
        assert!(matches!(err, ExplorerError::Io { .. }));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_to_dirs_respect_follow_flag() -> Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::symlink;

        let tmp = TempDir::new()?;
        let target = tmp.path().join("real");
        fs::create_dir(&target)?;
        symlink(&target, tmp.path().join("link"))?;
        symlink(tmp.path().join("missing"), tmp.path().join("dangling"))?;

        assert_eq!(list_dirs_with(tmp.path(), true)?, vec!["link", "real"]);
        assert_eq!(list_dirs_with(tmp.path(), false)?, vec!["real"]);
        Ok(())
    }

    // macOS filesystems refuse names that are not valid UTF-8
    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_lossy() -> Result<(), Box<dyn std::error::Error>> {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join(OsStr::from_bytes(b"bad\xff")))?;
        fs::create_dir(tmp.path().join("good"))?;

        assert_eq!(list_dirs(tmp.path())?, vec!["bad\u{FFFD}", "good"]);
        Ok(())
    }
}
