// src/scratch/clear.rs

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::errors::Result;

/// Remove every entry inside `dir`, leaving `dir` itself in place.
///
/// Subdirectories are removed together with their contents. Symlinks are
/// unlinked, never followed. Returns the number of top-level entries removed.
pub async fn clear_dir(dir: &Path) -> Result<usize> {
    // Collect first so removals don't race the directory iterator.
    let mut entries: Vec<(PathBuf, bool)> = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let is_dir = entry.file_type().await?.is_dir();
        entries.push((entry.path(), is_dir));
    }

    for (path, is_dir) in entries.iter() {
        if *is_dir {
            fs::remove_dir_all(path).await?;
        } else {
            fs::remove_file(path).await?;
        }
        debug!(path = %path.display(), dir = *is_dir, "removed scratch entry");
    }

    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn removes_files_and_nested_dirs() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("a.json"), "{}").unwrap();
        std::fs::create_dir_all(root.path().join("nested/deeper")).unwrap();
        std::fs::write(root.path().join("nested/deeper/b.json"), "{}").unwrap();

        let removed = clear_dir(root.path()).await.unwrap();

        assert_eq!(removed, 2);
        assert!(root.path().is_dir());
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn empty_dir_is_a_no_op() {
        let root = tempfile::tempdir().unwrap();
        assert_eq!(clear_dir(root.path()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn missing_dir_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        assert!(clear_dir(&root.path().join("gone")).await.is_err());
    }
}
