// src/transfer/naming.rs

use std::path::{Path, PathBuf};

/// Collections are named in the singular by callers and in the plural in the
/// database: `movie` -> `movies`.
pub fn pluralize(collection: &str) -> String {
    format!("{collection}s")
}

/// `<dir>/<collection>s.json`
pub fn export_path(dir: &Path, collection: &str) -> PathBuf {
    dir.join(format!("{}.json", pluralize(collection)))
}

/// Make `json_file` absolute against `base` unless it already is.
pub fn resolve_against(base: &Path, json_file: &Path) -> PathBuf {
    if json_file.is_absolute() {
        json_file.to_path_buf()
    } else {
        base.join(json_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_s_even_when_already_plural() {
        assert_eq!(pluralize("movie"), "movies");
        assert_eq!(pluralize("shows"), "showss");
    }

    #[test]
    fn export_path_lives_in_dir() {
        assert_eq!(
            export_path(Path::new("/tmp/scratch"), "anime"),
            PathBuf::from("/tmp/scratch/animes.json")
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_paths_are_left_alone() {
        assert_eq!(
            resolve_against(Path::new("/home/op"), Path::new("/data/movies.json")),
            PathBuf::from("/data/movies.json")
        );
        assert_eq!(
            resolve_against(Path::new("/home/op"), Path::new("dumps/movies.json")),
            PathBuf::from("/home/op/dumps/movies.json")
        );
    }
}
