//! Icon loader - reads discovered files and assigns canonical ids.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Result, SpriteError};

use super::scanner::relative_key;

/// A single icon read from the sprites directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    /// Path relative to the sprites root, as discovered.
    pub relative_path: PathBuf,
    /// Identifier used for the symbol id and the generated name type.
    pub canonical_id: String,
    /// Untouched file contents.
    pub raw_contents: String,
}

/// Derive the canonical id for a `/`-separated relative path.
///
/// Only the first separator becomes `:` and only the first `.svg` is
/// removed, so `outline/academic-cap.svg` maps to `outline:academic-cap`
/// while `a/b/c.svg` maps to `a:b/c`.
pub fn canonical_id(relative_path: &str) -> String {
    relative_path
        .replacen('/', ":", 1)
        .replacen(".svg", "", 1)
        .trim()
        .to_string()
}

/// Read one icon from `root.join(relative)`.
pub fn load_icon(root: &Path, relative: &Path) -> Result<IconFile> {
    let path = root.join(relative);
    let raw_contents = fs::read_to_string(&path).map_err(|e| SpriteError::Io {
        path: path.clone(),
        message: format!("Failed to read sprite: {}", e),
    })?;

    Ok(IconFile {
        relative_path: relative.to_path_buf(),
        canonical_id: canonical_id(&relative_key(relative)),
        raw_contents,
    })
}

/// Load every discovered icon.
///
/// Files are read in parallel; the result keeps the order of `paths`.
/// The first failing read aborts the load. Ids are not checked here, see
/// [`check_unique_ids`].
pub fn load_icons(root: &Path, paths: &[PathBuf]) -> Result<Vec<IconFile>> {
    paths
        .par_iter()
        .map(|relative| load_icon(root, relative))
        .collect()
}

/// Reject icon sets where two files share a canonical id.
pub fn check_unique_ids(icons: &[IconFile]) -> Result<()> {
    let mut seen: HashMap<&str, &Path> = HashMap::with_capacity(icons.len());

    for icon in icons {
        if let Some(first) = seen.insert(&icon.canonical_id, &icon.relative_path) {
            return Err(SpriteError::DuplicateId {
                id: icon.canonical_id.clone(),
                first: first.to_path_buf(),
                second: icon.relative_path.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn icon(relative: &str, id: &str) -> IconFile {
        IconFile {
            relative_path: PathBuf::from(relative),
            canonical_id: id.to_string(),
            raw_contents: "<svg/>".to_string(),
        }
    }

    #[test]
    fn test_canonical_id_one_level() {
        assert_eq!(canonical_id("outline/academic-cap.svg"), "outline:academic-cap");
        assert_eq!(canonical_id("solid/archive.svg"), "solid:archive");
    }

    #[test]
    fn test_canonical_id_top_level() {
        assert_eq!(canonical_id("archive.svg"), "archive");
    }

    #[test]
    fn test_canonical_id_keeps_deeper_separators() {
        assert_eq!(canonical_id("a/b/c.svg"), "a:b/c");
    }

    #[test]
    fn test_canonical_id_only_first_extension() {
        assert_eq!(canonical_id("x.svg/y.svg"), "x:y.svg");
    }

    #[test]
    fn test_canonical_id_trims_whitespace() {
        assert_eq!(canonical_id(" outline/archive .svg"), "outline:archive");
    }

    #[test]
    fn test_load_icon() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("outline")).unwrap();
        fs::write(dir.path().join("outline/archive.svg"), "<svg><path d=\"M1\"/></svg>").unwrap();

        let relative: PathBuf = ["outline", "archive.svg"].iter().collect();
        let icon = load_icon(dir.path(), &relative).unwrap();

        assert_eq!(icon.canonical_id, "outline:archive");
        assert_eq!(icon.relative_path, relative);
        assert_eq!(icon.raw_contents, "<svg><path d=\"M1\"/></svg>");
    }

    #[test]
    fn test_load_icon_missing_file() {
        let dir = tempdir().unwrap();

        let result = load_icon(dir.path(), Path::new("missing.svg"));

        match result {
            Err(SpriteError::Io { path, .. }) => assert!(path.ends_with("missing.svg")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_icons_keeps_order() {
        let dir = tempdir().unwrap();
        let names: Vec<String> = (0..32).map(|i| format!("icon-{:02}.svg", i)).collect();
        for name in &names {
            fs::write(dir.path().join(name), format!("<svg id=\"{}\"/>", name)).unwrap();
        }

        let paths: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
        let icons = load_icons(dir.path(), &paths).unwrap();

        let ids: Vec<&str> = icons.iter().map(|i| i.canonical_id.as_str()).collect();
        let expected: Vec<String> = (0..32).map(|i| format!("icon-{:02}", i)).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_load_icons_empty() {
        let dir = tempdir().unwrap();

        let icons = load_icons(dir.path(), &[]).unwrap();

        assert!(icons.is_empty());
    }

    #[test]
    fn test_check_unique_ids_rejects_duplicates() {
        let icons = vec![
            icon("outline/archive.svg", "outline:archive"),
            icon("solid/archive.svg", "solid:archive"),
            icon("outline/archive .svg", "outline:archive"),
        ];

        match check_unique_ids(&icons) {
            Err(SpriteError::DuplicateId { id, first, second }) => {
                assert_eq!(id, "outline:archive");
                assert_eq!(first, PathBuf::from("outline/archive.svg"));
                assert_eq!(second, PathBuf::from("outline/archive .svg"));
            }
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_check_unique_ids_accepts_distinct() {
        let icons = vec![
            icon("outline/archive.svg", "outline:archive"),
            icon("solid/archive.svg", "solid:archive"),
        ];

        assert!(check_unique_ids(&icons).is_ok());
    }
}
