//! File system scanner for discovering SVG icons.
//!
//! Recursively walks the sprites directory and returns every `.svg` file
//! as a path relative to that directory. Hidden files and directories
//! (names starting with `.`) are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, SpriteError};

/// Extension (without the dot) of files picked up by the scanner.
pub const SPRITE_EXTENSION: &str = "svg";

/// Scan `root` recursively for SVG files.
///
/// Returned paths are relative to `root` and sorted by their `/`-joined
/// form, so the order is the same on every run and platform. An empty
/// directory yields an empty list. A missing root or an unreadable entry
/// is an error.
pub fn scan_sprites(root: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(root).map_err(|e| SpriteError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(SpriteError::io(root, "not a directory"));
    }

    let mut found: Vec<(String, PathBuf)> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            SpriteError::io(path, e)
        })?;

        if !entry.file_type().is_file() || !is_sprite(entry.path()) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        found.push((relative_key(&relative), relative));
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found.into_iter().map(|(_, path)| path).collect())
}

/// Check whether a path names an SVG file.
pub fn is_sprite(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == SPRITE_EXTENSION)
}

/// Check whether a walk entry is a dotfile or dot-directory.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Join the components of a relative path with `/`.
pub fn relative_key(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
