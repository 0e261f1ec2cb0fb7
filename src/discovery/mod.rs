//! Icon discovery and loading.
//!
//! Finds every `.svg` file under the sprites directory and reads it into
//! an [`IconFile`] with its canonical id.
//!
//! # Example
//!
//! ```ignore
//! use svgsprite::discovery::discover;
//!
//! let result = discover("./app/sprites")?;
//! println!("Found {} icons", result.len());
//!
//! let icons = result.load()?;
//! ```

mod loader;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{canonical_id, check_unique_ids, load_icon, load_icons, IconFile};
pub use scanner::{is_sprite, relative_key, scan_sprites, SPRITE_EXTENSION};

/// Result of scanning a sprites directory.
#[derive(Debug, Clone)]
pub struct DiscoveryResult {
    /// The sprites root directory.
    pub root: PathBuf,

    /// Discovered files, relative to `root`, in processing order.
    pub paths: Vec<PathBuf>,
}

impl DiscoveryResult {
    /// Number of discovered files.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Read every discovered file.
    pub fn load(&self) -> Result<Vec<IconFile>> {
        load_icons(&self.root, &self.paths)
    }
}

/// Discover SVG icons under `root`.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let paths = scan_sprites(&root)?;

    Ok(DiscoveryResult { root, paths })
}
