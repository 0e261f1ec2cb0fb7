//! Sprite generation pipeline.
//!
//! Discovery, loading, merging and declaration output all happen in memory;
//! nothing touches the output paths until both artifacts are ready.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::codegen;
use crate::config::Config;
use crate::discovery::{check_unique_ids, discover, IconFile};
use crate::error::{Result, SpriteError};
use crate::render::merge_sprites;

/// Both generated artifacts for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Canonical ids in sprite order.
    pub ids: Vec<String>,
    /// Sprite sheet markup.
    pub sprite: String,
    /// TypeScript declaration module.
    pub declarations: String,
}

/// Run discovery and produce both artifacts without writing them.
pub fn generate(config: &Config) -> Result<Generated> {
    let discovery = discover(&config.sprites_path)?;
    let icons = discovery.load()?;
    generate_from_icons(&icons)
}

/// Produce both artifacts from already loaded icons.
pub fn generate_from_icons(icons: &[IconFile]) -> Result<Generated> {
    check_unique_ids(icons)?;

    let sprite = merge_sprites(icons)?;
    let ids: Vec<String> = icons.iter().map(|i| i.canonical_id.clone()).collect();
    let declarations = codegen::sprite_props(&ids);

    Ok(Generated {
        ids,
        sprite,
        declarations,
    })
}

impl Generated {
    /// Number of icons in the sprite sheet.
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Write both artifacts to the configured destinations.
    ///
    /// Both files are staged next to their destinations first and only
    /// renamed into place once both are fully written. If the second rename
    /// fails, the sprite sheet is put back the way it was, so either both
    /// outputs change or neither does.
    pub fn write(&self, config: &Config) -> Result<()> {
        let sprite = stage(&config.sprite_output_path, self.sprite.as_bytes())?;
        let declarations = stage(
            &config.sprite_types_output_path,
            self.declarations.as_bytes(),
        )?;

        let previous = Backup::capture(&config.sprite_output_path)?;
        persist(sprite, &config.sprite_output_path)?;

        if let Err(e) = persist(declarations, &config.sprite_types_output_path) {
            previous.restore(&config.sprite_output_path)?;
            return Err(e);
        }

        Ok(())
    }

    /// Output paths whose current contents differ from this run.
    pub fn stale_outputs(&self, config: &Config) -> Vec<PathBuf> {
        [
            (&config.sprite_output_path, &self.sprite),
            (&config.sprite_types_output_path, &self.declarations),
        ]
        .into_iter()
        .filter(|(path, expected)| {
            fs::read_to_string(path).map_or(true, |current| current != **expected)
        })
        .map(|(path, _)| path.clone())
        .collect()
    }

    /// Check that both outputs on disk match this run.
    pub fn is_up_to_date(&self, config: &Config) -> bool {
        self.stale_outputs(config).is_empty()
    }
}

/// Write `contents` to a temporary file in `dest`'s directory.
///
/// An existing destination keeps its permissions. New files get the same
/// mode `File::create` would give them.
fn stage(dest: &Path, contents: &[u8]) -> Result<NamedTempFile> {
    if dest.is_dir() {
        return Err(SpriteError::Io {
            path: dest.to_path_buf(),
            message: "Output path is a directory".to_string(),
        });
    }

    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(|e| SpriteError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut file = temp_file_in(dir).map_err(|e| SpriteError::Io {
        path: dest.to_path_buf(),
        message: format!("Failed to create temporary file: {}", e),
    })?;
    file.write_all(contents)
        .and_then(|_| file.flush())
        .map_err(|e| SpriteError::Io {
            path: dest.to_path_buf(),
            message: format!("Failed to write output: {}", e),
        })?;

    if let Ok(existing) = fs::metadata(dest) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| SpriteError::Io {
                path: dest.to_path_buf(),
                message: format!("Failed to copy permissions: {}", e),
            })?;
    }

    Ok(file)
}

/// Move a staged file onto its destination.
fn persist(file: NamedTempFile, dest: &Path) -> Result<()> {
    file.persist(dest).map_err(|e| SpriteError::Io {
        path: dest.to_path_buf(),
        message: format!("Failed to write output: {}", e.error),
    })?;
    Ok(())
}

/// Temporary file whose creation mode is masked by the umask.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

/// Contents of an output file from before a write, or `None` if it did
/// not exist.
struct Backup(Option<Vec<u8>>);

impl Backup {
    fn capture(path: &Path) -> Result<Self> {
        match fs::read(path) {
            Ok(bytes) => Ok(Backup(Some(bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Backup(None)),
            Err(e) => Err(SpriteError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to read existing output: {}", e),
            }),
        }
    }

    fn restore(self, path: &Path) -> Result<()> {
        match self.0 {
            Some(bytes) => persist(stage(path, &bytes)?, path),
            None => fs::remove_file(path).map_err(|e| SpriteError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to remove output: {}", e),
            }),
        }
    }
}
