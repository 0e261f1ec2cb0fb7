//! Generator configuration.
//!
//! Three paths drive a run: the directory scanned for icons and the two
//! output files. Values come from built-in defaults, an optional
//! `sprites.yaml` manifest, and command-line overrides, in that order.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpriteError};

/// The name of the manifest file looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "sprites.yaml";

pub const DEFAULT_SPRITES_PATH: &str = "./app/sprites";
pub const DEFAULT_SPRITE_TYPES_OUTPUT_PATH: &str = "./app/SpriteProps.ts";
pub const DEFAULT_SPRITE_OUTPUT_PATH: &str = "./app/sprites.svg";

/// Resolved configuration for a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory scanned for `*.svg` files.
    pub sprites_path: PathBuf,

    /// Destination of the generated TypeScript declarations.
    pub sprite_types_output_path: PathBuf,

    /// Destination of the generated sprite sheet.
    pub sprite_output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sprites_path: PathBuf::from(DEFAULT_SPRITES_PATH),
            sprite_types_output_path: PathBuf::from(DEFAULT_SPRITE_TYPES_OUTPUT_PATH),
            sprite_output_path: PathBuf::from(DEFAULT_SPRITE_OUTPUT_PATH),
        }
    }
}

/// Manifest contents; every field is optional and falls back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct ManifestFile {
    sprites_path: Option<PathBuf>,
    sprite_types_output_path: Option<PathBuf>,
    sprite_output_path: Option<PathBuf>,
}

/// Command-line overrides applied on top of the manifest.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub sprites_path: Option<PathBuf>,
    pub sprite_types_output_path: Option<PathBuf>,
    pub sprite_output_path: Option<PathBuf>,
}

impl Config {
    /// Parse a manifest from YAML, resolving relative paths against `base`.
    pub fn parse(content: &str, base: &Path) -> Result<Self> {
        let manifest: ManifestFile =
            serde_yaml::from_str(content).map_err(|e| SpriteError::Config {
                message: format!("Invalid manifest: {}", e),
                help: Some(
                    "Expected keys: spritesPath, spriteTypesOutputPath, spriteOutputPath"
                        .to_string(),
                ),
            })?;

        let defaults = Config::default();
        Ok(Self {
            sprites_path: resolve(base, manifest.sprites_path, defaults.sprites_path),
            sprite_types_output_path: resolve(
                base,
                manifest.sprite_types_output_path,
                defaults.sprite_types_output_path,
            ),
            sprite_output_path: resolve(
                base,
                manifest.sprite_output_path,
                defaults.sprite_output_path,
            ),
        })
    }

    /// Load a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SpriteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, base)
    }

    /// Resolve the configuration for a run.
    ///
    /// Uses `manifest` when given (it must exist), otherwise `sprites.yaml`
    /// in `cwd` if present, otherwise the defaults. `overrides` win last.
    pub fn resolve(cwd: &Path, manifest: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let base = match manifest {
            Some(path) => Self::load(path)?,
            None => {
                let candidate = cwd.join(MANIFEST_FILENAME);
                if candidate.is_file() {
                    Self::load(&candidate)?
                } else {
                    Self::default()
                }
            }
        };

        Ok(base.with_overrides(overrides))
    }

    /// Apply command-line overrides.
    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Self {
            sprites_path: overrides.sprites_path.unwrap_or(self.sprites_path),
            sprite_types_output_path: overrides
                .sprite_types_output_path
                .unwrap_or(self.sprite_types_output_path),
            sprite_output_path: overrides
                .sprite_output_path
                .unwrap_or(self.sprite_output_path),
        }
    }

    /// Render the configuration as manifest YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SpriteError::Config {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }
}

fn resolve(base: &Path, value: Option<PathBuf>, default: PathBuf) -> PathBuf {
    match value {
        Some(path) if path.is_relative() && !base.as_os_str().is_empty() => base.join(path),
        Some(path) => path,
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.sprites_path, PathBuf::from("./app/sprites"));
        assert_eq!(config.sprite_types_output_path, PathBuf::from("./app/SpriteProps.ts"));
        assert_eq!(config.sprite_output_path, PathBuf::from("./app/sprites.svg"));
    }

    #[test]
    fn test_parse_empty_manifest() {
        let config = Config::parse("", Path::new("")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_partial_manifest() {
        let config = Config::parse("spritesPath: icons\n", Path::new("")).unwrap();

        assert_eq!(config.sprites_path, PathBuf::from("icons"));
        assert_eq!(config.sprite_output_path, PathBuf::from("./app/sprites.svg"));
    }

    #[test]
    fn test_parse_resolves_relative_to_base() {
        let yaml = r#"
spritesPath: icons
spriteTypesOutputPath: src/SpriteProps.ts
spriteOutputPath: /srv/public/sprites.svg
"#;
        let config = Config::parse(yaml, Path::new("project")).unwrap();

        assert_eq!(config.sprites_path, PathBuf::from("project/icons"));
        assert_eq!(
            config.sprite_types_output_path,
            PathBuf::from("project/src/SpriteProps.ts")
        );
        assert_eq!(config.sprite_output_path, PathBuf::from("/srv/public/sprites.svg"));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let result = Config::parse("spritePath: typo\n", Path::new(""));

        assert!(matches!(result, Err(SpriteError::Config { .. })));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::default().with_overrides(Overrides {
            sprites_path: Some(PathBuf::from("other")),
            ..Default::default()
        });

        assert_eq!(config.sprites_path, PathBuf::from("other"));
        assert_eq!(config.sprite_output_path, PathBuf::from("./app/sprites.svg"));
    }

    #[test]
    fn test_resolve_finds_manifest_in_cwd() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "spritesPath: icons\n").unwrap();

        let config = Config::resolve(dir.path(), None, Overrides::default()).unwrap();

        assert_eq!(config.sprites_path, dir.path().join("icons"));
    }

    #[test]
    fn test_resolve_without_manifest_uses_defaults() {
        let dir = tempdir().unwrap();

        let config = Config::resolve(dir.path(), None, Overrides::default()).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_explicit_manifest_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("custom.yaml");

        let result = Config::resolve(dir.path(), Some(&missing), Overrides::default());

        assert!(matches!(result, Err(SpriteError::Io { .. })));
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = Config::default().to_yaml().unwrap();

        assert!(yaml.contains("spritesPath: ./app/sprites"));
        assert_eq!(Config::parse(&yaml, Path::new("")).unwrap(), Config::default());
    }
}
