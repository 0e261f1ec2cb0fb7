//! Init command implementation.
//!
//! Writes a `sprites.yaml` manifest with the default paths, or the paths
//! given on the command line.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, Overrides, MANIFEST_FILENAME};
use crate::discovery::scan_sprites;
use crate::error::{Result, SpriteError};
use crate::output::{display_path, plural, Printer};

/// Create a sprites.yaml manifest with the default paths
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the manifest in (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing sprites.yaml
    #[arg(long)]
    pub force: bool,

    /// Directory scanned for *.svg files
    #[arg(long = "sprites", value_name = "DIR")]
    pub sprites_path: Option<PathBuf>,

    /// Output path for the TypeScript declarations
    #[arg(long = "types-out", value_name = "FILE")]
    pub sprite_types_output_path: Option<PathBuf>,

    /// Output path for the sprite sheet
    #[arg(long = "sprite-out", value_name = "FILE")]
    pub sprite_output_path: Option<PathBuf>,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(SpriteError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let config = Config::default().with_overrides(Overrides {
        sprites_path: args.sprites_path,
        sprite_types_output_path: args.sprite_types_output_path,
        sprite_output_path: args.sprite_output_path,
    });

    fs::create_dir_all(&args.path).map_err(|e| SpriteError::io(&args.path, e))?;
    fs::write(&manifest_path, config.to_yaml()?).map_err(|e| SpriteError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    // Paths in the manifest are relative to the manifest's directory.
    let sprites_dir = args.path.join(&config.sprites_path);
    match scan_sprites(&sprites_dir) {
        Ok(found) => printer.info(
            "Discovered",
            &format!(
                "{} in {}",
                plural(found.len(), "icon", "icons"),
                display_path(&sprites_dir)
            ),
        ),
        Err(_) => printer.warning(
            "Missing",
            &format!("{} does not exist yet", display_path(&sprites_dir)),
        ),
    }

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn init_args(path: &Path, force: bool) -> InitArgs {
        InitArgs {
            path: path.to_path_buf(),
            force,
            sprites_path: None,
            sprite_types_output_path: None,
            sprite_output_path: None,
        }
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        run(init_args(dir.path(), false), &Printer::new()).unwrap();

        let manifest_path = dir.path().join(MANIFEST_FILENAME);
        let loaded = Config::load(&manifest_path).unwrap();
        assert_eq!(loaded.sprites_path, dir.path().join("./app/sprites"));
        assert_eq!(loaded.sprite_output_path, dir.path().join("./app/sprites.svg"));
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "spritesPath: icons\n").unwrap();

        let result = run(init_args(dir.path(), false), &Printer::new());

        assert!(result.is_err());
        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(content, "spritesPath: icons\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "spritesPath: icons\n").unwrap();

        run(init_args(dir.path(), true), &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("spriteTypesOutputPath: ./app/SpriteProps.ts"));
    }

    #[test]
    fn test_init_with_custom_paths() {
        let dir = tempdir().unwrap();
        let mut args = init_args(dir.path(), false);
        args.sprites_path = Some(PathBuf::from("assets/icons"));

        run(args, &Printer::new()).unwrap();

        let loaded = Config::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(loaded.sprites_path, dir.path().join("assets/icons"));
    }
}
