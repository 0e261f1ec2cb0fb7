pub mod build;
pub mod check;
pub mod completions;
pub mod init;
pub mod list;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, Overrides};
use crate::error::{Result, SpriteError};

/// svgsprite - SVG symbol sprite and icon name generator
#[derive(Parser, Debug)]
#[command(name = "svgsprite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the sprite sheet and icon name declarations
    Build(build::BuildArgs),

    /// Verify generated files are up to date without writing them
    Check(check::CheckArgs),

    /// List icon names found in the sprites directory
    List(list::ListArgs),

    /// Create a sprites.yaml manifest with the default paths
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Commands {
    /// Whether this command compiles the sprite sheet.
    pub fn compiles_sprites(&self) -> bool {
        matches!(self, Commands::Build(_) | Commands::Check(_))
    }
}

/// Path options shared by commands that run the generator.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Manifest file (default: ./sprites.yaml when present)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

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

impl ConfigArgs {
    /// Resolve the run configuration from the working directory.
    pub fn resolve(&self) -> Result<Config> {
        let cwd = std::env::current_dir().map_err(|e| SpriteError::Config {
            message: format!("Cannot determine working directory: {}", e),
            help: None,
        })?;
        Config::resolve(&cwd, self.config.as_deref(), self.overrides())
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            sprites_path: self.sprites_path.clone(),
            sprite_types_output_path: self.sprite_types_output_path.clone(),
            sprite_output_path: self.sprite_output_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_with_overrides() {
        let cli = Cli::try_parse_from([
            "svgsprite",
            "build",
            "--sprites",
            "icons",
            "--sprite-out",
            "public/sprites.svg",
            "--verbose",
        ])
        .unwrap();

        match cli.command {
            Commands::Build(args) => {
                assert!(args.verbose);
                assert_eq!(args.paths.sprites_path, Some(PathBuf::from("icons")));
                assert_eq!(
                    args.paths.sprite_output_path,
                    Some(PathBuf::from("public/sprites.svg"))
                );
                assert_eq!(args.paths.sprite_types_output_path, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_compiles_sprites() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().command;

        assert!(parse(&["svgsprite", "build"]).compiles_sprites());
        assert!(parse(&["svgsprite", "check"]).compiles_sprites());
        assert!(!parse(&["svgsprite", "list"]).compiles_sprites());
        assert!(!parse(&["svgsprite", "init"]).compiles_sprites());
        assert!(!parse(&["svgsprite", "completions", "bash"]).compiles_sprites());
    }
}
