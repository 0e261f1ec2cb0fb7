//! Build command implementation.
//!
//! Scans the sprites directory and writes the sprite sheet and the icon
//! name declarations.

use clap::Args;

use crate::discovery::{discover, relative_key};
use crate::error::Result;
use crate::generate::generate_from_icons;
use crate::output::{display_path, plural, Printer};

use super::ConfigArgs;

/// Generate the sprite sheet and icon name declarations
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub paths: ConfigArgs,

    /// Print a line for every merged icon
    #[arg(long, short)]
    pub verbose: bool,
}

/// Run the generator and return the number of icons written.
pub fn run(args: BuildArgs, printer: &Printer) -> Result<usize> {
    let config = args.paths.resolve()?;

    printer.status("Scanning", &display_path(&config.sprites_path));
    let discovery = discover(&config.sprites_path)?;
    let icons = discovery.load()?;

    if args.verbose {
        for icon in &icons {
            let source = format!("({})", relative_key(&icon.relative_path));
            printer.status(
                "Merging",
                &format!("{} {}", icon.canonical_id, printer.dim(&source)),
            );
        }
    }

    let generated = generate_from_icons(&icons)?;
    generated.write(&config)?;

    printer.info("Wrote", &display_path(&config.sprite_output_path));
    printer.info("Wrote", &display_path(&config.sprite_types_output_path));
    printer.success(
        "Generated",
        &format!("sprite for {}", plural(generated.count(), "SVG", "SVGs")),
    );

    Ok(generated.count())
}
