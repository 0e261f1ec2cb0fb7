//! Check command implementation.
//!
//! Runs the generator in memory and fails when either output on disk
//! differs from what `build` would write.

use clap::Args;

use crate::error::{Result, SpriteError};
use crate::generate::generate;
use crate::output::{display_path, plural, Printer};

use super::ConfigArgs;

/// Verify generated files are up to date without writing them
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub paths: ConfigArgs,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let config = args.paths.resolve()?;

    printer.status("Checking", &display_path(&config.sprites_path));
    let generated = generate(&config)?;

    let stale = generated.stale_outputs(&config);
    if !stale.is_empty() {
        for path in &stale {
            printer.warning("Stale", &display_path(path));
        }
        return Err(SpriteError::Stale { paths: stale });
    }

    printer.success(
        "Fresh",
        &format!("sprite for {}", plural(generated.count(), "SVG", "SVGs")),
    );
    Ok(())
}
