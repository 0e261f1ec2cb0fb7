//! List command implementation.
//!
//! Prints the canonical id of every discovered icon to stdout, one per
//! line, in sprite order.

use std::io::{self, Write};

use clap::Args;

use crate::discovery::{canonical_id, relative_key, scan_sprites};
use crate::error::{Result, SpriteError};
use crate::output::{plural, Printer};

use super::ConfigArgs;

/// List icon names found in the sprites directory
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub paths: ConfigArgs,

    /// Also print the source file of each icon
    #[arg(long)]
    pub files: bool,
}

/// One listed icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: String,
    pub file: String,
}

/// Collect list entries without reading file contents.
pub fn entries(args: &ListArgs) -> Result<Vec<ListEntry>> {
    let config = args.paths.resolve()?;
    let paths = scan_sprites(&config.sprites_path)?;

    Ok(paths
        .iter()
        .map(|path| {
            let file = relative_key(path);
            ListEntry {
                id: canonical_id(&file),
                file,
            }
        })
        .collect())
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let entries = entries(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for entry in &entries {
        let line = if args.files {
            writeln!(out, "{}\t{}", entry.id, entry.file)
        } else {
            writeln!(out, "{}", entry.id)
        };
        line.map_err(|e| SpriteError::io("<stdout>", e))?;
    }

    printer.info("Found", &plural(entries.len(), "icon", "icons"));
    Ok(())
}
