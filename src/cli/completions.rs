//! Shell completions generation.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::error::{Result, SpriteError};

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = super::Cli::command();
    let name = cmd.get_name().to_string();

    match &args.output {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| SpriteError::io(path, e))?;
            clap_complete::generate(args.shell, &mut cmd, name, &mut file);
        }
        None => clap_complete::generate(args.shell, &mut cmd, name, &mut io::stdout()),
    }

    Ok(())
}
