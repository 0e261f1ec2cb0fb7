use clap::Parser;
use miette::Result;
use svgsprite::cli::{Cli, Commands};
use svgsprite::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let compiles_sprites = cli.command.compiles_sprites();

    let result = match cli.command {
        Commands::Build(args) => svgsprite::cli::build::run(args, &printer).map(|_| ()),
        Commands::Check(args) => svgsprite::cli::check::run(args, &printer),
        Commands::List(args) => svgsprite::cli::list::run(args, &printer),
        Commands::Init(args) => svgsprite::cli::init::run(args, &printer),
        Commands::Completions(args) => svgsprite::cli::completions::run(args),
    };

    if result.is_err() && compiles_sprites {
        printer.error("Failed", "sprite compilation");
    }

    result?;
    Ok(())
}
