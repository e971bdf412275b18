use std::path::Path;

use clap::Parser;
use log::LevelFilter;
use miette::Result;
use monogram::cli::{Cli, Commands};
use monogram::output::Printer;
use monogram::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let printer = Printer::new();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(Path::new("."))?,
    };

    match cli.command {
        Commands::Generate(args) => monogram::cli::generate::run(args, &config, &printer)?,
        Commands::Svg(args) => monogram::cli::svg::run(args, &config)?,
        Commands::Palette(args) => monogram::cli::palette::run(args, &printer)?,
        Commands::Hash(args) => monogram::cli::hash::run(args)?,
        Commands::Completions(args) => monogram::cli::completions::run(args)?,
    }

    Ok(())
}
