pub mod completions;
pub mod generate;
pub mod hash;
pub mod palette;
pub mod svg;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::identity::Identity;

/// monogram - deterministic letter avatars
#[derive(Parser, Debug)]
#[command(name = "monogram")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./monogram.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an avatar to a PNG file
    Generate(generate::GenerateArgs),

    /// Print the vector template filled for an identity
    Svg(svg::SvgArgs),

    /// List the avatar palette
    Palette(palette::PaletteArgs),

    /// Show how an identity key maps onto the palette
    Hash(hash::HashArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Who the avatar is for.
#[derive(Args, Debug, Clone)]
pub struct IdentityArgs {
    /// Display name the label is taken from
    pub name: String,

    /// Stable identity key for the colour (default: the display name)
    #[arg(long)]
    pub key: Option<String>,
}

impl IdentityArgs {
    pub fn identity(&self) -> Identity {
        match &self.key {
            Some(key) => Identity::with_key(&self.name, key),
            None => Identity::new(&self.name),
        }
    }
}
