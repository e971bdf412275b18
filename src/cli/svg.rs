//! Vector template output.

use clap::Args;

use crate::assets::MemoryAssets;
use crate::avatar::Avatar;
use crate::config::Config;
use crate::error::Result;
use crate::render::TemplateStyle;

use super::IdentityArgs;

/// Print the vector template filled for an identity
#[derive(Args, Debug)]
pub struct SvgArgs {
    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Output size in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,

    /// Template style
    #[arg(long, value_enum)]
    pub style: Option<TemplateStyle>,
}

pub fn run(args: SvgArgs, config: &Config) -> Result<()> {
    // Filling the template needs no font.
    let avatar = Avatar::new(args.identity.identity(), MemoryAssets::empty())
        .with_style(args.style.unwrap_or(config.style));
    let descriptor = avatar.vector(args.size.unwrap_or(config.size));

    println!("{}", descriptor.markup());
    Ok(())
}
