//! Palette listing.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::Palette;

/// List the avatar palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Print bare hex values only
    #[arg(long)]
    pub plain: bool,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palette = Palette::shared();

    for line in format_palette(palette, args.plain) {
        println!("{}", line);
    }
    printer.status("Listed", &format!("{} colours", palette.len()));
    Ok(())
}

fn format_palette(palette: &Palette, plain: bool) -> Vec<String> {
    palette
        .iter()
        .enumerate()
        .map(|(i, colour)| {
            if plain {
                colour.to_hex()
            } else {
                format!("{:>2}  {}  rgb({}, {}, {})", i, colour, colour.r, colour.g, colour.b)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_palette() {
        let lines = format_palette(&Palette::avatar(), false);
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], " 0  #b6469d  rgb(182, 70, 157)");
        assert_eq!(lines[12], "12  #0082c9  rgb(0, 130, 201)");
    }

    #[test]
    fn test_format_palette_plain() {
        let lines = format_palette(&Palette::avatar(), true);
        assert_eq!(lines[6], "ddcb55");
    }
}
