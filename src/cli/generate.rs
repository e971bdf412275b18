//! Generate command implementation.
//!
//! Renders one identity's letter avatar and writes it as PNG.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::assets::FileAssets;
use crate::avatar::Avatar;
use crate::config::Config;
use crate::error::{MonogramError, Result};
use crate::identity::{normalize_identity, DisplayNameProvider};
use crate::output::{display_path, Printer};
use crate::render::TemplateStyle;

use super::IdentityArgs;

/// Render an avatar to a PNG file
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Output size in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,

    /// Template style
    #[arg(long, value_enum)]
    pub style: Option<TemplateStyle>,

    /// Label font (TrueType/OpenType)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Output file (default: <output dir>/<identity digest>-<size>.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, config: &Config, printer: &Printer) -> Result<()> {
    let identity = args.identity.identity();
    let size = args.size.unwrap_or(config.size);
    let style = args.style.unwrap_or(config.style);
    let assets = match &args.font {
        Some(font) => FileAssets::new(font),
        None => config.assets()?,
    };

    let path = args.output.clone().unwrap_or_else(|| {
        config
            .output
            .join(default_file_name(identity.identity_key(), size))
    });

    let avatar = Avatar::new(identity, assets).with_style(style);
    let image = avatar.generate(size)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MonogramError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    image.save(&path)?;

    printer.status(
        "Generated",
        &format!(
            "{} {}",
            display_path(&path),
            printer.dim(&format!("({}x{}, {:?})", size, size, avatar.glyph()))
        ),
    );
    Ok(())
}

/// Stable file name for an identity's avatar at one size.
fn default_file_name(identity_key: &str, size: u32) -> String {
    format!("{}-{}.png", normalize_identity(identity_key), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            default_file_name("alice", 64),
            "6384e2b2184bcbf58eccf10ca7a6563c-64.png"
        );
    }

    #[test]
    fn test_missing_font_fails_with_config_error() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            identity: IdentityArgs {
                name: "Alice Smith".to_string(),
                key: None,
            },
            size: Some(32),
            style: None,
            font: None,
            output: Some(dir.path().join("alice.png")),
        };

        let err = run(args, &Config::default(), &Printer::plain()).unwrap_err();
        assert!(matches!(err, MonogramError::Config { .. }));
        assert!(!dir.path().join("alice.png").exists());
    }

    #[test]
    fn test_unreadable_font_is_render_error() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            identity: IdentityArgs {
                name: "Alice Smith".to_string(),
                key: None,
            },
            size: Some(32),
            style: None,
            font: Some(dir.path().join("missing.ttf")),
            output: Some(dir.path().join("alice.png")),
        };

        let err = run(args, &Config::default(), &Printer::plain()).unwrap_err();
        assert!(matches!(err, MonogramError::Render { .. }));
    }
}
