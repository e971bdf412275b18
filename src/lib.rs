//! monogram - deterministic letter avatars
//!
//! Turns an identity string into a reproducible avatar: a background
//! colour hashed from the identity key, a 1–2 letter label from the
//! display name, a filled vector template, and a rasterized PNG.

pub mod assets;
pub mod avatar;
pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod output;
pub mod render;
pub mod types;

pub use assets::{AssetResolver, FileAssets, MemoryAssets};
pub use avatar::{Avatar, AvatarStore, NoStore};
pub use config::Config;
pub use error::{MonogramError, Result, Unavailable};
pub use identity::{
    background_colour, extract_glyph, hash_to_index, normalize_identity, DisplayNameProvider,
    Identity,
};
pub use render::{
    render_vector, GlyphRasterizer, RasterImage, RasterPipeline, Rasterizer, SvgRasterizer,
    TemplateStyle, VectorDescriptor,
};
pub use types::{mix_palette, Colour, Palette, PALETTE_SIZE};

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    /// A TrueType font available on the test machine, if any.
    ///
    /// `MONOGRAM_TEST_FONT` wins; otherwise common DejaVu Sans locations.
    pub fn test_font() -> Option<Vec<u8>> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(path) = std::env::var_os("MONOGRAM_TEST_FONT") {
            candidates.push(path.into());
        }
        candidates.extend(
            [
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/Library/Fonts/Arial.ttf",
            ]
            .map(PathBuf::from),
        );

        candidates.iter().find_map(|path| std::fs::read(path).ok())
    }
}
