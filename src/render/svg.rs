//! Primary rasterizer: the vector template rendered through resvg.
//!
//! Compiled only with the `svg` feature. Without it the rasterizer still
//! exists but always reports the engine as missing.

use crate::assets::AssetResolver;
use crate::error::Unavailable;

use super::{RasterImage, Rasterizer, VectorDescriptor};

/// Renders the SVG markup of a descriptor with the configured label font.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRasterizer;

impl SvgRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Whether the vector engine was compiled in.
    pub fn is_available() -> bool {
        cfg!(feature = "svg")
    }
}

impl Rasterizer for SvgRasterizer {
    fn name(&self) -> &'static str {
        "svg"
    }

    #[cfg(feature = "svg")]
    fn rasterize(
        &self,
        descriptor: &VectorDescriptor,
        assets: &dyn AssetResolver,
    ) -> Result<RasterImage, Unavailable> {
        use tiny_skia::{Pixmap, Transform};

        let font = crate::assets::load_font(assets)?;

        let mut options = usvg::Options::default();
        let family = {
            let db = options.fontdb_mut();
            db.load_font_data(font);
            let family = db
                .faces()
                .next()
                .and_then(|face| face.families.first())
                .map(|(name, _)| name.clone())
                .ok_or(Unavailable::InvalidFont)?;
            // The template asks for Noto Sans; whatever was loaded stands in for it.
            db.set_serif_family(family.clone());
            db.set_sans_serif_family(family.clone());
            family
        };
        options.font_family = family;

        let tree = usvg::Tree::from_str(descriptor.markup(), &options)
            .map_err(|e| Unavailable::Markup(e.to_string()))?;

        let size = descriptor.size();
        let mut pixmap = Pixmap::new(size, size).ok_or(Unavailable::Pixmap { size })?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        log::debug!("svg: rendered {}x{} avatar", size, size);
        Ok(RasterImage::from_pixmap(&pixmap))
    }

    #[cfg(not(feature = "svg"))]
    fn rasterize(
        &self,
        _descriptor: &VectorDescriptor,
        _assets: &dyn AssetResolver,
    ) -> Result<RasterImage, Unavailable> {
        Err(Unavailable::EngineMissing)
    }
}
