//! Rasterizer seam and the primary/fallback pipeline.

use crate::assets::AssetResolver;
use crate::error::Unavailable;

use super::{GlyphRasterizer, RasterImage, SvgRasterizer, VectorDescriptor};

/// Turns a vector descriptor into pixels, or reports why it cannot.
pub trait Rasterizer {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    fn rasterize(
        &self,
        descriptor: &VectorDescriptor,
        assets: &dyn AssetResolver,
    ) -> Result<RasterImage, Unavailable>;
}

/// Primary rasterizer with an optional fallback.
///
/// The fallback runs only when the primary reports `Unavailable`; when
/// both do, the fallback's reason is returned.
pub struct RasterPipeline {
    primary: Box<dyn Rasterizer>,
    fallback: Option<Box<dyn Rasterizer>>,
}

impl RasterPipeline {
    /// SVG rendering first, direct glyph drawing as fallback.
    pub fn new() -> Self {
        Self {
            primary: Box::new(SvgRasterizer::new()),
            fallback: Some(Box::new(GlyphRasterizer::new())),
        }
    }

    /// A pipeline with a single rasterizer and no fallback.
    pub fn single(rasterizer: impl Rasterizer + 'static) -> Self {
        Self {
            primary: Box::new(rasterizer),
            fallback: None,
        }
    }

    /// Set the rasterizer used when the primary is unavailable.
    pub fn with_fallback(mut self, rasterizer: impl Rasterizer + 'static) -> Self {
        self.fallback = Some(Box::new(rasterizer));
        self
    }

    pub fn rasterize(
        &self,
        descriptor: &VectorDescriptor,
        assets: &dyn AssetResolver,
    ) -> Result<RasterImage, Unavailable> {
        let reason = match self.primary.rasterize(descriptor, assets) {
            Ok(image) => return Ok(image),
            Err(reason) => reason,
        };

        let Some(fallback) = &self.fallback else {
            log::debug!("{} rasterizer unavailable: {}", self.primary.name(), reason);
            return Err(reason);
        };

        log::debug!(
            "{} rasterizer unavailable ({}), falling back to {}",
            self.primary.name(),
            reason,
            fallback.name()
        );
        fallback.rasterize(descriptor, assets)
    }
}

impl Default for RasterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
