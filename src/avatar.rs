//! The avatar facade.
//!
//! Ties an identity to its generated letter avatar and to any stored
//! avatar an external store holds for it. A request moves through
//! `Requested → VectorBuilt → Rasterized → Decoded`, or stops at
//! `Unavailable` at any step; nothing here returns a hard error.

use crate::assets::AssetResolver;
use crate::error::{Result, Unavailable};
use crate::identity::{background_colour, extract_glyph, DisplayNameProvider};
use crate::render::{RasterImage, RasterPipeline, TemplateStyle, VectorDescriptor};
use crate::types::Colour;

/// Source of previously stored (uploaded or pre-rendered) avatars.
pub trait AvatarStore {
    /// Encoded image bytes for `size`, or `None` when nothing is stored.
    fn fetch(&self, size: u32) -> Result<Option<Vec<u8>>>;
}

/// A store that never has anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStore;

impl AvatarStore for NoStore {
    fn fetch(&self, _size: u32) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }
}

/// Avatar for one identity.
pub struct Avatar<P, A, S = NoStore> {
    identity: P,
    assets: A,
    store: S,
    style: TemplateStyle,
    pipeline: RasterPipeline,
}

impl<P: DisplayNameProvider, A: AssetResolver> Avatar<P, A, NoStore> {
    pub fn new(identity: P, assets: A) -> Self {
        Self {
            identity,
            assets,
            store: NoStore,
            style: TemplateStyle::default(),
            pipeline: RasterPipeline::new(),
        }
    }
}

impl<P: DisplayNameProvider, A: AssetResolver, S: AvatarStore> Avatar<P, A, S> {
    /// Attach the store `get` reads stored avatars from.
    pub fn with_store<T: AvatarStore>(self, store: T) -> Avatar<P, A, T> {
        Avatar {
            identity: self.identity,
            assets: self.assets,
            store,
            style: self.style,
            pipeline: self.pipeline,
        }
    }

    pub fn with_style(mut self, style: TemplateStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the rasterizers used by `generate`.
    pub fn with_pipeline(mut self, pipeline: RasterPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn display_name(&self) -> &str {
        self.identity.display_name()
    }

    /// The 1–2 character label.
    pub fn glyph(&self) -> String {
        extract_glyph(self.identity.display_name())
    }

    /// Identity colour picked from the palette.
    pub fn background_colour(&self) -> Colour {
        background_colour(self.identity.identity_key())
    }

    /// Fill the vector template for `size`.
    pub fn vector(&self, size: u32) -> VectorDescriptor {
        self.style.render(size.max(1), self.background_colour(), &self.glyph())
    }

    /// Generate the default letter avatar.
    pub fn generate(&self, size: u32) -> std::result::Result<RasterImage, Unavailable> {
        let size = size.max(1);
        log::debug!("avatar {:?}: requested {}px", self.display_name(), size);

        let descriptor = self.vector(size);
        log::debug!("avatar {:?}: vector built", self.display_name());

        let image = self.pipeline.rasterize(&descriptor, &self.assets)?;
        log::debug!("avatar {:?}: rasterized", self.display_name());
        Ok(image)
    }

    /// Generate the default letter avatar as PNG bytes.
    pub fn generate_png(&self, size: u32) -> std::result::Result<Vec<u8>, Unavailable> {
        self.generate(size)?.to_png()
    }

    /// Fetch and decode the stored avatar for `size`.
    ///
    /// A missing stored avatar, a failing store and undecodable bytes all
    /// come back as `Unavailable`.
    pub fn get(&self, size: u32) -> std::result::Result<RasterImage, Unavailable> {
        let size = size.max(1);

        let bytes = match self.store.fetch(size) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Err(Unavailable::NotFound),
            Err(e) => {
                log::warn!("avatar store failed for {:?}: {}", self.display_name(), e);
                return Err(Unavailable::Store(e.to_string()));
            }
        };

        let image = RasterImage::decode(&bytes).map_err(|e| {
            log::warn!("stored avatar for {:?} is unreadable: {}", self.display_name(), e);
            e
        })?;
        log::debug!("avatar {:?}: decoded stored {}px", self.display_name(), size);
        Ok(image)
    }
}
