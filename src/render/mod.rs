//! Rendering module for monogram.
//!
//! Fills the vector template for an avatar and turns it into pixels,
//! either through the SVG engine or by drawing glyph outlines directly.

mod bitmap;
mod glyph;
mod raster;
mod svg;
mod vector;

pub use bitmap::RasterImage;
pub use glyph::{text_origin, GlyphRasterizer, FONT_SCALE};
pub use raster::{RasterPipeline, Rasterizer};
pub use svg::SvgRasterizer;
pub use vector::{render_vector, TemplateStyle, VectorDescriptor};
