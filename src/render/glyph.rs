//! Fallback rasterizer: draws the label straight from font outlines.
//!
//! Used when the vector engine is unavailable. The result always has the
//! letter-avatar look: identity colour canvas, white label at 0.4× the
//! canvas size, centred on its ink bounding box.

use kurbo::{BezPath, PathEl, Rect, Shape};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{GlyphId, MetadataProvider};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::assets::{parse_font, AssetResolver};
use crate::error::Unavailable;
use crate::types::Colour;

use super::{RasterImage, Rasterizer, VectorDescriptor};

/// Label size relative to the canvas edge.
pub const FONT_SCALE: f32 = 0.4;

/// Draws glyph outlines with tiny-skia.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphRasterizer;

impl GlyphRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for GlyphRasterizer {
    fn name(&self) -> &'static str {
        "glyph"
    }

    fn rasterize(
        &self,
        descriptor: &VectorDescriptor,
        assets: &dyn AssetResolver,
    ) -> Result<RasterImage, Unavailable> {
        let font_data = assets.font()?;
        let font = parse_font(&font_data)?;

        let size = descriptor.size();
        let font_size = size as f32 * FONT_SCALE;
        let outline = layout_text(&font, descriptor.glyph(), font_size)?;
        let (x, y) = text_origin(size, size, outline.bounding_box());

        let mut pixmap = Pixmap::new(size, size).ok_or(Unavailable::Pixmap { size })?;
        let background = descriptor.fill();
        pixmap.fill(Color::from_rgba8(background.r, background.g, background.b, 255));

        if let Some(path) = to_skia_path(&outline) {
            let mut paint = Paint {
                anti_alias: true,
                ..Default::default()
            };
            let white = Colour::WHITE;
            paint.set_color_rgba8(white.r, white.g, white.b, 255);

            // Font units are y-up; the origin is the left end of the baseline.
            let transform = Transform::from_scale(1.0, -1.0).post_translate(x as f32, y as f32);
            pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }

        log::debug!(
            "glyph: drew {:?} at ({}, {}) on {}x{} canvas",
            descriptor.glyph(),
            x,
            y,
            size,
            size
        );
        Ok(RasterImage::from_pixmap(&pixmap))
    }
}

/// Baseline origin that centres text on a canvas.
///
/// Horizontally the ink's right edge is centred; vertically the baseline
/// sits half the ink height below the middle, since text rises from it.
/// `bounds` is in y-up coordinates relative to the baseline origin.
pub fn text_origin(canvas_width: u32, canvas_height: u32, bounds: Rect) -> (i32, i32) {
    let text_width = bounds.x1.abs();
    let text_height = bounds.y1.abs();

    let x = (f64::from(canvas_width) - text_width) / 2.0;
    let y = (f64::from(canvas_height) + text_height) / 2.0;
    (x as i32, y as i32)
}

/// Lay out `text` on one baseline, left to right, as a single outline.
fn layout_text(
    font: &skrifa::FontRef<'_>,
    text: &str,
    font_size: f32,
) -> Result<BezPath, Unavailable> {
    let size = Size::new(font_size);
    let location = LocationRef::default();
    let charmap = font.charmap();
    let metrics = font.glyph_metrics(size, location);
    let outlines = font.outline_glyphs();

    let mut path = BezPath::new();
    let mut pen_x = 0.0f32;

    for c in text.chars() {
        let glyph_id = charmap.map(c).unwrap_or(GlyphId::NOTDEF);

        if let Some(glyph) = outlines.get(glyph_id) {
            let mut pen = PathPen {
                path: &mut path,
                offset_x: pen_x,
            };
            glyph
                .draw(DrawSettings::unhinted(size, location), &mut pen)
                .map_err(|_| Unavailable::InvalidFont)?;
        }

        pen_x += metrics.advance_width(glyph_id).unwrap_or(0.0);
    }

    Ok(path)
}

/// Convert a kurbo outline to a tiny-skia path; `None` when it is empty.
fn to_skia_path(outline: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for element in outline.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(ctrl, end) => {
                builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
            }
            PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                end.x as f32,
                end.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

/// Collects skrifa outline commands into a kurbo path, shifted along the
/// baseline.
struct PathPen<'a> {
    path: &'a mut BezPath,
    offset_x: f32,
}

impl PathPen<'_> {
    fn point(&self, x: f32, y: f32) -> (f64, f64) {
        (f64::from(x + self.offset_x), f64::from(y))
    }
}

impl OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (c, p) = (self.point(cx0, cy0), self.point(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (c0, c1, p) = (self.point(cx0, cy0), self.point(cx1, cy1), self.point(x, y));
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
