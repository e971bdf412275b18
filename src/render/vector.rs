//! Vector template rendering.
//!
//! Both templates draw on a fixed 500×500 viewBox; the requested size only
//! sets the outer width/height. The label is 280px Noto Sans: its 0.715
//! cap-height gives 200px capitals (0.4 of the canvas), and a baseline at
//! y=350 centres them vertically.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::types::Colour;

/// Substitution point for the outer width/height.
const SIZE_SLOT: &str = "{size}";

/// Substitution point for the six-digit hex fill colour.
const FILL_SLOT: &str = "{fill}";

/// Substitution point for the glyph text.
const LETTER_SLOT: &str = "{letter}";

const SILHOUETTE_TEMPLATE: &str = r##"<?xml version="1.0" encoding="utf-8" standalone="no"?>
<svg width="{size}" height="{size}" version="1.1" viewBox="0 0 500 500" xmlns="http://www.w3.org/2000/svg">
<rect stroke="none" width="100%" height="100%" fill="#cccccc"></rect>
<path stroke="none" fill="#efefef" d="M341.942,356.432 c -20.705,-12.637 -28.134,-11.364 -28.134,-36.612 0,-8.837 0,-25.256 0,-40.403 11.364,-12.62 15.497,-11.049 25.107,-60.597 19.433,0 18.174,-25.248 27.34,-47.644 7.471,-18.238 1.213,-25.632 -5.08,-28.654 C 366.319,76.06 366.319,30.286 290.883,16.086 263.539,-7.351 222.278,0.606 202.725,4.517 c -19.536,3.911 -37.159,0 -37.159,0 l 3.356,31.49 c -28.608,34.332 -14.302,80.106 -18.908,106.916 -6.002,3.27 -11.416,10.809 -4.269,28.253 9.165,22.396 7.906,47.644 27.34,47.644 9.61,49.548 13.742,47.977 25.107,60.597 0,15.147 0,31.566 0,40.403 0,25.248 -8.581,25.683 -28.133,36.612 C 122.919,382.781 61.49,398.09 50.484,480.442 48.468,495.504 134.952,511.948 256,512 377.048,511.948 463.528,495.504 461.517,480.442 450.511,398.09 388.519,384.847 341.942,356.432 Z"></path>
<text x="50%" y="350" style="font-weight:normal;font-size:280px;font-family:'Noto Sans',sans-serif;text-anchor:middle;fill:#{fill}">{letter}</text>
</svg>"##;

const LETTER_TEMPLATE: &str = r##"<?xml version="1.0" encoding="utf-8" standalone="no"?>
<svg width="{size}" height="{size}" version="1.1" viewBox="0 0 500 500" xmlns="http://www.w3.org/2000/svg">
<rect stroke="none" width="100%" height="100%" fill="#{fill}"></rect>
<text x="50%" y="350" style="font-weight:normal;font-size:280px;font-family:'Noto Sans',sans-serif;text-anchor:middle;fill:#fff">{letter}</text>
</svg>"##;

/// Which avatar template to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStyle {
    /// Neutral canvas, fixed person silhouette, label in the identity colour.
    #[default]
    Silhouette,
    /// Identity-coloured canvas with a white label.
    Letter,
}

impl TemplateStyle {
    fn template(self) -> &'static str {
        match self {
            TemplateStyle::Silhouette => SILHOUETTE_TEMPLATE,
            TemplateStyle::Letter => LETTER_TEMPLATE,
        }
    }

    /// Fill this template for one avatar.
    pub fn render(self, size: u32, fill: Colour, glyph: &str) -> VectorDescriptor {
        let markup = self
            .template()
            .replace(SIZE_SLOT, &size.to_string())
            .replace(FILL_SLOT, &fill.to_hex())
            .replace(LETTER_SLOT, &escape_text(glyph));

        VectorDescriptor {
            size,
            fill,
            glyph: glyph.to_string(),
            style: self,
            markup,
        }
    }
}

/// Render the default (silhouette) template.
pub fn render_vector(size: u32, fill: Colour, glyph: &str) -> VectorDescriptor {
    TemplateStyle::default().render(size, fill, glyph)
}

/// A filled vector template plus the parameters it was built from.
///
/// The parameters travel with the markup so a raster fallback can redraw
/// the avatar without parsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorDescriptor {
    size: u32,
    fill: Colour,
    glyph: String,
    style: TemplateStyle,
    markup: String,
}

impl VectorDescriptor {
    /// Requested output size in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Identity colour substituted into the template.
    pub fn fill(&self) -> Colour {
        self.fill
    }

    /// Label text (unescaped).
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn style(&self) -> TemplateStyle {
        self.style
    }

    /// The SVG document.
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

/// Escape XML text content.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_substitutes_all_slots() {
        let desc = render_vector(64, Colour::rgb(0, 130, 201), "AS");
        let markup = desc.markup();

        assert!(markup.contains(r#"<svg width="64" height="64""#));
        assert!(markup.contains("fill:#0082c9"));
        assert!(markup.contains(">AS</text>"));
        assert!(!markup.contains(SIZE_SLOT));
        assert!(!markup.contains(FILL_SLOT));
        assert!(!markup.contains(LETTER_SLOT));
    }

    #[test]
    fn test_viewbox_is_fixed() {
        for size in [1, 64, 512, 4096] {
            let desc = render_vector(size, Colour::WHITE, "A");
            assert!(desc.markup().contains(r#"viewBox="0 0 500 500""#));
        }
    }

    #[test]
    fn test_silhouette_background_is_neutral() {
        let desc = render_vector(64, Colour::rgb(182, 70, 157), "A");
        assert!(desc.markup().contains(r##"fill="#cccccc""##));
        assert!(desc.markup().contains(r##"fill="#efefef""##));
        assert_eq!(desc.style(), TemplateStyle::Silhouette);
    }

    #[test]
    fn test_letter_style_fills_background() {
        let desc = TemplateStyle::Letter.render(32, Colour::rgb(182, 70, 157), "Z");
        let expected = concat!(
            r#"<?xml version="1.0" encoding="utf-8" standalone="no"?>"#,
            "\n",
            r#"<svg width="32" height="32" version="1.1" viewBox="0 0 500 500" xmlns="http://www.w3.org/2000/svg">"#,
            "\n",
            r##"<rect stroke="none" width="100%" height="100%" fill="#b6469d"></rect>"##,
            "\n",
            r#"<text x="50%" y="350" style="font-weight:normal;font-size:280px;font-family:'Noto Sans',sans-serif;text-anchor:middle;fill:#fff">Z</text>"#,
            "\n",
            "</svg>"
        );
        assert_eq!(desc.markup(), expected);
    }

    #[test]
    fn test_glyph_is_escaped_in_markup_only() {
        let desc = render_vector(64, Colour::WHITE, "&<");
        assert!(desc.markup().contains(">&amp;&lt;</text>"));
        assert_eq!(desc.glyph(), "&<");
    }

    #[test]
    fn test_descriptor_keeps_parameters() {
        let fill = Colour::rgb(221, 203, 85);
        let desc = render_vector(128, fill, "?");
        assert_eq!(desc.size(), 128);
        assert_eq!(desc.fill(), fill);
        assert_eq!(desc.glyph(), "?");
    }

    #[test]
    fn test_style_deserializes_lowercase() {
        let style: TemplateStyle = serde_yaml::from_str("letter").unwrap();
        assert_eq!(style, TemplateStyle::Letter);
    }
}
