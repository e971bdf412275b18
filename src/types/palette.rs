//! The fixed avatar palette.
//!
//! Eighteen colours cycling red → yellow → blue → red, each leg built by
//! linear interpolation from one anchor toward the next.

use std::sync::OnceLock;

use super::Colour;

/// Palette anchor: red.
pub const RED: Colour = Colour::rgb(182, 70, 157);

/// Palette anchor: yellow.
pub const YELLOW: Colour = Colour::rgb(221, 203, 85);

/// Palette anchor: blue.
pub const BLUE: Colour = Colour::rgb(0, 130, 201);

/// Interpolation steps per leg of the cycle.
pub const STEPS: usize = 6;

/// Number of colours in the avatar palette (3 anchors × 6 steps).
pub const PALETTE_SIZE: usize = STEPS * 3;

/// Interpolate `steps` colours from `from` toward `to`.
///
/// Element 0 is exactly `from`; `to` itself is never reached. Channels are
/// truncated, never rounded.
pub fn mix_palette(steps: usize, from: Colour, to: Colour) -> Vec<Colour> {
    if steps == 0 {
        return Vec::new();
    }

    let delta = |a: u8, b: u8| (f64::from(b) - f64::from(a)) / steps as f64;
    let (dr, dg, db) = (delta(from.r, to.r), delta(from.g, to.g), delta(from.b, to.b));
    let channel = |start: u8, step: f64, i: usize| (f64::from(start) + step * i as f64) as u8;

    let mut colours = Vec::with_capacity(steps);
    colours.push(from);
    for i in 1..steps {
        colours.push(Colour::rgb(
            channel(from.r, dr, i),
            channel(from.g, dg, i),
            channel(from.b, db, i),
        ));
    }
    colours
}

/// The ordered, index-addressable avatar palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Build the 18-colour avatar palette from the three anchors.
    pub fn avatar() -> Self {
        let mut colours = Vec::with_capacity(PALETTE_SIZE);
        colours.extend(mix_palette(STEPS, RED, YELLOW));
        colours.extend(mix_palette(STEPS, YELLOW, BLUE));
        colours.extend(mix_palette(STEPS, BLUE, RED));
        Self { colours }
    }

    /// Process-wide avatar palette, built on first use.
    pub fn shared() -> &'static Palette {
        static PALETTE: OnceLock<Palette> = OnceLock::new();
        PALETTE.get_or_init(Palette::avatar)
    }

    /// Get a colour by index.
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Iterate colours in palette order.
    pub fn iter(&self) -> impl Iterator<Item = Colour> + '_ {
        self.colours.iter().copied()
    }
}
