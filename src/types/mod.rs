//! Core domain types for monogram.
//!
//! - `Colour` - opaque RGB colour values
//! - `Palette` - the fixed 18-colour avatar cycle

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::{mix_palette, Palette, BLUE, PALETTE_SIZE, RED, STEPS, YELLOW};
