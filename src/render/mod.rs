//! Rendering module for svgsprite.
//!
//! Merges loaded icons into a single SVG sprite sheet.

mod sprite;

pub use sprite::{merge_sprites, SpriteSheetBuilder, SVG_NAMESPACE};
