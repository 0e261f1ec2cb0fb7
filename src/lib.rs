//! svgsprite - SVG symbol sprite generator
//!
//! A library for merging a directory of SVG icons into one sprite sheet of
//! `<symbol>` elements, together with a TypeScript module that enumerates
//! the valid icon names.

pub mod cli;
pub mod codegen;
pub mod config;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod markup;
pub mod output;
pub mod render;

pub use config::{Config, Overrides};
pub use discovery::{canonical_id, discover, DiscoveryResult, IconFile};
pub use error::{Result, SpriteError};
pub use generate::{generate, generate_from_icons, Generated};
pub use render::{merge_sprites, SpriteSheetBuilder};
