//! Minimal owned markup tree for SVG merging.
//!
//! Parsing is driven by quick-xml events; nodes are stored in an arena
//! owned by [`Document`] and serialized back with [`Document::to_markup`].
//!
//! ```ignore
//! use svgsprite::markup::Document;
//!
//! let mut doc = Document::new();
//! let fragment = doc.parse_fragment(r#"<svg viewBox="0 0 20 20"/>"#)?;
//! let svg = doc.find_element(fragment, "svg").unwrap();
//! println!("{}", doc.to_markup(svg));
//! ```

mod reader;
mod tree;
mod writer;

use thiserror::Error;

pub use tree::{Attribute, Document, Element, NodeId, NodeKind};

/// Errors raised while reading markup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("malformed markup at byte {position}: {message}")]
    Syntax { position: u64, message: String },

    #[error("element <{name}> is never closed")]
    Unclosed { name: String },
}
