//! Sprite sheet merger.
//!
//! Each icon's root `<svg>` element becomes a `<symbol>` carrying the same
//! attributes and children, with its `id` set to the icon's canonical id.
//! All symbols are collected under one holder `<svg>` element.

use std::path::Path;

use crate::discovery::IconFile;
use crate::error::{Result, SpriteError};
use crate::markup::{Document, NodeId};

/// Namespace declared on the holder element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Incrementally builds a sprite sheet document.
#[derive(Debug, Clone)]
pub struct SpriteSheetBuilder {
    doc: Document,
    container: NodeId,
    ids: Vec<String>,
}

impl Default for SpriteSheetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteSheetBuilder {
    /// Create a builder with an empty holder `<svg>`.
    pub fn new() -> Self {
        let mut doc = Document::new();
        let container = doc.create_element("svg");
        if let Some(svg) = doc.element_mut(container) {
            svg.set_attribute("xmlns", SVG_NAMESPACE);
        }

        Self {
            doc,
            container,
            ids: Vec::new(),
        }
    }

    /// Number of symbols added so far.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Symbol ids in the order they were added.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Add a loaded icon as a new symbol.
    pub fn add(&mut self, icon: &IconFile) -> Result<NodeId> {
        self.add_source(&icon.relative_path, &icon.canonical_id, &icon.raw_contents)
    }

    /// Parse `source` and append its root `<svg>` as a symbol with `id`.
    ///
    /// `path` is only used for error reporting.
    pub fn add_source(&mut self, path: &Path, id: &str, source: &str) -> Result<NodeId> {
        let fragment = self
            .doc
            .parse_fragment(source)
            .map_err(|e| SpriteError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
                help: Some("Check that the file is well-formed SVG markup".to_string()),
            })?;

        let svg = self
            .doc
            .find_element(fragment, "svg")
            .ok_or_else(|| SpriteError::Parse {
                path: path.to_path_buf(),
                message: "no root <svg> element".to_string(),
                help: Some("Each sprite file must contain an <svg> element".to_string()),
            })?;

        let symbol = self.replace_with_symbol(svg);
        if let Some(element) = self.doc.element_mut(symbol) {
            element.set_attribute("id", id);
        }

        self.doc.append_child(self.container, symbol);
        self.ids.push(id.to_string());

        Ok(symbol)
    }

    /// Serialize the holder element and all symbols.
    pub fn to_markup(&self) -> String {
        self.doc.to_markup(self.container)
    }

    /// Swap `existing` for a `<symbol>` with copies of its attributes and children.
    fn replace_with_symbol(&mut self, existing: NodeId) -> NodeId {
        let symbol = self.doc.create_element("symbol");

        let attributes = self
            .doc
            .element(existing)
            .map(|e| e.attributes.clone())
            .unwrap_or_default();
        if let Some(element) = self.doc.element_mut(symbol) {
            element.attributes = attributes;
        }

        for child in self.doc.children(existing).to_vec() {
            let copy = self.doc.deep_clone(child);
            self.doc.append_child(symbol, copy);
        }

        self.doc.replace(existing, symbol);
        symbol
    }
}

/// Merge icons into sprite sheet markup, in the given order.
pub fn merge_sprites(icons: &[IconFile]) -> Result<String> {
    let mut builder = SpriteSheetBuilder::new();
    for icon in icons {
        builder.add(icon)?;
    }
    Ok(builder.to_markup())
}
