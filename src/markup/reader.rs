//! Builds a [`Document`] fragment from markup text using quick-xml events.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::tree::{Attribute, Document, Element, NodeId, NodeKind};
use super::MarkupError;

impl Document {
    /// Parse `source` into a new detached fragment node and return it.
    ///
    /// XML declarations, processing instructions and doctypes are dropped.
    /// Everything else (elements, text, CDATA, comments) is kept in order.
    pub fn parse_fragment(&mut self, source: &str) -> Result<NodeId, MarkupError> {
        let fragment = self.create(NodeKind::Fragment);
        let mut reader = Reader::from_str(source);
        let mut open: Vec<NodeId> = vec![fragment];

        loop {
            let position = reader.buffer_position() as u64;
            let event = reader.read_event().map_err(|e| MarkupError::Syntax {
                position,
                message: e.to_string(),
            })?;

            let parent = *open.last().unwrap_or(&fragment);
            match event {
                Event::Start(start) => {
                    let element = read_element(&start, position)?;
                    let id = self.create(NodeKind::Element(element));
                    self.append_child(parent, id);
                    open.push(id);
                }
                Event::Empty(start) => {
                    let element = read_element(&start, position)?;
                    let id = self.create(NodeKind::Element(element));
                    self.append_child(parent, id);
                }
                Event::End(end) => {
                    if open.len() <= 1 {
                        return Err(MarkupError::Syntax {
                            position,
                            message: format!(
                                "unexpected closing tag </{}>",
                                String::from_utf8_lossy(end.name().as_ref())
                            ),
                        });
                    }
                    open.pop();
                }
                Event::Text(text) => {
                    let raw = utf8(text.into_inner().into_owned(), position)?;
                    let id = self.create(NodeKind::Text(raw));
                    self.append_child(parent, id);
                }
                Event::CData(cdata) => {
                    let raw = utf8(cdata.into_inner().into_owned(), position)?;
                    let id = self.create(NodeKind::CData(raw));
                    self.append_child(parent, id);
                }
                Event::Comment(comment) => {
                    let raw = utf8(comment.into_inner().into_owned(), position)?;
                    let id = self.create(NodeKind::Comment(raw));
                    self.append_child(parent, id);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if open.len() > 1 {
            let name = open
                .last()
                .and_then(|&id| self.element(id))
                .map(|e| e.name.clone())
                .unwrap_or_default();
            return Err(MarkupError::Unclosed { name });
        }

        Ok(fragment)
    }
}

fn read_element(start: &BytesStart<'_>, position: u64) -> Result<Element, MarkupError> {
    let name = utf8(start.name().as_ref().to_vec(), position)?;
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| MarkupError::Syntax {
            position,
            message: e.to_string(),
        })?;
        let key = utf8(attr.key.as_ref().to_vec(), position)?;
        let value = attr.unescape_value().map_err(|e| MarkupError::Syntax {
            position,
            message: format!("attribute {}: {}", key, e),
        })?;
        element.attributes.push(Attribute::new(key, value.into_owned()));
    }

    Ok(element)
}

fn utf8(bytes: Vec<u8>, position: u64) -> Result<String, MarkupError> {
    String::from_utf8(bytes).map_err(|e| MarkupError::Syntax {
        position,
        message: format!("invalid UTF-8: {}", e),
    })
}
