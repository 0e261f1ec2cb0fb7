//! Renders a declaration tree to TypeScript source text.

use std::fmt::Write;

use super::ast::{Expr, Modifier, PropertySignature, Statement, TypeNode};

/// Formatting printer for declaration trees.
///
/// Output uses LF line endings, one statement per line, multi-line arrays
/// and object types with trailing separators, and always ends with a newline.
#[derive(Debug, Clone)]
pub struct Printer {
    indent: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    /// Printer with two-space indentation.
    pub fn new() -> Self {
        Self::with_indent(2)
    }

    pub fn with_indent(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
        }
    }

    /// Render a list of statements.
    pub fn print(&self, statements: &[Statement]) -> String {
        let mut out = String::new();
        for statement in statements {
            self.statement(statement, &mut out);
            out.push('\n');
        }
        out
    }

    fn statement(&self, statement: &Statement, out: &mut String) {
        match statement {
            Statement::Const {
                modifiers,
                name,
                init,
            } => {
                modifiers_prefix(modifiers, out);
                out.push_str("const ");
                out.push_str(name);
                out.push_str(" = ");
                self.expr(init, 0, out);
            }
            Statement::TypeAlias {
                modifiers,
                name,
                ty,
            } => {
                modifiers_prefix(modifiers, out);
                out.push_str("type ");
                out.push_str(name);
                out.push_str(" = ");
                self.ty(ty, 0, out);
            }
        }
        out.push(';');
    }

    fn expr(&self, expr: &Expr, depth: usize, out: &mut String) {
        match expr {
            Expr::StringLiteral(value) => string_literal(value, out),
            Expr::Array(items) => {
                if items.is_empty() {
                    out.push_str("[]");
                    return;
                }
                out.push_str("[\n");
                for item in items {
                    self.pad(depth + 1, out);
                    self.expr(item, depth + 1, out);
                    out.push_str(",\n");
                }
                self.pad(depth, out);
                out.push(']');
            }
            Expr::AsConst(inner) => {
                self.expr(inner, depth, out);
                out.push_str(" as const");
            }
        }
    }

    fn ty(&self, ty: &TypeNode, depth: usize, out: &mut String) {
        match ty {
            TypeNode::Reference(name) => out.push_str(name),
            TypeNode::Qualified(parts) => out.push_str(&parts.join(".")),
            TypeNode::TypeQuery(name) => {
                out.push_str("typeof ");
                out.push_str(name);
            }
            TypeNode::IndexedAccess { object, index } => {
                self.operand(object, depth, out);
                out.push('[');
                self.ty(index, depth, out);
                out.push(']');
            }
            TypeNode::Keyword(keyword) => out.push_str(keyword.as_str()),
            TypeNode::Literal(value) => string_literal(value, out),
            TypeNode::Object(members) => self.object(members, depth, out),
            TypeNode::Intersection(parts) => self.joined(parts, " & ", depth, out),
            TypeNode::Union(parts) => {
                if parts.is_empty() {
                    out.push_str("never");
                } else {
                    self.joined(parts, " | ", depth, out);
                }
            }
        }
    }

    fn joined(&self, parts: &[TypeNode], separator: &str, depth: usize, out: &mut String) {
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            self.operand(part, depth, out);
        }
    }

    /// Print a type that appears as an operand, parenthesizing compound types.
    fn operand(&self, ty: &TypeNode, depth: usize, out: &mut String) {
        let compound = match ty {
            TypeNode::Union(parts) | TypeNode::Intersection(parts) => parts.len() > 1,
            _ => false,
        };
        if compound {
            out.push('(');
            self.ty(ty, depth, out);
            out.push(')');
        } else {
            self.ty(ty, depth, out);
        }
    }

    fn object(&self, members: &[PropertySignature], depth: usize, out: &mut String) {
        if members.is_empty() {
            out.push_str("{}");
            return;
        }
        out.push_str("{\n");
        for member in members {
            self.pad(depth + 1, out);
            property_name(&member.name, out);
            if member.optional {
                out.push('?');
            }
            out.push_str(": ");
            self.ty(&member.ty, depth + 1, out);
            out.push_str(";\n");
        }
        self.pad(depth, out);
        out.push('}');
    }

    fn pad(&self, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str(&self.indent);
        }
    }
}

fn modifiers_prefix(modifiers: &[Modifier], out: &mut String) {
    for modifier in modifiers {
        match modifier {
            Modifier::Export => out.push_str("export "),
        }
    }
}

fn property_name(name: &str, out: &mut String) {
    if is_identifier(name) {
        out.push_str(name);
    } else {
        string_literal(name, out);
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Write a double-quoted string literal.
fn string_literal(value: &str, out: &mut String) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
