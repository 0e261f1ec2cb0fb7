//! TypeScript declaration generation.
//!
//! Declarations are built as an [`ast`] tree and rendered by [`Printer`],
//! so the output stays syntactically valid whatever characters the sprite
//! ids contain.

pub mod ast;
mod printer;

use std::collections::HashSet;

pub use printer::Printer;

use ast::{Expr, Keyword, Modifier, PropertySignature, Statement, TypeNode};

/// Name of the exported id list constant.
pub const NAMES_CONST: &str = "spriteNames";
/// Name of the (module-private) id union type.
pub const NAME_TYPE: &str = "SpriteName";
/// Name of the exported props type.
pub const PROPS_TYPE: &str = "SpriteProps";

/// Build the declaration statements for a list of sprite ids.
///
/// Produces, in order:
///
/// ```text
/// export const spriteNames = ["..."] as const;
/// type SpriteName = typeof spriteNames[number];
/// export type SpriteProps = { name: SpriteName } & JSX.IntrinsicElements["svg"];
/// ```
///
/// Duplicate ids are dropped, keeping the first occurrence.
pub fn sprite_props_statements<S: AsRef<str>>(ids: &[S]) -> Vec<Statement> {
    let mut seen: HashSet<&str> = HashSet::new();
    let literals = ids
        .iter()
        .map(|id| id.as_ref())
        .filter(|id| seen.insert(*id))
        .map(|id| Expr::StringLiteral(id.to_string()))
        .collect();

    let names = Statement::Const {
        modifiers: vec![Modifier::Export],
        name: NAMES_CONST.to_string(),
        init: Expr::AsConst(Box::new(Expr::Array(literals))),
    };

    let name_type = Statement::TypeAlias {
        modifiers: vec![],
        name: NAME_TYPE.to_string(),
        ty: TypeNode::indexed(
            TypeNode::TypeQuery(NAMES_CONST.to_string()),
            TypeNode::Keyword(Keyword::Number),
        ),
    };

    let props = Statement::TypeAlias {
        modifiers: vec![Modifier::Export],
        name: PROPS_TYPE.to_string(),
        ty: TypeNode::Intersection(vec![
            TypeNode::Object(vec![PropertySignature::required(
                "name",
                TypeNode::reference(NAME_TYPE),
            )]),
            TypeNode::indexed(
                TypeNode::Qualified(vec!["JSX".to_string(), "IntrinsicElements".to_string()]),
                TypeNode::Literal("svg".to_string()),
            ),
        ]),
    };

    vec![names, name_type, props]
}

/// Render the sprite props declaration module for `ids`.
pub fn sprite_props<S: AsRef<str>>(ids: &[S]) -> String {
    Printer::new().print(&sprite_props_statements(ids))
}
