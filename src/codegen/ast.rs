//! Declaration tree for generated TypeScript modules.
//!
//! Only the constructs the sprite declarations need are modelled. The tree
//! carries no formatting; see [`super::Printer`].

/// Statement-level modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Export,
}

/// Built-in keyword types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Number,
    String,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Number => "number",
            Keyword::String => "string",
        }
    }
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `const name = init;`
    Const {
        modifiers: Vec<Modifier>,
        name: String,
        init: Expr,
    },
    /// `type name = ty;`
    TypeAlias {
        modifiers: Vec<Modifier>,
        name: String,
        ty: TypeNode,
    },
}

/// Value expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    StringLiteral(String),
    Array(Vec<Expr>),
    /// `expr as const`
    AsConst(Box<Expr>),
}

/// Type expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    /// A plain type name, e.g. `SpriteName`.
    Reference(String),
    /// A dotted name, e.g. `JSX.IntrinsicElements`.
    Qualified(Vec<String>),
    /// `typeof name`
    TypeQuery(String),
    /// `object[index]`
    IndexedAccess {
        object: Box<TypeNode>,
        index: Box<TypeNode>,
    },
    Keyword(Keyword),
    /// A string literal type, e.g. `"svg"`.
    Literal(String),
    /// `{ name: Type; ... }`
    Object(Vec<PropertySignature>),
    Intersection(Vec<TypeNode>),
    Union(Vec<TypeNode>),
}

/// A member of an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySignature {
    pub name: String,
    pub optional: bool,
    pub ty: TypeNode,
}

impl PropertySignature {
    pub fn required(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            optional: false,
            ty,
        }
    }
}

impl TypeNode {
    pub fn reference(name: impl Into<String>) -> Self {
        TypeNode::Reference(name.into())
    }

    pub fn indexed(object: TypeNode, index: TypeNode) -> Self {
        TypeNode::IndexedAccess {
            object: Box::new(object),
            index: Box::new(index),
        }
    }
}
