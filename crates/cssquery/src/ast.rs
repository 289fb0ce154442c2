//! Selector AST (types only; an external parser produces these).
//!
//! The enumerations are closed on purpose: the compiler matches them
//! exhaustively and routes every variant it does not implement to
//! `UnsupportedSelector` instead of falling through silently.

/// Top-level selector as produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Compound(CompoundSelector),
    Complex(ComplexSelector),
    /// Comma-separated selector list. Not implemented by this engine.
    List(Vec<Selector>),
}

/// Conjunction of simple selectors with no combinator between them,
/// e.g. `li.red`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    pub parts: Vec<SimpleSelector>,
}

/// Chain of compound selectors joined by combinators, e.g. `ul > li.red`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    pub steps: Vec<ComplexStep>,
}

/// One step of a complex selector. `combinator` is the relation to the
/// *next* step; the final step carries `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexStep {
    pub compound: CompoundSelector,
    pub combinator: Option<Combinator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Whitespace.
    Descendant,
    /// `>`
    Child,
    /// `+`
    AdjacentSibling,
    /// `~`
    GeneralSibling,
    /// `>>>` — not implemented by this engine.
    Deep,
    /// `||` — not implemented by this engine.
    Column,
    /// `|` — not implemented by this engine.
    Namespace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// `*`
    Universal,
    /// `li` — resolved against the kind registry at compile time.
    Type(String),
    /// `#value`
    Id(String),
    /// `.value`
    Class(String),
    /// `[name]`, `[name=value]`, ...
    Attribute { name: String, op: AttrOp },
    PseudoClass(PseudoClass),
    /// `::name` — not implemented by this engine.
    PseudoElement(String),
    /// `prefix|inner` — not implemented by this engine.
    Namespaced {
        prefix: String,
        inner: Box<SimpleSelector>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrOp {
    /// `[name]`
    Exists,
    /// `[name=value]`
    Exact(String),
    /// `[name~=value]`
    Includes(String),
    /// `[name|=value]`
    DashMatch(String),
    /// `[name^=value]`
    Prefix(String),
    /// `[name$=value]`
    Suffix(String),
    /// `[name*=value]`
    Substring(String),
    /// `[name!=value]` — not implemented by this engine.
    NotMatch(String),
    /// Attribute value in list — not implemented by this engine.
    InList(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoClass {
    FirstChild,
    LastChild,
    OnlyChild,
    Empty,
    /// `:nth-child(an+b)`, 0-based step/offset pair. `a` must be non-zero.
    NthChild(i32, i32),
    /// `:nth-last-child(an+b)` — not implemented by this engine.
    NthLastChild(i32, i32),
    /// `:not(...)` — not implemented by this engine.
    Not(Box<Selector>),
    /// Any other pseudo-class (`:hover`, `:first-of-type`, ...) — not
    /// implemented by this engine, but still counted for specificity.
    Other(String),
}
