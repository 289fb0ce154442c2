//! Primitive operation library: the fixed catalog of tree operations the
//! compiler assembles pipelines from.
//!
//! Two stage families exist. Predicate ops ([`MatchOp`]) narrow an incoming
//! node stream without traversing; they are pure and order-preserving, and
//! composing several over the same stream intersects their match sets.
//! Traversal ops ([`TraversalOp`]) relocate context along a tree relation and
//! may emit duplicates across different input nodes; the executor dedups at
//! the end.

use std::collections::HashSet;

use smallvec::{SmallVec, smallvec};

use crate::model::{ElementNode, KindId, KindRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOp {
    /// `*` — keep everything.
    Universal,
    /// Keep nodes whose concrete kind is in the resolved set.
    Kind(HashSet<KindId>),
    /// Keep nothing. Produced for unregistered type names and empty
    /// attribute-operator operands; a no-match, not an error.
    Nothing,
    /// Keep nodes whose `id` attribute equals the value exactly.
    Id(String),
    AttrExists(String),
    AttrExact { name: String, value: String },
    AttrIncludes { name: String, value: String },
    AttrDashMatch { name: String, value: String },
    AttrPrefix { name: String, value: String },
    AttrSuffix { name: String, value: String },
    AttrSubstring { name: String, value: String },
    FirstChild,
    LastChild,
    OnlyChild,
    Empty,
    NthChild { a: i32, b: i32 },
}

impl MatchOp {
    /// Type selector, resolved against the registry when the op is built.
    /// An unregistered name yields [`MatchOp::Nothing`].
    pub fn type_named(name: &str, registry: &KindRegistry) -> Self {
        match registry.kinds_for(name) {
            Some(kinds) => MatchOp::Kind(kinds.clone()),
            None => MatchOp::Nothing,
        }
    }

    /// `.class` is attribute-includes on the `class` attribute.
    pub fn class(value: impl Into<String>) -> Self {
        MatchOp::AttrIncludes {
            name: "class".into(),
            value: value.into(),
        }
    }

    pub fn attr_dash_match(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::non_empty_operand(name, value, |name, value| MatchOp::AttrDashMatch {
            name,
            value,
        })
    }

    pub fn attr_prefix(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::non_empty_operand(name, value, |name, value| MatchOp::AttrPrefix {
            name,
            value,
        })
    }

    pub fn attr_suffix(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::non_empty_operand(name, value, |name, value| MatchOp::AttrSuffix {
            name,
            value,
        })
    }

    pub fn attr_substring(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::non_empty_operand(name, value, |name, value| MatchOp::AttrSubstring {
            name,
            value,
        })
    }

    /// # Panics
    ///
    /// Panics when `a == 0`; a zero step is a programming error in the
    /// caller, not a selector that matches nothing.
    pub fn nth_child(a: i32, b: i32) -> Self {
        assert!(a != 0, "nth-child step must be non-zero");
        MatchOp::NthChild { a, b }
    }

    fn non_empty_operand(
        name: impl Into<String>,
        value: impl Into<String>,
        build: impl FnOnce(String, String) -> Self,
    ) -> Self {
        let value = value.into();
        if value.is_empty() {
            MatchOp::Nothing
        } else {
            build(name.into(), value)
        }
    }

    pub fn matches<N: ElementNode>(&self, node: &N) -> bool {
        match self {
            MatchOp::Universal => true,
            MatchOp::Nothing => false,
            MatchOp::Kind(kinds) => kinds.contains(&node.kind()),
            MatchOp::Id(id) => node.id().as_deref() == Some(id.as_str()),
            MatchOp::AttrExists(name) => node.attribute(name).is_some(),
            MatchOp::AttrExact { name, value } => {
                node.attribute(name).as_deref() == Some(value.as_str())
            }
            MatchOp::AttrIncludes { name, value } => attr_split_contains(node, name, ' ', value),
            MatchOp::AttrDashMatch { name, value } => attr_split_contains(node, name, '-', value),
            MatchOp::AttrPrefix { name, value } => {
                node.attribute(name).is_some_and(|v| v.starts_with(value.as_str()))
            }
            MatchOp::AttrSuffix { name, value } => {
                node.attribute(name).is_some_and(|v| v.ends_with(value.as_str()))
            }
            MatchOp::AttrSubstring { name, value } => {
                node.attribute(name).is_some_and(|v| v.contains(value.as_str()))
            }
            MatchOp::FirstChild => match node.parent() {
                None => true,
                Some(p) => p.children().first().is_some_and(|c| c == node),
            },
            MatchOp::LastChild => match node.parent() {
                None => true,
                Some(p) => p.children().last().is_some_and(|c| c == node),
            },
            MatchOp::OnlyChild => match node.parent() {
                None => true,
                Some(p) => p.children().len() == 1,
            },
            MatchOp::Empty => node.children().is_empty(),
            MatchOp::NthChild { a, b } => nth_child_matches(node, *a, *b),
        }
    }
}

fn attr_split_contains<N: ElementNode>(node: &N, name: &str, sep: char, value: &str) -> bool {
    node.attribute(name)
        .is_some_and(|v| v.split(sep).any(|piece| piece == value))
}

/// Legacy nth-child formula: the matched 0-based positions are
/// `{a*i + b : 0 <= i < childCount / a}`. This deliberately diverges from
/// standard CSS `an+b` (which is 1-based and unbounded by `childCount / a`);
/// for negative `a` the bound is non-positive and nothing matches.
fn nth_child_matches<N: ElementNode>(node: &N, a: i32, b: i32) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    let children = parent.children();
    let Some(index) = children.iter().position(|c| c == node) else {
        return false;
    };
    let count = children.len() as i32;
    let index = index as i32;
    (0..count / a).any(|i| a * i + b == index)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOp {
    /// `>` — direct children, in child order, per input node.
    Child,
    /// Whitespace — all descendants in depth-first pre-order, per input node.
    Descendant,
    /// `+` — at most the immediately-following sibling, per input node.
    Adjacent,
    /// `~` — all following siblings in order, per input node.
    GeneralSibling,
}

impl TraversalOp {
    pub fn expand<'n, N: ElementNode + 'n>(&self, node: &N) -> Box<dyn Iterator<Item = N> + 'n> {
        match self {
            TraversalOp::Child => Box::new(node.children().into_iter()),
            TraversalOp::Descendant => Box::new(Descendants::of(node)),
            TraversalOp::Adjacent => Box::new(following_siblings(node).take(1)),
            TraversalOp::GeneralSibling => Box::new(following_siblings(node)),
        }
    }
}

fn following_siblings<N: ElementNode>(node: &N) -> std::vec::IntoIter<N> {
    let siblings = match node.parent() {
        Some(parent) => {
            let children = parent.children();
            match children.iter().position(|c| c == node) {
                Some(i) => children[i + 1..].to_vec(),
                None => Vec::new(),
            }
        }
        None => Vec::new(),
    };
    siblings.into_iter()
}

/// Streaming depth-first pre-order walk of a subtree, the root excluded.
///
/// Doubles as the executor's seed iterator and as the descendant
/// combinator's per-node expansion; the tree is never materialized beyond
/// one child list per open level.
pub struct Descendants<N: ElementNode> {
    stack: SmallVec<[std::vec::IntoIter<N>; 8]>,
}

impl<N: ElementNode> Descendants<N> {
    pub fn of(root: &N) -> Self {
        Self {
            stack: smallvec![root.children().into_iter()],
        }
    }
}

impl<N: ElementNode> Iterator for Descendants<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        while let Some(top) = self.stack.last_mut() {
            if let Some(node) = top.next() {
                let children = node.children();
                if !children.is_empty() {
                    self.stack.push(children.into_iter());
                }
                return Some(node);
            }
            self.stack.pop();
        }
        None
    }
}
