//! Compiles a selector AST into a pipeline of typed stages.
//!
//! Compilation is a pure reduction: AST in, one stage sequence out. The
//! resulting [`CompiledSelector`] is stateless and re-entrant; it may be run
//! against different root contexts without recompilation.

use tracing::trace;

use crate::ast::{
    AttrOp, Combinator, ComplexSelector, CompoundSelector, PseudoClass, Selector, SimpleSelector,
};
use crate::error::UnsupportedSelector;
use crate::model::{ElementNode, KindRegistry};
use crate::ops::{MatchOp, TraversalOp};

/// One pipeline stage. Filters narrow the current context set; traversals
/// replace it by expanding along a tree relation. Keeping the two apart (as
/// opposed to one opaque closure chain) keeps evaluation order auditable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineStage {
    Filter(MatchOp),
    Traverse(TraversalOp),
}

/// A compiled selector: a finite stage sequence executed left-to-right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledSelector {
    stages: Vec<PipelineStage>,
}

impl CompiledSelector {
    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    /// Run the pipeline over an arbitrary context set, lazily. No dedup is
    /// applied here; traversal fan-out may emit a node more than once.
    pub fn run<'a, N>(
        &'a self,
        context: impl Iterator<Item = N> + 'a,
    ) -> Box<dyn Iterator<Item = N> + 'a>
    where
        N: ElementNode + 'a,
    {
        let mut stream: Box<dyn Iterator<Item = N> + 'a> = Box::new(context);
        for stage in &self.stages {
            stream = match stage {
                PipelineStage::Filter(op) => Box::new(stream.filter(move |n| op.matches(n))),
                PipelineStage::Traverse(op) => Box::new(stream.flat_map(move |n| op.expand(&n))),
            };
        }
        stream
    }
}

/// Compile `selector`, resolving type names against `registry`.
///
/// Fails with [`UnsupportedSelector`] on any construct this engine does not
/// implement. It never degrades to "match everything" or "match nothing",
/// except for the two documented no-match cases (unregistered type name,
/// empty attribute-operator operand).
pub fn compile(
    selector: &Selector,
    registry: &KindRegistry,
) -> Result<CompiledSelector, UnsupportedSelector> {
    let mut stages = Vec::new();
    compile_selector(selector, registry, &mut stages)?;
    trace!(stage_count = stages.len(), "selector compiled");
    Ok(CompiledSelector { stages })
}

fn compile_selector(
    selector: &Selector,
    registry: &KindRegistry,
    out: &mut Vec<PipelineStage>,
) -> Result<(), UnsupportedSelector> {
    match selector {
        Selector::Compound(compound) => compile_compound(compound, registry, out),
        Selector::Complex(complex) => compile_complex(complex, registry, out),
        Selector::List(_) => Err(UnsupportedSelector::new("selector list")),
    }
}

fn compile_compound(
    compound: &CompoundSelector,
    registry: &KindRegistry,
    out: &mut Vec<PipelineStage>,
) -> Result<(), UnsupportedSelector> {
    for part in &compound.parts {
        let op = compile_simple(part, registry)?;
        trace!(?op, "compiled simple selector");
        out.push(PipelineStage::Filter(op));
    }
    Ok(())
}

fn compile_complex(
    complex: &ComplexSelector,
    registry: &KindRegistry,
    out: &mut Vec<PipelineStage>,
) -> Result<(), UnsupportedSelector> {
    for step in &complex.steps {
        compile_compound(&step.compound, registry, out)?;
        if let Some(combinator) = &step.combinator {
            out.push(PipelineStage::Traverse(compile_combinator(combinator)?));
        }
    }
    Ok(())
}

fn compile_combinator(combinator: &Combinator) -> Result<TraversalOp, UnsupportedSelector> {
    match combinator {
        Combinator::Descendant => Ok(TraversalOp::Descendant),
        Combinator::Child => Ok(TraversalOp::Child),
        Combinator::AdjacentSibling => Ok(TraversalOp::Adjacent),
        Combinator::GeneralSibling => Ok(TraversalOp::GeneralSibling),
        Combinator::Deep => Err(UnsupportedSelector::new("deep combinator (>>>)")),
        Combinator::Column => Err(UnsupportedSelector::new("column combinator (||)")),
        Combinator::Namespace => Err(UnsupportedSelector::new("namespace combinator (|)")),
    }
}

fn compile_simple(
    part: &SimpleSelector,
    registry: &KindRegistry,
) -> Result<MatchOp, UnsupportedSelector> {
    match part {
        SimpleSelector::Universal => Ok(MatchOp::Universal),
        SimpleSelector::Type(name) => Ok(MatchOp::type_named(name, registry)),
        SimpleSelector::Id(value) => Ok(MatchOp::Id(value.clone())),
        SimpleSelector::Class(value) => Ok(MatchOp::class(value.clone())),
        SimpleSelector::Attribute { name, op } => compile_attr(name, op),
        SimpleSelector::PseudoClass(pseudo) => compile_pseudo_class(pseudo),
        SimpleSelector::PseudoElement(name) => {
            Err(UnsupportedSelector::new(format!("pseudo-element ::{name}")))
        }
        SimpleSelector::Namespaced { prefix, .. } => Err(UnsupportedSelector::new(format!(
            "namespace prefix {prefix}|"
        ))),
    }
}

fn compile_attr(name: &str, op: &AttrOp) -> Result<MatchOp, UnsupportedSelector> {
    match op {
        AttrOp::Exists => Ok(MatchOp::AttrExists(name.to_string())),
        AttrOp::Exact(value) => Ok(MatchOp::AttrExact {
            name: name.to_string(),
            value: value.clone(),
        }),
        AttrOp::Includes(value) => Ok(MatchOp::AttrIncludes {
            name: name.to_string(),
            value: value.clone(),
        }),
        AttrOp::DashMatch(value) => Ok(MatchOp::attr_dash_match(name, value.clone())),
        AttrOp::Prefix(value) => Ok(MatchOp::attr_prefix(name, value.clone())),
        AttrOp::Suffix(value) => Ok(MatchOp::attr_suffix(name, value.clone())),
        AttrOp::Substring(value) => Ok(MatchOp::attr_substring(name, value.clone())),
        AttrOp::NotMatch(_) => Err(UnsupportedSelector::new("attribute not-match operator [!=]")),
        AttrOp::InList(_) => Err(UnsupportedSelector::new("attribute list operator")),
    }
}

fn compile_pseudo_class(pseudo: &PseudoClass) -> Result<MatchOp, UnsupportedSelector> {
    match pseudo {
        PseudoClass::FirstChild => Ok(MatchOp::FirstChild),
        PseudoClass::LastChild => Ok(MatchOp::LastChild),
        PseudoClass::OnlyChild => Ok(MatchOp::OnlyChild),
        PseudoClass::Empty => Ok(MatchOp::Empty),
        PseudoClass::NthChild(a, b) => Ok(MatchOp::nth_child(*a, *b)),
        PseudoClass::NthLastChild(..) => Err(UnsupportedSelector::new(":nth-last-child()")),
        PseudoClass::Not(_) => Err(UnsupportedSelector::new(":not()")),
        PseudoClass::Other(name) => Err(UnsupportedSelector::new(format!(":{name}"))),
    }
}
