//! Shared helpers for building selector ASTs and sample trees.
#![allow(dead_code)]

use cssquery::simple_element::{SimpleElement, SimpleElementFactory};
use cssquery::{
    AttrOp, Combinator, ComplexSelector, ComplexStep, CompoundSelector, ElementNode, PseudoClass,
    Selector, SimpleSelector,
};

pub fn ty(name: &str) -> SimpleSelector {
    SimpleSelector::Type(name.to_string())
}

pub fn id(value: &str) -> SimpleSelector {
    SimpleSelector::Id(value.to_string())
}

pub fn class(value: &str) -> SimpleSelector {
    SimpleSelector::Class(value.to_string())
}

pub fn attr(name: &str, op: AttrOp) -> SimpleSelector {
    SimpleSelector::Attribute {
        name: name.to_string(),
        op,
    }
}

pub fn pseudo(p: PseudoClass) -> SimpleSelector {
    SimpleSelector::PseudoClass(p)
}

pub fn pseudo_element(name: &str) -> SimpleSelector {
    SimpleSelector::PseudoElement(name.to_string())
}

pub fn compound(parts: Vec<SimpleSelector>) -> Selector {
    Selector::Compound(CompoundSelector { parts })
}

/// Build a complex selector from `(compound parts, trailing combinator)`
/// steps; the last step should carry `None`.
pub fn complex(steps: Vec<(Vec<SimpleSelector>, Option<Combinator>)>) -> Selector {
    Selector::Complex(ComplexSelector {
        steps: steps
            .into_iter()
            .map(|(parts, combinator)| ComplexStep {
                compound: CompoundSelector { parts },
                combinator,
            })
            .collect(),
    })
}

/// The shared fixture tree:
///
/// ```text
/// <svg>
///   <g id="g1" class="layer one">
///     <circle id="c1" class="dot red" cx="50" foo="warning1 warning2" lang="en-GB"/>
///     <circle id="c2" class="dot"/>
///     <rect id="r1" class="red box"/>
///   </g>
///   <g id="g2" class="layer two">
///     <circle id="c3"/>
///   </g>
///   <rect id="r2"/>
/// </svg>
/// ```
pub fn sample_tree() -> (SimpleElement, SimpleElementFactory) {
    let mut f = SimpleElementFactory::new();
    let root = f
        .elem("svg")
        .child(
            f.elem("g")
                .id("g1")
                .attr("class", "layer one")
                .child(
                    f.elem("circle")
                        .id("c1")
                        .attr("class", "dot red")
                        .attr("cx", "50")
                        .attr("foo", "warning1 warning2")
                        .attr("lang", "en-GB"),
                )
                .child(f.elem("circle").id("c2").attr("class", "dot"))
                .child(f.elem("rect").id("r1").attr("class", "red box")),
        )
        .child(
            f.elem("g")
                .id("g2")
                .attr("class", "layer two")
                .child(f.elem("circle").id("c3")),
        )
        .child(f.elem("rect").id("r2"))
        .build();
    (root, f)
}

/// Ids of the matched elements, in result order. Elements without an id
/// render as `"?"`.
pub fn ids_of(matches: &[SimpleElement]) -> Vec<String> {
    matches
        .iter()
        .map(|m| m.id().unwrap_or_else(|| "?".to_string()))
        .collect()
}
