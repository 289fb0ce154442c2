//! Cascade-priority weight of a selector, derived from the AST.

use crate::ast::{CompoundSelector, Selector, SimpleSelector};

/// Specificity counts: ids, classes (+ attributes + pseudo-classes), and
/// tags (+ pseudo-elements). Universal selectors count nothing.
///
/// Counting is total: it also works on selectors the compiler rejects, so a
/// cascade layer can order rules before deciding which ones it can evaluate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub tags: u32,
}

impl Specificity {
    pub fn of(selector: &Selector) -> Self {
        let mut acc = Specificity::default();
        tally(selector, &mut acc);
        acc
    }

    /// Reduce the counts to one ordered integer:
    /// `(ids << 12) | (classes << 8) | (tags << 4)`.
    ///
    /// Each count must stay below 16, otherwise the shifted fields overlap
    /// and corrupt the ordering; callers must not feed selectors with 16 or
    /// more selectors of one bucket without widening the encoding.
    pub fn value(self) -> u32 {
        (self.ids << 12) | (self.classes << 8) | (self.tags << 4)
    }
}

fn tally(selector: &Selector, acc: &mut Specificity) {
    match selector {
        Selector::Compound(compound) => tally_compound(compound, acc),
        Selector::Complex(complex) => {
            for step in &complex.steps {
                tally_compound(&step.compound, acc);
            }
        }
        Selector::List(items) => {
            // A list has no single specificity in CSS; tallying the union
            // keeps this total. Callers needing per-item weights tally items.
            for item in items {
                tally(item, acc);
            }
        }
    }
}

fn tally_compound(compound: &CompoundSelector, acc: &mut Specificity) {
    for part in &compound.parts {
        tally_simple(part, acc);
    }
}

fn tally_simple(part: &SimpleSelector, acc: &mut Specificity) {
    match part {
        SimpleSelector::Universal => {}
        SimpleSelector::Type(_) => acc.tags += 1,
        SimpleSelector::Id(_) => acc.ids += 1,
        SimpleSelector::Class(_) => acc.classes += 1,
        SimpleSelector::Attribute { .. } => acc.classes += 1,
        // Every pseudo-class counts once, `:not()` included; its argument
        // does not contribute.
        SimpleSelector::PseudoClass(_) => acc.classes += 1,
        SimpleSelector::PseudoElement(_) => acc.tags += 1,
        SimpleSelector::Namespaced { inner, .. } => tally_simple(inner, acc),
    }
}
