//! Query executor: seeds the compiled pipeline with a root's descendant set,
//! runs it lazily, and dedups the result preserving first-seen order.

use itertools::Itertools;
use tracing::debug;

use crate::ast::Selector;
use crate::compiler::{CompiledSelector, compile};
use crate::error::UnsupportedSelector;
use crate::model::{ElementNode, KindRegistry};
use crate::ops::Descendants;

/// Run a compiled selector against `root`'s subtree (`root` itself excluded).
///
/// Each matching node appears exactly once, in order of its first match path.
/// Duplicates arise because sibling/descendant traversals fan out
/// independently per input node; the dedup here guarantees the postcondition.
pub fn evaluate<N: ElementNode>(compiled: &CompiledSelector, root: &N) -> Vec<N> {
    let matches: Vec<N> = compiled.run(Descendants::of(root)).unique().collect();
    debug!(count = matches.len(), "selector query finished");
    matches
}

/// Compile-then-evaluate convenience: all matches under `root`.
pub fn query_selector_all<N: ElementNode>(
    root: &N,
    selector: &Selector,
    registry: &KindRegistry,
) -> Result<Vec<N>, UnsupportedSelector> {
    let compiled = compile(selector, registry)?;
    Ok(evaluate(&compiled, root))
}

/// First match under `root`, short-circuiting the walk.
pub fn query_selector<N: ElementNode>(
    root: &N,
    selector: &Selector,
    registry: &KindRegistry,
) -> Result<Option<N>, UnsupportedSelector> {
    let compiled = compile(selector, registry)?;
    Ok(compiled.run(Descendants::of(root)).next())
}
