pub mod ast;
pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod ops;
pub mod simple_element;
pub mod specificity;

pub use ast::{
    AttrOp, Combinator, ComplexSelector, ComplexStep, CompoundSelector, PseudoClass, Selector,
    SimpleSelector,
};
pub use compiler::{CompiledSelector, PipelineStage, compile};
pub use error::UnsupportedSelector;
pub use evaluator::{evaluate, query_selector, query_selector_all};
pub use model::{ElementNode, KindId, KindRegistry};
pub use ops::{Descendants, MatchOp, TraversalOp};
pub use simple_element::{SimpleElement, SimpleElementBuilder, SimpleElementFactory};
pub use specificity::Specificity;
