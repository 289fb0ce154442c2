use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Opaque identifier for a concrete element kind.
///
/// The engine never interprets kind ids; it only compares them against the
/// sets a [`KindRegistry`] resolves from type-selector names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindId(u32);

/// Maps element names to the set of concrete kinds registered under them.
///
/// Populated by the external element factory before any query runs. One name
/// may cover several kinds (a factory may register both its document and its
/// fragment type under the same element name). Looking up a name that was
/// never registered is a no-match, not an error.
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    next: u32,
    by_name: HashMap<String, HashSet<KindId>>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh kind and register it under `name`.
    pub fn register(&mut self, name: &str) -> KindId {
        let id = KindId(self.next);
        self.next += 1;
        self.by_name.entry(name.to_string()).or_default().insert(id);
        id
    }

    /// Register an existing kind under an additional name.
    pub fn register_kind(&mut self, name: &str, kind: KindId) {
        self.by_name.entry(name.to_string()).or_default().insert(kind);
    }

    pub fn kinds_for(&self, name: &str) -> Option<&HashSet<KindId>> {
        self.by_name.get(name)
    }
}

/// Minimal capability set the engine needs from a document node.
///
/// Implementations are handles: cloning must be cheap and clones must compare
/// equal to the node they were cloned from. The backing tree is built once
/// before any query runs and is read-only from the engine's perspective, so
/// `children` must return the same ordered view for the duration of a query.
/// A malformed tree (a node listed as its own ancestor) is a precondition
/// violation this layer does not detect.
pub trait ElementNode: Clone + Eq + Hash + fmt::Debug {
    fn parent(&self) -> Option<Self>;
    fn children(&self) -> Vec<Self>;
    fn kind(&self) -> KindId;
    fn attribute(&self, name: &str) -> Option<String>;

    /// Fast path for the `id` attribute.
    fn id(&self) -> Option<String> {
        self.attribute("id")
    }
}
