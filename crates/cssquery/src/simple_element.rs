//! Simple in-memory tree implementation of `ElementNode` used in tests and
//! quick prototypes.
//!
//! Focus:
//! - Ergonomic factory + builder for quick test tree creation
//! - Cheap handle clones (Arc identity), weak parent links
//! - Thread-safe (Arc + RwLock) for parallel query tests
//!
//! Example:
//! ```
//! use cssquery::simple_element::SimpleElementFactory;
//! use cssquery::model::ElementNode;
//!
//! // <ul id="nav"><li class="active"/><li/></ul>
//! let mut f = SimpleElementFactory::new();
//! let first = f.elem("li").attr("class", "active").build();
//! let ul = f
//!     .elem("ul")
//!     .attr("id", "nav")
//!     .child(first)
//!     .child(f.elem("li"))
//!     .build();
//!
//! assert_eq!(ul.children().len(), 2);
//! assert_eq!(ul.id().as_deref(), Some("nav"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock, Weak};

use crate::model::{ElementNode, KindId, KindRegistry};

#[derive(Debug)]
pub(crate) struct Inner {
    kind: KindId,
    tag: String,
    id: RwLock<Option<String>>, // fast path for the id attribute
    attributes: RwLock<HashMap<String, String>>,
    parent: RwLock<Option<Weak<Inner>>>,
    children: RwLock<Vec<SimpleElement>>,
}

/// A simple Arc-backed element handle.
#[derive(Clone)]
pub struct SimpleElement(pub(crate) Arc<Inner>);

impl PartialEq for SimpleElement {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for SimpleElement {}
impl std::hash::Hash for SimpleElement {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as *const Inner).hash(state)
    }
}

impl fmt::Debug for SimpleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleElement")
            .field("tag", &self.0.tag)
            .field("id", &self.0.id)
            .finish()
    }
}

impl SimpleElement {
    fn new(kind: KindId, tag: &str) -> Self {
        SimpleElement(Arc::new(Inner {
            kind,
            tag: tag.to_string(),
            id: RwLock::new(None),
            attributes: RwLock::new(HashMap::new()),
            parent: RwLock::new(None),
            children: RwLock::new(Vec::new()),
        }))
    }

    /// Element name the factory created this node under.
    pub fn tag(&self) -> &str {
        &self.0.tag
    }
}

/// Stand-in for the external element factory: owns a [`KindRegistry`] and
/// allocates one kind per distinct element name.
#[derive(Debug, Default)]
pub struct SimpleElementFactory {
    registry: KindRegistry,
    kinds: HashMap<String, KindId>,
}

impl SimpleElementFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elem(&mut self, tag: &str) -> SimpleElementBuilder {
        let Self { registry, kinds } = self;
        let kind = *kinds
            .entry(tag.to_string())
            .or_insert_with(|| registry.register(tag));
        SimpleElementBuilder::new(SimpleElement::new(kind, tag))
    }

    pub fn registry(&self) -> &KindRegistry {
        &self.registry
    }

    /// Kind this factory allocated for `tag`, if any element was created
    /// under it.
    pub fn kind_of(&self, tag: &str) -> Option<KindId> {
        self.kinds.get(tag).copied()
    }

    /// For tests that register extra kinds or aliases directly.
    pub fn registry_mut(&mut self) -> &mut KindRegistry {
        &mut self.registry
    }
}

pub struct SimpleElementBuilder {
    node: SimpleElement,
    pending_children: Vec<SimpleElement>,
}

impl SimpleElementBuilder {
    fn new(node: SimpleElement) -> Self {
        Self {
            node,
            pending_children: Vec::new(),
        }
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        if name == "id" {
            *self.node.0.id.write().unwrap() = Some(value.to_string());
        }
        self.node
            .0
            .attributes
            .write()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn id(self, value: &str) -> Self {
        self.attr("id", value)
    }

    pub fn child(mut self, child: impl Into<SimpleElementOrBuilder>) -> Self {
        match child.into() {
            SimpleElementOrBuilder::Built(n) => self.pending_children.push(n),
            SimpleElementOrBuilder::Builder(b) => self.pending_children.push(b.build()),
        }
        self
    }

    pub fn children<I: IntoIterator<Item = SimpleElementOrBuilder>>(mut self, it: I) -> Self {
        for c in it {
            match c {
                SimpleElementOrBuilder::Built(n) => self.pending_children.push(n),
                SimpleElementOrBuilder::Builder(b) => self.pending_children.push(b.build()),
            }
        }
        self
    }

    pub fn build(self) -> SimpleElement {
        // finalize relationships
        let mut children = self.node.0.children.write().unwrap();
        for c in &self.pending_children {
            *c.0.parent.write().unwrap() = Some(Arc::downgrade(&self.node.0));
        }
        children.extend(self.pending_children);
        drop(children);
        self.node
    }
}

pub enum SimpleElementOrBuilder {
    Built(SimpleElement),
    Builder(SimpleElementBuilder),
}
impl From<SimpleElement> for SimpleElementOrBuilder {
    fn from(n: SimpleElement) -> Self {
        SimpleElementOrBuilder::Built(n)
    }
}
impl From<SimpleElementBuilder> for SimpleElementOrBuilder {
    fn from(b: SimpleElementBuilder) -> Self {
        SimpleElementOrBuilder::Builder(b)
    }
}

impl ElementNode for SimpleElement {
    fn parent(&self) -> Option<Self> {
        self.0
            .parent
            .read()
            .ok()?
            .as_ref()
            .and_then(|w| w.upgrade())
            .map(SimpleElement)
    }
    fn children(&self) -> Vec<Self> {
        self.0.children.read().map(|v| v.clone()).unwrap_or_default()
    }
    fn kind(&self) -> KindId {
        self.0.kind
    }
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.read().ok()?.get(name).cloned()
    }
    fn id(&self) -> Option<String> {
        self.0.id.read().ok()?.clone()
    }
}
