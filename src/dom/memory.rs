// src/dom/memory.rs
use super::document::Document;
use super::{DomError, DomResult};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    parent: Option<NodeId>,
    text: String,
    attributes: BTreeMap<String, String>,
    value: Option<String>,
}

/// In-memory element tree implementing [`Document`].
///
/// Elements are kept in insertion order, which stands in for document order.
/// `select` elements get a value slot; nothing else does.
#[derive(Debug)]
pub struct MemoryDocument {
    elements: RefCell<Vec<Element>>,
    title: RefCell<String>,
    read_only: Cell<bool>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            elements: RefCell::new(vec![Element {
                tag: "html".into(),
                parent: None,
                text: String::new(),
                attributes: BTreeMap::new(),
                value: None,
            }]),
            title: RefCell::new(String::new()),
            read_only: Cell::new(false),
        }
    }

    /// Appends an element under `parent` and returns its id.
    pub fn add(
        &self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> NodeId {
        let mut elements = self.elements.borrow_mut();
        let id = NodeId(elements.len());
        let value = (tag == "select").then(String::new);

        elements.push(Element {
            tag: tag.to_string(),
            parent: Some(parent),
            text: text.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            value,
        });
        id
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.elements.borrow().get(node.0).map(|e| e.tag.clone())
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(&node, name).is_some()
    }

    /// Makes every write fail, to exercise error paths.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    fn write<R>(
        &self,
        node: NodeId,
        what: &str,
        f: impl FnOnce(&mut Element) -> R,
    ) -> DomResult<R> {
        if self.read_only.get() {
            return Err(DomError::Write {
                target: format!("{} of node {}", what, node.0),
                message: "document is read-only".into(),
            });
        }

        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(node.0)
            .ok_or_else(|| DomError::NotFound(format!("node {}", node.0)))?;
        Ok(f(element))
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn query_all(&self, attribute: &str) -> Vec<NodeId> {
        self.elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.attributes.contains_key(attribute))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn closest(&self, node: &NodeId, attribute: &str) -> Option<NodeId> {
        let elements = self.elements.borrow();
        let mut current = Some(*node);

        while let Some(id) = current {
            let element = elements.get(id.0)?;
            if element.attributes.contains_key(attribute) {
                return Some(id);
            }
            current = element.parent;
        }
        None
    }

    fn text(&self, node: &NodeId) -> String {
        self.elements
            .borrow()
            .get(node.0)
            .map(|e| e.text.clone())
            .unwrap_or_default()
    }

    fn set_text(&self, node: &NodeId, text: &str) -> DomResult<()> {
        self.write(*node, "text", |e| e.text = text.to_string())
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(node.0)
            .and_then(|e| e.attributes.get(name).cloned())
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> DomResult<()> {
        self.write(*node, name, |e| {
            e.attributes.insert(name.to_string(), value.to_string());
        })
    }

    fn remove_attribute(&self, node: &NodeId, name: &str) -> DomResult<()> {
        self.write(*node, name, |e| {
            e.attributes.remove(name);
        })
    }

    fn value(&self, node: &NodeId) -> Option<String> {
        self.elements
            .borrow()
            .get(node.0)
            .and_then(|e| e.value.clone())
    }

    fn set_value(&self, node: &NodeId, value: &str) -> DomResult<()> {
        self.write(*node, "value", |e| {
            if e.value.is_some() {
                e.value = Some(value.to_string());
            }
        })
    }

    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn set_title(&self, title: &str) -> DomResult<()> {
        if self.read_only.get() {
            return Err(DomError::Write {
                target: "title".into(),
                message: "document is read-only".into(),
            });
        }
        *self.title.borrow_mut() = title.to_string();
        Ok(())
    }
}
