// src/dom/document.rs
use super::DomResult;

/// The slice of a document tree the translator needs.
///
/// Methods take `&self`: a live DOM is mutated through shared handles, and
/// the in-memory tree follows the same model.
pub trait Document {
    type Node: Clone;

    /// The `<html>` element.
    fn root(&self) -> Self::Node;

    /// All elements carrying `attribute`, in document order.
    fn query_all(&self, attribute: &str) -> Vec<Self::Node>;

    fn query_first(&self, attribute: &str) -> Option<Self::Node> {
        self.query_all(attribute).into_iter().next()
    }

    /// Nearest element carrying `attribute`, starting at `node` itself.
    fn closest(&self, node: &Self::Node, attribute: &str) -> Option<Self::Node>;

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str) -> DomResult<()>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> DomResult<()>;
    fn remove_attribute(&self, node: &Self::Node, name: &str) -> DomResult<()>;

    /// Sets an empty boolean attribute when `on`, removes it otherwise.
    fn toggle_attribute(&self, node: &Self::Node, name: &str, on: bool) -> DomResult<()> {
        if on {
            self.set_attribute(node, name, "")
        } else {
            self.remove_attribute(node, name)
        }
    }

    /// Current value of a form control, if `node` is one.
    fn value(&self, node: &Self::Node) -> Option<String>;
    fn set_value(&self, node: &Self::Node, value: &str) -> DomResult<()>;

    fn title(&self) -> String;
    fn set_title(&self, title: &str) -> DomResult<()>;
}
