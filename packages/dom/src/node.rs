use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A live DOM node: either an element or a text node.
///
/// Handles are cheap to clone and compare by identity, not by content.
#[derive(Clone)]
pub enum Node {
    Element(Element),
    Text(Text),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(Text::new(content))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// The parent element, if this node is currently attached to one.
    pub fn parent(&self) -> Option<Element> {
        let parent = match self {
            Node::Element(el) => el.data.borrow().parent.upgrade(),
            Node::Text(text) => text.data.borrow().parent.upgrade(),
        };
        parent.map(|data| Element { data })
    }

    /// Removes this node from its parent's child list, if attached.
    pub fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent.remove_child(self);
        }
    }

    fn set_parent(&self, parent: Weak<RefCell<ElementData>>) {
        match self {
            Node::Element(el) => el.data.borrow_mut().parent = parent,
            Node::Text(text) => text.data.borrow_mut().parent = parent,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(el) => el.text_content(),
            Node::Text(text) => text.content(),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Element(a), Node::Element(b)) => a == b,
            (Node::Text(a), Node::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => el.fmt(f),
            Node::Text(text) => text.fmt(f),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

struct ElementData {
    tag: String,
    attributes: IndexMap<String, String>,
    styles: IndexMap<String, String>,
    children: Vec<Node>,
    parent: Weak<RefCell<ElementData>>,
}

/// A live element handle.
#[derive(Clone)]
pub struct Element {
    data: Rc<RefCell<ElementData>>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            data: Rc::new(RefCell::new(ElementData {
                tag: tag.into(),
                attributes: IndexMap::new(),
                styles: IndexMap::new(),
                children: Vec::new(),
                parent: Weak::new(),
            })),
        }
    }

    pub fn tag(&self) -> String {
        self.data.borrow().tag.clone()
    }

    // --- attributes ---

    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.data
            .borrow_mut()
            .attributes
            .insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.data.borrow().attributes.get(name).cloned()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.data.borrow().attributes.contains_key(name)
    }

    pub fn remove_attribute(&self, name: &str) {
        self.data.borrow_mut().attributes.shift_remove(name);
    }

    /// Appends a class token to the `class` attribute, skipping duplicates
    /// and blank tokens.
    pub fn add_class(&self, class: &str) {
        for token in class.split_whitespace() {
            let mut data = self.data.borrow_mut();
            let current = data.attributes.get("class").cloned().unwrap_or_default();
            if current.split_whitespace().any(|t| t == token) {
                continue;
            }
            let updated = if current.is_empty() {
                token.to_string()
            } else {
                format!("{current} {token}")
            };
            data.attributes.insert("class".to_string(), updated);
        }
    }

    pub fn class_name(&self) -> String {
        self.attribute("class").unwrap_or_default()
    }

    // --- inline styles ---

    pub fn set_style(&self, name: impl Into<String>, value: impl Into<String>) {
        self.data
            .borrow_mut()
            .styles
            .insert(name.into(), value.into());
    }

    pub fn style(&self, name: &str) -> Option<String> {
        self.data.borrow().styles.get(name).cloned()
    }

    // --- tree structure ---

    /// Appends `node` as the last child, detaching it from any previous
    /// parent first. Appending a node to its current parent moves it to
    /// the end. Appending an element to itself is ignored.
    pub fn append_child(&self, node: Node) {
        if let Node::Element(el) = &node {
            if el == self {
                return;
            }
        }
        node.detach();
        node.set_parent(Rc::downgrade(&self.data));
        self.data.borrow_mut().children.push(node);
    }

    /// Removes `node` from this element's child list. Returns `false` when
    /// the node was not a child.
    pub fn remove_child(&self, node: &Node) -> bool {
        let mut data = self.data.borrow_mut();
        let before = data.children.len();
        data.children.retain(|child| child != node);
        let removed = data.children.len() != before;
        drop(data);
        if removed {
            node.set_parent(Weak::new());
        }
        removed
    }

    /// Detaches and returns all children, in order.
    pub fn take_children(&self) -> Vec<Node> {
        let children = std::mem::take(&mut self.data.borrow_mut().children);
        for child in &children {
            child.set_parent(Weak::new());
        }
        children
    }

    /// Replaces the entire child list with `nodes`, reparenting each.
    pub fn replace_children(&self, nodes: Vec<Node>) {
        self.take_children();
        for node in nodes {
            self.append_child(node);
        }
    }

    pub fn children(&self) -> Vec<Node> {
        self.data.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.data.borrow().children.len()
    }

    pub fn first_child(&self) -> Option<Node> {
        self.data.borrow().children.first().cloned()
    }

    pub fn first_element_child(&self) -> Option<Element> {
        self.data
            .borrow()
            .children
            .iter()
            .find_map(|child| child.as_element().cloned())
    }

    pub fn parent(&self) -> Option<Element> {
        self.data.borrow().parent.upgrade().map(|data| Element { data })
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in self.data.borrow().children.iter() {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Whether `node` is a direct child of this element.
    pub fn contains_child(&self, node: &Node) -> bool {
        self.data.borrow().children.iter().any(|child| child == node)
    }

    pub(crate) fn attributes(&self) -> IndexMap<String, String> {
        self.data.borrow().attributes.clone()
    }

    pub(crate) fn styles(&self) -> IndexMap<String, String> {
        self.data.borrow().styles.clone()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.borrow();
        f.debug_struct("Element")
            .field("tag", &data.tag)
            .field("attributes", &data.attributes)
            .field("children", &data.children.len())
            .finish()
    }
}

struct TextData {
    content: String,
    parent: Weak<RefCell<ElementData>>,
}

/// A live text node handle.
#[derive(Clone)]
pub struct Text {
    data: Rc<RefCell<TextData>>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Text {
            data: Rc::new(RefCell::new(TextData {
                content: content.into(),
                parent: Weak::new(),
            })),
        }
    }

    pub fn content(&self) -> String {
        self.data.borrow().content.clone()
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.data.borrow_mut().content = content.into();
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Text {}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Text").field(&self.data.borrow().content).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn append_sets_parent_and_order() {
        let parent = Element::new("div");
        let a = Node::text("a");
        let b = Node::text("b");
        parent.append_child(a.clone());
        parent.append_child(b.clone());

        assert_eq!(parent.child_count(), 2);
        assert_eq!(a.parent().unwrap(), parent);
        assert_eq!(parent.text_content(), "ab");
    }

    #[test]
    fn append_reparents_from_previous_parent() {
        let first = Element::new("div");
        let second = Element::new("div");
        let child = Node::Element(Element::new("span"));

        first.append_child(child.clone());
        second.append_child(child.clone());

        assert_eq!(first.child_count(), 0);
        assert_eq!(second.child_count(), 1);
        assert_eq!(child.parent().unwrap(), second);
    }

    #[test]
    fn append_to_current_parent_moves_to_end() {
        let parent = Element::new("div");
        let a = Node::text("a");
        let b = Node::text("b");
        parent.append_child(a.clone());
        parent.append_child(b);
        parent.append_child(a);

        assert_eq!(parent.text_content(), "ba");
        assert_eq!(parent.child_count(), 2);
    }

    #[test]
    fn append_self_is_ignored() {
        let el = Element::new("div");
        el.append_child(Node::Element(el.clone()));
        assert_eq!(el.child_count(), 0);
    }

    #[test]
    fn take_children_clears_parents_and_preserves_order() {
        let parent = Element::new("div");
        let a = Node::text("a");
        let b = Node::text("b");
        let c = Node::text("c");
        for node in [&a, &b, &c] {
            parent.append_child(node.clone());
        }

        let taken = parent.take_children();
        assert_eq!(taken, vec![a.clone(), b, c]);
        assert_eq!(parent.child_count(), 0);
        assert!(a.parent().is_none());
    }

    #[test]
    fn remove_child_detaches_only_that_node() {
        let parent = Element::new("div");
        let a = Node::text("a");
        let b = Node::text("b");
        parent.append_child(a.clone());
        parent.append_child(b.clone());

        assert!(parent.remove_child(&a));
        assert!(!parent.remove_child(&a));
        assert!(a.parent().is_none());
        assert_eq!(parent.children(), vec![b]);
    }

    #[test]
    fn identity_not_content_equality() {
        let a = Element::new("div");
        let b = Element::new("div");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn add_class_skips_duplicates() {
        let el = Element::new("div");
        el.add_class("node-image");
        el.add_class("selected node-image");
        assert_eq!(el.class_name(), "node-image selected");
    }

    #[test]
    fn first_element_child_skips_text() {
        let parent = Element::new("div");
        parent.append_child(Node::text("lead"));
        let span = Element::new("span");
        parent.append_child(Node::Element(span.clone()));

        assert_eq!(parent.first_element_child().unwrap(), span);
    }
}
