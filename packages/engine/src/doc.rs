use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

struct NodeTypeData {
    name: String,
    inline: bool,
    leaf: bool,
}

/// Shared handle to a node type in the engine's schema.
///
/// Equality is handle identity: two types are the same only when they
/// originate from the same schema entry, which is how the engine itself
/// decides whether a node "changed type".
#[derive(Clone)]
pub struct NodeType {
    data: Rc<NodeTypeData>,
}

impl NodeType {
    pub fn new(name: impl Into<String>, inline: bool, leaf: bool) -> Self {
        NodeType {
            data: Rc::new(NodeTypeData {
                name: name.into(),
                inline,
                leaf,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn is_inline(&self) -> bool {
        self.data.inline
    }

    pub fn is_leaf(&self) -> bool {
        self.data.leaf
    }
}

impl PartialEq for NodeType {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for NodeType {}

impl fmt::Debug for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeType")
            .field("name", &self.data.name)
            .field("inline", &self.data.inline)
            .field("leaf", &self.data.leaf)
            .finish()
    }
}

struct DocNodeData {
    node_type: NodeType,
    attrs: IndexMap<String, Value>,
}

/// Immutable snapshot of one document node, as handed out by the engine.
///
/// The engine reuses the same snapshot across redraws that did not touch
/// the node, so `PartialEq` is handle identity: it answers "is this the
/// same snapshot", not "does this have equal content".
#[derive(Clone)]
pub struct DocNode {
    data: Rc<DocNodeData>,
}

impl DocNode {
    pub fn new(node_type: &NodeType, attrs: IndexMap<String, Value>) -> Self {
        DocNode {
            data: Rc::new(DocNodeData {
                node_type: node_type.clone(),
                attrs,
            }),
        }
    }

    pub fn with_type(node_type: &NodeType) -> Self {
        Self::new(node_type, IndexMap::new())
    }

    pub fn node_type(&self) -> &NodeType {
        &self.data.node_type
    }

    pub fn type_name(&self) -> &str {
        self.data.node_type.name()
    }

    pub fn is_inline(&self) -> bool {
        self.data.node_type.is_inline()
    }

    pub fn is_leaf(&self) -> bool {
        self.data.node_type.is_leaf()
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.data.attrs.get(name)
    }

    pub fn attrs(&self) -> &IndexMap<String, Value> {
        &self.data.attrs
    }
}

impl PartialEq for DocNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for DocNode {}

impl fmt::Debug for DocNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocNode")
            .field("type", &self.data.node_type.name())
            .field("attrs", &self.data.attrs)
            .finish()
    }
}

/// Handle to the extension that registered a node view.
#[derive(Clone)]
pub struct ExtensionHandle {
    name: Rc<str>,
}

impl ExtensionHandle {
    pub fn new(name: impl Into<String>) -> Self {
        ExtensionHandle {
            name: name.into().into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for ExtensionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExtensionHandle").field(&self.name).finish()
    }
}
