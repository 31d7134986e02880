use crate::{Element, Node};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Immutable copy of a subtree, for assertions and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeSnapshot {
    Element {
        tag: String,
        attributes: IndexMap<String, String>,
        styles: IndexMap<String, String>,
        children: Vec<NodeSnapshot>,
    },
    Text {
        content: String,
    },
}

impl NodeSnapshot {
    pub fn of(node: &Node) -> Self {
        match node {
            Node::Element(el) => Self::of_element(el),
            Node::Text(text) => NodeSnapshot::Text {
                content: text.content(),
            },
        }
    }

    pub fn of_element(el: &Element) -> Self {
        NodeSnapshot::Element {
            tag: el.tag(),
            attributes: el.attributes(),
            styles: el.styles(),
            children: el.children().iter().map(NodeSnapshot::of).collect(),
        }
    }
}

impl Element {
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot::of_element(self)
    }
}
