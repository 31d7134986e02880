use crate::EditorHandle;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use vellum_engine::{DecorationSet, DeleteNode, DocNode, ExtensionHandle, GetPos, UpdateAttributes};

/// Props handed to a view component on every render.
///
/// Node-view renders populate the document fields; lower-level renderer
/// uses (suggestion popups and the like) may leave them empty and carry
/// everything in `extra`.
#[derive(Clone)]
pub struct NodeViewProps {
    pub editor: EditorHandle,
    pub node: Option<DocNode>,
    pub decorations: DecorationSet,
    pub selected: bool,
    pub extension: Option<ExtensionHandle>,
    pub get_pos: Option<GetPos>,
    pub update_attributes: Option<UpdateAttributes>,
    pub delete_node: Option<DeleteNode>,
    /// Arbitrary caller props, merged key-by-key on update.
    pub extra: IndexMap<String, Value>,
}

impl NodeViewProps {
    pub fn new(editor: &EditorHandle) -> Self {
        NodeViewProps {
            editor: editor.clone(),
            node: None,
            decorations: DecorationSet::empty(),
            selected: false,
            extension: None,
            get_pos: None,
            update_attributes: None,
            delete_node: None,
            extra: IndexMap::new(),
        }
    }

    /// Merges `patch` over the current props, field by field. Fields the
    /// patch does not mention keep their current value.
    pub fn apply(&mut self, patch: PropsPatch) {
        if let Some(selected) = patch.selected {
            self.selected = selected;
        }
        if let Some(node) = patch.node {
            self.node = Some(node);
        }
        if let Some(decorations) = patch.decorations {
            self.decorations = decorations;
        }
        for (key, value) in patch.extra {
            self.extra.insert(key, value);
        }
    }
}

impl fmt::Debug for NodeViewProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeViewProps")
            .field("node", &self.node)
            .field("selected", &self.selected)
            .field("decorations", &self.decorations)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Partial prop update. Unset fields leave the target untouched.
#[derive(Clone, Default)]
pub struct PropsPatch {
    pub selected: Option<bool>,
    pub node: Option<DocNode>,
    pub decorations: Option<DecorationSet>,
    pub extra: IndexMap<String, Value>,
}

impl PropsPatch {
    pub fn selected(value: bool) -> Self {
        PropsPatch {
            selected: Some(value),
            ..Default::default()
        }
    }

    pub fn node_update(node: DocNode, decorations: DecorationSet) -> Self {
        PropsPatch {
            node: Some(node),
            decorations: Some(decorations),
            ..Default::default()
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl fmt::Debug for PropsPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropsPatch")
            .field("selected", &self.selected)
            .field("node", &self.node)
            .field("decorations", &self.decorations)
            .field("extra", &self.extra)
            .finish()
    }
}
