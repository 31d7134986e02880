use crate::RendererId;
use indexmap::IndexMap;
use vellum_dom::{Element, Node};

/// One live portal: a renderer's target element and its current content.
pub struct PortalEntry {
    pub element: Element,
    pub content: Node,
}

/// A registry mutation. Renderers never touch the registry directly; they
/// submit one of these through the owning container's commit.
pub enum RegistryOp {
    Upsert {
        id: RendererId,
        element: Element,
        content: Node,
    },
    Remove {
        id: RendererId,
    },
}

/// Insertion-ordered renderer identity → portal entry mapping.
///
/// Applying an op projects it into the DOM in the same call: an upsert
/// mounts the new content into the target element before returning, so
/// DOM structure the engine mutates immediately after a commit never
/// observes a half-applied state. Updating an existing id keeps its
/// position; removing an id never reorders the remaining entries.
#[derive(Default)]
pub struct PortalRegistry {
    entries: IndexMap<RendererId, PortalEntry>,
}

impl PortalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, op: RegistryOp) {
        match op {
            RegistryOp::Upsert {
                id,
                element,
                content,
            } => {
                element.replace_children(vec![content.clone()]);
                self.entries.insert(id, PortalEntry { element, content });
            }
            RegistryOp::Remove { id } => {
                if let Some(entry) = self.entries.shift_remove(&id) {
                    entry.element.take_children();
                }
            }
        }
    }

    pub fn get(&self, id: RendererId) -> Option<&PortalEntry> {
        self.entries.get(&id)
    }

    pub fn ids(&self) -> Vec<RendererId> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
