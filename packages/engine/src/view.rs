use crate::{DecorationSet, DocNode, ExtensionHandle, ViewError};
use indexmap::IndexMap;
use serde_json::Value;
use std::rc::Rc;
use vellum_dom::Element;

/// Resolves the node's current position in the document.
pub type GetPos = Rc<dyn Fn() -> Option<usize>>;

/// Pushes an attribute update back into the document through the engine.
pub type UpdateAttributes = Rc<dyn Fn(IndexMap<String, Value>)>;

/// Deletes the node from the document through the engine.
pub type DeleteNode = Rc<dyn Fn()>;

/// Everything the engine supplies when instantiating a node view.
#[derive(Clone)]
pub struct NodeViewArgs {
    pub node: DocNode,
    pub decorations: DecorationSet,
    pub extension: ExtensionHandle,
    pub get_pos: GetPos,
    pub update_attributes: UpdateAttributes,
    pub delete_node: DeleteNode,
}

/// The node-view lifecycle contract the engine drives.
///
/// Mount happens at construction; afterwards the engine calls `update` on
/// every redraw touching the node, toggles selection, and finally calls
/// `destroy` when the node leaves the document (or `update` returned
/// `false`, forcing a remount).
pub trait NodeView {
    /// The root DOM element the engine splices into its view.
    fn dom(&self) -> Result<Element, ViewError>;

    /// Where the engine renders nested editable content, if anywhere.
    fn content_dom(&self) -> Option<Element>;

    /// Applies a changed node/decorations pair. Returning `false` tells
    /// the engine to tear this view down and mount a fresh one.
    fn update(&mut self, node: DocNode, decorations: DecorationSet) -> bool;

    fn select_node(&mut self);

    fn deselect_node(&mut self);

    fn destroy(&mut self);
}

/// Factory registered per node type. Returning `None` lets the engine fall
/// back to its default rendering for the node.
pub type NodeViewFactory = Rc<dyn Fn(NodeViewArgs) -> Option<Box<dyn NodeView>>>;
