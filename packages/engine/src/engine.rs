use crate::{NodeViewFactory, Plugin, PluginKey};
use std::rc::Rc;
use vellum_dom::Element;

/// Identifies one transaction subscription for unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

pub type TransactionListener = Rc<dyn Fn()>;

/// The integration surface of the external document engine.
///
/// Everything is single-threaded and callbacks run synchronously inside
/// whatever call stack triggered the underlying transaction, so methods
/// take `&self`; implementations are expected to use interior mutability
/// and tolerate reentrant calls from node-view callbacks.
pub trait DocumentEngine {
    /// The engine's currently configured root element, if any.
    fn element(&self) -> Option<Element>;

    /// Repoints the engine's root at `element`. The engine renders the
    /// document into whatever element is configured here.
    fn set_element(&self, element: Element);

    /// Registers a node-view factory for the named node type.
    fn set_node_view_factory(&self, type_name: &str, factory: NodeViewFactory);

    /// Drops every registered node-view factory, detaching rendering
    /// authority so no stale callbacks fire into dead components.
    fn clear_node_view_factories(&self);

    /// (Re)materializes all node views against the current root element.
    fn create_node_views(&self);

    fn register_plugin(&self, plugin: Plugin);

    fn unregister_plugin(&self, key: &PluginKey);

    fn is_destroyed(&self) -> bool;

    fn on_transaction(&self, listener: TransactionListener) -> ListenerId;

    fn off_transaction(&self, id: ListenerId);

    /// Tears the engine down. Subsequent calls are no-ops.
    fn destroy(&self);
}
