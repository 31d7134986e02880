//! Shared fixtures: an in-memory stub of the external document engine and
//! a couple of canned view components.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use vellum_bridge::{
    node_view_content, node_view_wrapper, ComponentKind, ContentView, EditorHandle, FnComponent,
    NodeViewProps, PrimitiveProps, RenderContext, Scheduler, ViewComponent,
};
use vellum_dom::{Element, Node};
use vellum_engine::{
    DecorationSet, DocNode, DocumentEngine, ExtensionHandle, ListenerId, NodeView, NodeViewArgs,
    NodeViewFactory, Plugin, PluginKey, TransactionListener,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

#[derive(Default)]
struct StubState {
    element: Option<Element>,
    factories: HashMap<String, NodeViewFactory>,
    plugins: Vec<Plugin>,
    listeners: Vec<(ListenerId, TransactionListener)>,
    next_listener: u64,
    destroyed: bool,
    doc: Vec<DocNode>,
    views: Vec<Box<dyn NodeView>>,
    create_node_views_calls: u32,
}

/// Minimal in-memory engine. Holds a flat "document" of node snapshots;
/// `create_node_views` runs the registered factories over it and splices
/// each view's root into the configured element, the way the real engine
/// re-materializes views after the container claims it.
#[derive(Clone)]
pub struct StubEngine {
    state: Rc<RefCell<StubState>>,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::with_element(Element::new("div"))
    }

    pub fn with_element(element: Element) -> Self {
        StubEngine {
            state: Rc::new(RefCell::new(StubState {
                element: Some(element),
                ..Default::default()
            })),
        }
    }

    pub fn rc(&self) -> Rc<dyn DocumentEngine> {
        Rc::new(self.clone())
    }

    pub fn set_doc(&self, doc: Vec<DocNode>) {
        self.state.borrow_mut().doc = doc;
    }

    pub fn emit_transaction(&self) {
        let listeners: Vec<TransactionListener> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn plugin(&self, key: &PluginKey) -> Option<Plugin> {
        self.state
            .borrow()
            .plugins
            .iter()
            .find(|plugin| &plugin.key == key)
            .cloned()
    }

    pub fn plugin_count(&self) -> usize {
        self.state.borrow().plugins.len()
    }

    pub fn factory_count(&self) -> usize {
        self.state.borrow().factories.len()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn view_count(&self) -> usize {
        self.state.borrow().views.len()
    }

    pub fn create_node_views_calls(&self) -> u32 {
        self.state.borrow().create_node_views_calls
    }
}

impl DocumentEngine for StubEngine {
    fn element(&self) -> Option<Element> {
        self.state.borrow().element.clone()
    }

    fn set_element(&self, element: Element) {
        self.state.borrow_mut().element = Some(element);
    }

    fn set_node_view_factory(&self, type_name: &str, factory: NodeViewFactory) {
        self.state
            .borrow_mut()
            .factories
            .insert(type_name.to_string(), factory);
    }

    fn clear_node_view_factories(&self) {
        self.state.borrow_mut().factories.clear();
    }

    fn create_node_views(&self) {
        let (doc, factories, element) = {
            let mut state = self.state.borrow_mut();
            state.create_node_views_calls += 1;
            state.views.clear();
            (
                state.doc.clone(),
                state.factories.clone(),
                state.element.clone(),
            )
        };
        let mut views = Vec::new();
        for node in doc {
            let Some(factory) = factories.get(node.type_name()) else {
                continue;
            };
            let Some(view) = factory(node_view_args(&node)) else {
                continue;
            };
            if let (Ok(root), Some(element)) = (view.dom(), &element) {
                element.append_child(Node::Element(root));
            }
            views.push(view);
        }
        self.state.borrow_mut().views = views;
    }

    fn register_plugin(&self, plugin: Plugin) {
        self.state.borrow_mut().plugins.push(plugin);
    }

    fn unregister_plugin(&self, key: &PluginKey) {
        self.state
            .borrow_mut()
            .plugins
            .retain(|plugin| &plugin.key != key);
    }

    fn is_destroyed(&self) -> bool {
        self.state.borrow().destroyed
    }

    fn on_transaction(&self, listener: TransactionListener) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state.listeners.push((id, listener));
        id
    }

    fn off_transaction(&self, id: ListenerId) {
        self.state
            .borrow_mut()
            .listeners
            .retain(|(listener_id, _)| *listener_id != id);
    }

    fn destroy(&self) {
        let mut state = self.state.borrow_mut();
        state.destroyed = true;
        state.listeners.clear();
    }
}

/// Engine args for mounting a node view directly in a test.
pub fn node_view_args(node: &DocNode) -> NodeViewArgs {
    NodeViewArgs {
        node: node.clone(),
        decorations: DecorationSet::empty(),
        extension: ExtensionHandle::new(node.type_name()),
        get_pos: Rc::new(|| Some(0)),
        update_attributes: Rc::new(|_| {}),
        delete_node: Rc::new(|| {}),
    }
}

/// Engine + editor + mounted container, ready for node-view tests.
pub fn mounted_editor() -> (StubEngine, EditorHandle, ContentView) {
    init_tracing();
    let engine = StubEngine::new();
    let editor = EditorHandle::new(engine.rc(), Scheduler::new());
    let view = ContentView::new(&editor);
    view.mount();
    (engine, editor, view)
}

/// A well-behaved node-view component: wrapper primitive around the
/// content primitive.
pub fn wrapper_component() -> Rc<dyn ViewComponent> {
    Rc::new(FnComponent::new(|_props, ctx| {
        node_view_wrapper(
            PrimitiveProps::default(),
            vec![node_view_content(ctx, PrimitiveProps::default())],
        )
    }))
}

/// A misbehaving component that skips the wrapper primitive.
pub fn bare_component() -> Rc<dyn ViewComponent> {
    Rc::new(FnComponent::new(|_props, _ctx| {
        Node::Element(Element::new("div"))
    }))
}

/// Component that records every props snapshot it renders with.
pub struct ProbeComponent {
    pub log: Rc<RefCell<Vec<NodeViewProps>>>,
}

impl ProbeComponent {
    pub fn new() -> (Rc<dyn ViewComponent>, Rc<RefCell<Vec<NodeViewProps>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let component = Rc::new(ProbeComponent { log: log.clone() });
        (component, log)
    }
}

impl ViewComponent for ProbeComponent {
    fn display_name(&self) -> Option<&str> {
        Some("Probe")
    }

    fn render(&self, props: &NodeViewProps, ctx: &RenderContext) -> Node {
        self.log.borrow_mut().push(props.clone());
        node_view_wrapper(
            PrimitiveProps::default(),
            vec![node_view_content(ctx, PrimitiveProps::default())],
        )
    }
}

/// Component declaring an imperative handle.
pub struct HandleComponent {
    pub handle: Rc<String>,
}

impl ViewComponent for HandleComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::WithHandle
    }

    fn render(&self, _props: &NodeViewProps, _ctx: &RenderContext) -> Node {
        node_view_wrapper(PrimitiveProps::default(), Vec::new())
    }

    fn imperative_handle(&self) -> Option<Rc<dyn std::any::Any>> {
        Some(self.handle.clone())
    }
}
