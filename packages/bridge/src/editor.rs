use crate::container::{ContentView, ContentViewInner};
use crate::{node_view_factory, NodeViewOptions, Scheduler, ViewComponent};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use vellum_engine::{DocumentEngine, ListenerId, Plugin, PluginKey, TransactionListener};

struct EditorShared {
    engine: Rc<dyn DocumentEngine>,
    scheduler: Scheduler,
    // Weak: the container already holds the editor strongly.
    content: RefCell<Option<Weak<ContentViewInner>>>,
}

/// Managed editor instance: an opaque engine handle plus the nullable
/// back-reference node views use to locate the active portal registry.
///
/// Composition, not subclassing: the engine stays opaque behind the
/// [`DocumentEngine`] trait and this record carries the one extra field.
#[derive(Clone)]
pub struct EditorHandle {
    shared: Rc<EditorShared>,
}

impl EditorHandle {
    pub fn new(engine: Rc<dyn DocumentEngine>, scheduler: Scheduler) -> Self {
        EditorHandle {
            shared: Rc::new(EditorShared {
                engine,
                scheduler,
                content: RefCell::new(None),
            }),
        }
    }

    pub fn engine(&self) -> &Rc<dyn DocumentEngine> {
        &self.shared.engine
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.shared.scheduler
    }

    /// The container currently claiming this editor, if any.
    pub fn content_view(&self) -> Option<ContentView> {
        self.shared
            .content
            .borrow()
            .as_ref()
            .and_then(Weak::upgrade)
            .map(ContentView::from_inner)
    }

    /// Claims the editor for `view`. Returns `false` without touching the
    /// existing claim when another container already holds it; repeated
    /// mounts must stay idempotent, never corrupt the transplant state.
    pub(crate) fn attach_content_view(&self, view: &ContentView) -> bool {
        let mut slot = self.shared.content.borrow_mut();
        if slot.as_ref().and_then(Weak::upgrade).is_some() {
            return false;
        }
        *slot = Some(Rc::downgrade(view.inner()));
        true
    }

    /// Releases the claim, but only if `view` is the current owner.
    pub(crate) fn detach_content_view(&self, view: &ContentView) {
        let mut slot = self.shared.content.borrow_mut();
        let owned_by_view = slot
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|inner| Rc::ptr_eq(&inner, view.inner()));
        if owned_by_view {
            *slot = None;
        }
    }

    // --- engine passthroughs ---

    pub fn is_destroyed(&self) -> bool {
        self.shared.engine.is_destroyed()
    }

    pub fn destroy(&self) {
        self.shared.engine.destroy();
    }

    pub fn register_plugin(&self, plugin: Plugin) {
        self.shared.engine.register_plugin(plugin);
    }

    pub fn unregister_plugin(&self, key: &PluginKey) {
        self.shared.engine.unregister_plugin(key);
    }

    pub fn on_transaction(&self, listener: TransactionListener) -> ListenerId {
        self.shared.engine.on_transaction(listener)
    }

    pub fn off_transaction(&self, id: ListenerId) {
        self.shared.engine.off_transaction(id);
    }

    /// Registers a component-backed node view for the named node type.
    pub fn register_node_view(
        &self,
        type_name: &str,
        component: Rc<dyn ViewComponent>,
        options: NodeViewOptions,
    ) {
        self.shared
            .engine
            .set_node_view_factory(type_name, node_view_factory(self.clone(), component, options));
    }
}

impl std::fmt::Debug for EditorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorHandle")
            .field("shared", &Rc::as_ptr(&self.shared))
            .finish()
    }
}

impl PartialEq for EditorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Eq for EditorHandle {}
