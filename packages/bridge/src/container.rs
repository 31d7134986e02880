use crate::{EditorHandle, PortalRegistry, RegistryOp, RendererId};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use vellum_dom::Element;

pub(crate) struct ContentViewInner {
    editor: EditorHandle,
    element: Element,
    registry: RefCell<PortalRegistry>,
}

/// The managed container: the top-level UI component owning the DOM
/// region the editor is mounted into, and the sole owner of the portal
/// registry.
///
/// Mount/unmount choreography: on mount the engine's root children are
/// transplanted into this container's element exactly once and the engine
/// is repointed at it; on unmount any remaining children are rehomed into
/// a fresh unmanaged element so the engine is never left pointing into a
/// destroyed subtree.
#[derive(Clone)]
pub struct ContentView {
    inner: Rc<ContentViewInner>,
}

impl ContentView {
    pub fn new(editor: &EditorHandle) -> Self {
        let element = Element::new("div");
        element.add_class("vellum-content");
        ContentView {
            inner: Rc::new(ContentViewInner {
                editor: editor.clone(),
                element,
                registry: RefCell::new(PortalRegistry::new()),
            }),
        }
    }

    pub(crate) fn from_inner(inner: Rc<ContentViewInner>) -> Self {
        ContentView { inner }
    }

    pub(crate) fn inner(&self) -> &Rc<ContentViewInner> {
        &self.inner
    }

    /// The container's own DOM element; the engine root lives in here
    /// while mounted.
    pub fn element(&self) -> Element {
        self.inner.element.clone()
    }

    pub fn editor(&self) -> EditorHandle {
        self.inner.editor.clone()
    }

    /// Runs on every mount and update pass. The first call transplants
    /// the engine root; once ownership is claimed, repeated calls no-op.
    pub fn mount(&self) {
        let editor = &self.inner.editor;
        let Some(engine_root) = editor.engine().element() else {
            return;
        };
        if !editor.attach_content_view(self) {
            return;
        }

        for child in engine_root.take_children() {
            self.inner.element.append_child(child);
        }
        editor.engine().set_element(self.inner.element.clone());
        editor.engine().create_node_views();
        debug!(tag = %self.inner.element.tag(), "content view mounted, engine root transplanted");
    }

    /// Detaches rendering authority and rehomes the engine's DOM so the
    /// engine never dangles into this container after it is gone.
    pub fn unmount(&self) {
        let editor = &self.inner.editor;
        if let Some(owner) = editor.content_view() {
            if owner != *self {
                // another container claimed the editor; nothing to release
                return;
            }
        }

        if !editor.is_destroyed() {
            editor.engine().clear_node_view_factories();
        }
        editor.detach_content_view(self);

        let Some(root) = editor.engine().element() else {
            return;
        };
        if root.child_count() == 0 {
            return;
        }
        let orphan = Element::new("div");
        for child in root.take_children() {
            orphan.append_child(child);
        }
        editor.engine().set_element(orphan);
        debug!("content view unmounted, engine root rehomed");
    }

    /// The single registry mutation path. Applies and projects
    /// synchronously, never batched, so the DOM the engine sees directly
    /// after this call is fully consistent with the registry.
    pub fn commit(&self, op: RegistryOp) {
        self.inner.registry.borrow_mut().apply(op);
    }

    pub fn portal_ids(&self) -> Vec<RendererId> {
        self.inner.registry.borrow().ids()
    }

    pub fn portal_count(&self) -> usize {
        self.inner.registry.borrow().len()
    }
}

impl std::fmt::Debug for ContentView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentView")
            .field("inner", &Rc::as_ptr(&self.inner))
            .finish()
    }
}

impl PartialEq for ContentView {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ContentView {}
