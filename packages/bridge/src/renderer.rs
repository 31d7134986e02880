use crate::{
    ComponentKind, EditorHandle, NodeViewProps, PropsPatch, RegistryOp, RenderContext, RendererId,
    ViewComponent,
};
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

/// Construction options for a [`Renderer`].
pub struct RendererOptions {
    pub editor: EditorHandle,
    pub props: NodeViewProps,
    /// Tag of the renderer's target element. Defaults to `div`.
    pub tag_name: Option<String>,
    pub class_name: Option<String>,
}

impl RendererOptions {
    pub fn new(editor: &EditorHandle, props: NodeViewProps) -> Self {
        RendererOptions {
            editor: editor.clone(),
            props,
            tag_name: None,
            class_name: None,
        }
    }
}

/// Component instance wrapper: owns one DOM element outside the UI tree's
/// directly managed region and renders a component into it through the
/// portal registry.
///
/// Renders are synchronous; destruction defers registry removal to the
/// next scheduler tick so an entry is never removed while its DOM node
/// may still be mid-mutation in the same call stack.
pub struct Renderer {
    id: RendererId,
    component: Rc<dyn ViewComponent>,
    editor: EditorHandle,
    element: vellum_dom::Element,
    props: RefCell<NodeViewProps>,
    handle: RefCell<Option<Rc<dyn Any>>>,
}

impl Renderer {
    pub fn new(component: Rc<dyn ViewComponent>, options: RendererOptions) -> Self {
        let element = vellum_dom::Element::new(options.tag_name.as_deref().unwrap_or("div"));
        element.add_class("vellum-renderer");
        if let Some(class_name) = &options.class_name {
            element.add_class(class_name);
        }
        let renderer = Renderer {
            id: RendererId::next(),
            component,
            editor: options.editor,
            element,
            props: RefCell::new(options.props),
            handle: RefCell::new(None),
        };
        renderer.render();
        renderer
    }

    pub fn id(&self) -> RendererId {
        self.id
    }

    pub fn element(&self) -> vellum_dom::Element {
        self.element.clone()
    }

    /// Current props snapshot.
    pub fn props(&self) -> NodeViewProps {
        self.props.borrow().clone()
    }

    /// Imperative handle of the component instance, when it declares one.
    pub fn handle(&self) -> Option<Rc<dyn Any>> {
        self.handle.borrow().clone()
    }

    /// Builds the component output from the current props and commits it
    /// into the attached container's registry. Without a container the
    /// renderer is orphaned: it exists, but nothing reaches the DOM,
    /// an expected transient during teardown races.
    pub fn render(&self) {
        let props = self.props.borrow().clone();
        let content = self.component.render(&props, &RenderContext::default());
        if self.component.kind() == ComponentKind::WithHandle {
            *self.handle.borrow_mut() = self.component.imperative_handle();
        }
        match self.editor.content_view() {
            Some(view) => view.commit(RegistryOp::Upsert {
                id: self.id,
                element: self.element.clone(),
                content,
            }),
            None => trace!(id = %self.id, "render with no attached container; renderer orphaned"),
        }
    }

    /// Merges `patch` over the existing props and re-renders synchronously.
    pub fn update_props(&self, patch: PropsPatch) {
        self.props.borrow_mut().apply(patch);
        self.render();
    }

    /// Schedules removal of this renderer's registry entry on the next
    /// scheduler tick.
    pub fn destroy(&self) {
        let id = self.id;
        let editor = self.editor.clone();
        self.editor.scheduler().defer(move || {
            if let Some(view) = editor.content_view() {
                view.commit(RegistryOp::Remove { id });
            }
        });
    }
}
