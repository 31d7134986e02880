use crate::NodeViewProps;
use indexmap::IndexMap;
use std::any::Any;
use std::rc::Rc;
use vellum_dom::{Element, Node};

/// Whether a component needs an imperative handle captured at render time.
///
/// Declared by the component itself so the decision is fixed at
/// registration instead of probing the component representation at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Stateless,
    WithHandle,
}

/// Context threaded through a render, carrying the content hole the
/// content primitive adopts.
#[derive(Clone, Default)]
pub struct RenderContext {
    pub content_hole: Option<Element>,
}

/// A user-authored component rendered through the portal mechanism.
pub trait ViewComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Stateless
    }

    fn display_name(&self) -> Option<&str> {
        None
    }

    fn render(&self, props: &NodeViewProps, ctx: &RenderContext) -> Node;

    /// Imperative handle captured by the renderer when `kind()` is
    /// [`ComponentKind::WithHandle`].
    fn imperative_handle(&self) -> Option<Rc<dyn Any>> {
        None
    }
}

/// Closure-backed [`ViewComponent`], for plain stateless components.
pub struct FnComponent {
    name: Option<String>,
    render: Rc<dyn Fn(&NodeViewProps, &RenderContext) -> Node>,
}

impl FnComponent {
    pub fn new(render: impl Fn(&NodeViewProps, &RenderContext) -> Node + 'static) -> Self {
        FnComponent {
            name: None,
            render: Rc::new(render),
        }
    }

    pub fn named(
        name: impl Into<String>,
        render: impl Fn(&NodeViewProps, &RenderContext) -> Node + 'static,
    ) -> Self {
        FnComponent {
            name: Some(name.into()),
            render: Rc::new(render),
        }
    }
}

impl ViewComponent for FnComponent {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn render(&self, props: &NodeViewProps, ctx: &RenderContext) -> Node {
        (self.render)(props, ctx)
    }
}

/// Tag override plus pass-through attributes/styles for the layout
/// primitives.
#[derive(Clone, Default)]
pub struct PrimitiveProps {
    pub tag: Option<String>,
    pub attrs: IndexMap<String, String>,
    pub styles: IndexMap<String, String>,
}

impl PrimitiveProps {
    pub fn with_tag(tag: impl Into<String>) -> Self {
        PrimitiveProps {
            tag: Some(tag.into()),
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(name.into(), value.into());
        self
    }
}

fn primitive_element(props: PrimitiveProps, default_tag: &str, white_space: &str) -> Element {
    let el = Element::new(props.tag.as_deref().unwrap_or(default_tag));
    el.set_style("white-space", white_space);
    for (name, value) in props.attrs {
        el.set_attribute(name, value);
    }
    for (name, value) in props.styles {
        el.set_style(name, value);
    }
    el
}

/// Outer wrapper every node-view component must render as its root.
/// Carries the marker attribute the adapter's DOM accessor checks for.
pub fn node_view_wrapper(props: PrimitiveProps, children: Vec<Node>) -> Node {
    let el = primitive_element(props, "div", "normal");
    el.set_attribute("data-node-view-wrapper", "");
    for child in children {
        el.append_child(child);
    }
    Node::Element(el)
}

/// Content hole mount point. Adopts the context's content hole element,
/// which keeps its identity across renders: re-rendering moves the same
/// element into the fresh output, never duplicating it.
pub fn node_view_content(ctx: &RenderContext, props: PrimitiveProps) -> Node {
    let el = primitive_element(props, "div", "pre-wrap");
    el.set_attribute("data-node-view-content", "");
    if let Some(hole) = &ctx.content_hole {
        let hole_node = Node::Element(hole.clone());
        if el.first_child().as_ref() != Some(&hole_node) {
            el.append_child(hole_node);
        }
    }
    Node::Element(el)
}
