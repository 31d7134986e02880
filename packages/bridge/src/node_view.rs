use crate::{
    ComponentKind, EditorHandle, NodeViewProps, PropsPatch, RenderContext, Renderer,
    RendererOptions, ViewComponent,
};
use std::any::Any;
use std::rc::Rc;
use tracing::{debug, trace};
use vellum_dom::{Element, Node};
use vellum_engine::{
    DecorationSet, DocNode, NodeView, NodeViewArgs, NodeViewFactory, ViewError,
};

/// Arguments to an adapter-supplied custom update function.
pub struct NodeViewUpdate<'a> {
    pub old_node: &'a DocNode,
    pub old_decorations: &'a DecorationSet,
    pub new_node: &'a DocNode,
    pub new_decorations: &'a DecorationSet,
    /// Pushes the new node/decorations pair through the component's props.
    pub apply: &'a dyn Fn(),
}

pub type UpdateFn = Rc<dyn Fn(NodeViewUpdate<'_>) -> bool>;

/// Adapter configuration supplied at registration.
#[derive(Clone, Default)]
pub struct NodeViewOptions {
    /// Overrides the wrapper element tag (`span` for inline node types,
    /// `div` otherwise, when unset).
    pub tag_name: Option<String>,
    pub class_name: Option<String>,
    /// Custom update hook; its return value is forwarded to the engine,
    /// so returning `false` selectively bails out into a full remount.
    pub update: Option<UpdateFn>,
}

/// Wraps the user component so the adapter's content hole reaches the
/// content primitive through the render context.
struct NodeViewProvider {
    component: Rc<dyn ViewComponent>,
    content_hole: Option<Element>,
}

impl ViewComponent for NodeViewProvider {
    fn kind(&self) -> ComponentKind {
        self.component.kind()
    }

    fn display_name(&self) -> Option<&str> {
        self.component.display_name()
    }

    fn render(&self, props: &NodeViewProps, _ctx: &RenderContext) -> Node {
        let ctx = RenderContext {
            content_hole: self.content_hole.clone(),
        };
        self.component.render(props, &ctx)
    }

    fn imperative_handle(&self) -> Option<Rc<dyn Any>> {
        self.component.imperative_handle()
    }
}

/// Implements the engine's node-view contract on top of one [`Renderer`].
pub struct NodeViewAdapter {
    options: NodeViewOptions,
    display_name: String,
    node: DocNode,
    decorations: DecorationSet,
    content_hole: Option<Element>,
    renderer: Renderer,
}

impl NodeViewAdapter {
    pub fn new(
        editor: EditorHandle,
        component: Rc<dyn ViewComponent>,
        args: NodeViewArgs,
        options: NodeViewOptions,
    ) -> Self {
        let display_name = component
            .display_name()
            .map(str::to_string)
            .unwrap_or_else(|| capitalize_first(args.extension.name()));

        let content_hole = if args.node.is_leaf() {
            None
        } else {
            let el = Element::new(if args.node.is_inline() { "span" } else { "div" });
            // the hole sits inside component output whose white-space the
            // component controls; nested editable text must follow it
            el.set_style("white-space", "inherit");
            Some(el)
        };

        let mut props = NodeViewProps::new(&editor);
        props.node = Some(args.node.clone());
        props.decorations = args.decorations.clone();
        props.extension = Some(args.extension.clone());
        props.get_pos = Some(args.get_pos.clone());
        props.update_attributes = Some(args.update_attributes.clone());
        props.delete_node = Some(args.delete_node.clone());

        let tag_name = options.tag_name.clone().unwrap_or_else(|| {
            if args.node.is_inline() { "span" } else { "div" }.to_string()
        });
        let class_name = format!(
            "node-{} {}",
            args.node.type_name(),
            options.class_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string();

        let provider = Rc::new(NodeViewProvider {
            component,
            content_hole: content_hole.clone(),
        });
        let renderer = Renderer::new(
            provider,
            RendererOptions {
                editor,
                props,
                tag_name: Some(tag_name),
                class_name: Some(class_name),
            },
        );

        debug!(
            component = %display_name,
            node_type = args.node.type_name(),
            id = %renderer.id(),
            "node view mounted"
        );

        NodeViewAdapter {
            options,
            display_name,
            node: args.node,
            decorations: args.decorations,
            content_hole,
            renderer,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

impl NodeView for NodeViewAdapter {
    fn dom(&self) -> Result<Element, ViewError> {
        if let Some(first) = self.renderer.element().first_element_child() {
            if !first.has_attribute("data-node-view-wrapper") {
                return Err(ViewError::MissingWrapperMarker {
                    component: self.display_name.clone(),
                });
            }
        }
        Ok(self.renderer.element())
    }

    fn content_dom(&self) -> Option<Element> {
        if self.node.is_leaf() {
            return None;
        }
        self.content_hole.clone()
    }

    fn update(&mut self, node: DocNode, decorations: DecorationSet) -> bool {
        if node.node_type() != self.node.node_type() {
            trace!(component = %self.display_name, "node type changed, forcing remount");
            return false;
        }

        if let Some(update) = self.options.update.clone() {
            let old_node = std::mem::replace(&mut self.node, node.clone());
            let old_decorations = std::mem::replace(&mut self.decorations, decorations.clone());
            let renderer = &self.renderer;
            let apply_node = node.clone();
            let apply_decorations = decorations.clone();
            let apply = move || {
                renderer.update_props(PropsPatch::node_update(
                    apply_node.clone(),
                    apply_decorations.clone(),
                ));
            };
            return update(NodeViewUpdate {
                old_node: &old_node,
                old_decorations: &old_decorations,
                new_node: &node,
                new_decorations: &decorations,
                apply: &apply,
            });
        }

        // same snapshot, same decorations: unrelated redraw, nothing to do
        if node == self.node && decorations == self.decorations {
            return true;
        }

        self.node = node.clone();
        self.decorations = decorations.clone();
        self.renderer
            .update_props(PropsPatch::node_update(node, decorations));
        true
    }

    fn select_node(&mut self) {
        self.renderer.update_props(PropsPatch::selected(true));
    }

    fn deselect_node(&mut self) {
        self.renderer.update_props(PropsPatch::selected(false));
    }

    fn destroy(&mut self) {
        self.renderer.destroy();
        self.content_hole = None;
    }
}

/// Builds the factory registered with the engine for one node type.
///
/// Calls that arrive before a container has claimed the editor yield
/// `None`: a legitimate ordering race during initial render, where the
/// engine falls back to its default rendering until the container mounts
/// and re-materializes node views.
pub fn node_view_factory(
    editor: EditorHandle,
    component: Rc<dyn ViewComponent>,
    options: NodeViewOptions,
) -> NodeViewFactory {
    Rc::new(move |args: NodeViewArgs| {
        if editor.content_view().is_none() {
            return None;
        }
        Some(Box::new(NodeViewAdapter::new(
            editor.clone(),
            component.clone(),
            args,
            options.clone(),
        )))
    })
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
