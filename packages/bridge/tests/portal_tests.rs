//! Portal registry ordering and the renderer's commit/orphan behavior.

mod common;

use common::{mounted_editor, node_view_args, wrapper_component, ProbeComponent, StubEngine};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::rc::Rc;
use vellum_bridge::{
    ContentView, EditorHandle, FnComponent, NodeViewAdapter, NodeViewOptions, NodeViewProps,
    PropsPatch, Renderer, RendererOptions, Scheduler,
};
use vellum_dom::Node;
use vellum_engine::{DocNode, NodeType, NodeView};

fn block_node(name: &str) -> DocNode {
    DocNode::with_type(&NodeType::new(name, false, false))
}

#[test]
fn registry_order_matches_mount_order() {
    let (_engine, editor, view) = mounted_editor();

    let mut adapters = Vec::new();
    for name in ["alpha", "beta", "gamma"] {
        adapters.push(NodeViewAdapter::new(
            editor.clone(),
            wrapper_component(),
            node_view_args(&block_node(name)),
            NodeViewOptions::default(),
        ));
    }

    let ids: Vec<_> = adapters
        .iter()
        .map(|adapter| adapter.renderer().id())
        .collect();
    assert_eq!(view.portal_ids(), ids);

    // removing the middle entry never reorders the rest
    adapters[1].destroy();
    editor.scheduler().run_deferred();
    assert_eq!(view.portal_ids(), vec![ids[0], ids[2]]);

    // re-rendering an early entry keeps its position
    adapters[0].renderer().render();
    assert_eq!(view.portal_ids(), vec![ids[0], ids[2]]);
}

#[test]
fn orphaned_renderer_renders_without_dom_effect() {
    common::init_tracing();
    let engine = StubEngine::new();
    let editor = EditorHandle::new(engine.rc(), Scheduler::new());

    // no container attached: the renderer exists but stays unmounted
    let renderer = Renderer::new(
        wrapper_component(),
        RendererOptions::new(&editor, NodeViewProps::new(&editor)),
    );
    assert_eq!(renderer.element().child_count(), 0);

    // once a container attaches, the next render commits for real
    let view = ContentView::new(&editor);
    view.mount();
    renderer.render();
    assert_eq!(view.portal_count(), 1);
    assert_eq!(renderer.element().child_count(), 1);
}

#[test]
fn orphaned_destroy_is_silently_absorbed() {
    common::init_tracing();
    let engine = StubEngine::new();
    let editor = EditorHandle::new(engine.rc(), Scheduler::new());
    let renderer = Renderer::new(
        wrapper_component(),
        RendererOptions::new(&editor, NodeViewProps::new(&editor)),
    );

    renderer.destroy();
    // no container: the deferred removal has nothing to do and must not panic
    editor.scheduler().run_deferred();
}

#[test]
fn update_props_rerenders_synchronously() {
    let (_engine, editor, view) = mounted_editor();
    let component = Rc::new(FnComponent::new(|props, _ctx| {
        let text = props
            .extra
            .get("label")
            .and_then(|value| value.as_str())
            .unwrap_or("empty");
        Node::text(text)
    }));
    let renderer = Renderer::new(
        component,
        RendererOptions::new(&editor, NodeViewProps::new(&editor)),
    );
    assert_eq!(view.portal_count(), 1);
    assert_eq!(renderer.element().text_content(), "empty");

    renderer.update_props(PropsPatch::default().with_extra("label", json!("updated")));
    // visible before the call returns, no scheduler involvement
    assert_eq!(renderer.element().text_content(), "updated");
}

#[test]
fn renderer_merges_patches_over_existing_props() {
    let (_engine, editor, _view) = mounted_editor();
    let (component, log) = ProbeComponent::new();
    let mut props = NodeViewProps::new(&editor);
    props.extra.insert("a".to_string(), json!(1));
    let renderer = Renderer::new(component, RendererOptions::new(&editor, props));

    renderer.update_props(PropsPatch::default().with_extra("b", json!(2)));
    renderer.update_props(PropsPatch::selected(true));

    let last = log.borrow().last().cloned().unwrap();
    assert!(last.selected);
    assert_eq!(last.extra.get("a").unwrap(), &json!(1));
    assert_eq!(last.extra.get("b").unwrap(), &json!(2));
}

#[test]
fn destroy_commits_exactly_one_removal() {
    let (_engine, editor, view) = mounted_editor();
    let mut adapter = NodeViewAdapter::new(
        editor.clone(),
        wrapper_component(),
        node_view_args(&block_node("alpha")),
        NodeViewOptions::default(),
    );
    let element = adapter.renderer().element();
    assert_eq!(element.child_count(), 1);

    adapter.destroy();
    editor.scheduler().run_deferred();

    assert_eq!(view.portal_count(), 0);
    // the portal content was unmounted from the target element
    assert_eq!(element.child_count(), 0);
}
