//! # Vellum Bridge
//!
//! Bridges a document engine's live DOM view layer with a retained-mode
//! UI component tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ engine: document model, transactions, view diff  │
//! └──────────────────────────────────────────────────┘
//!                        ↓ node-view lifecycle calls
//! ┌──────────────────────────────────────────────────┐
//! │ bridge:                                          │
//! │  - NodeViewAdapter: engine contract → props      │
//! │  - Renderer: component instance + portal target  │
//! │  - ContentView: root transplant + portal registry│
//! │  - EditorScope: instance lifetime + refresh      │
//! └──────────────────────────────────────────────────┘
//!                        ↓ synchronous registry commit
//! ┌──────────────────────────────────────────────────┐
//! │ dom: retained tree both sides mutate in place    │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//!
//! The engine owns the document and renders nested editable content
//! directly into each node view's content hole; the UI tree owns the
//! container element and the portal registry. [`ContentView`] is the only
//! owner of the registry, and every mutation goes through its synchronous
//! [`ContentView::commit`] so DOM order always matches the engine's node
//! order at the moment of commit. At most one container claims an editor
//! at a time; a second claim is a silent no-op so remount sequences keep
//! working.

mod component;
mod container;
mod editor;
mod identity;
mod menu;
mod node_view;
mod props;
mod registry;
mod renderer;
mod scheduler;
mod scope;

pub use component::{
    node_view_content, node_view_wrapper, ComponentKind, FnComponent, PrimitiveProps,
    RenderContext, ViewComponent,
};
pub use container::ContentView;
pub use editor::EditorHandle;
pub use identity::{IdAllocator, RendererId};
pub use menu::{BubbleMenuView, FloatingMenuView, MenuOptions};
pub use node_view::{
    node_view_factory, NodeViewAdapter, NodeViewOptions, NodeViewUpdate, UpdateFn,
};
pub use props::{NodeViewProps, PropsPatch};
pub use registry::{PortalEntry, PortalRegistry, RegistryOp};
pub use renderer::{Renderer, RendererOptions};
pub use scheduler::Scheduler;
pub use scope::EditorScope;

// Re-export common types for convenience
pub use vellum_dom::{Element, Node, NodeSnapshot, Text};
pub use vellum_engine::{
    DecorationSet, DocNode, DocumentEngine, ExtensionHandle, MenuContext, NodeType, NodeView,
    NodeViewArgs, Plugin, PluginKey, ViewError,
};
