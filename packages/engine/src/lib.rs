//! # Vellum Engine Contract
//!
//! The surface the bridge consumes from the external document engine.
//!
//! The engine itself (document model, transactions, schema, commands) is
//! an external collaborator; this crate pins down only the integration
//! points the bridge relies on:
//!
//! - [`DocumentEngine`]: element configuration slot, node-view factory
//!   registration, plugin registration, change notification, teardown.
//! - [`NodeView`]: the per-node lifecycle contract the engine drives
//!   (mount happens at construction, then update/selection/destroy).
//! - Shared handle types ([`DocNode`], [`NodeType`], [`DecorationSet`],
//!   [`ExtensionHandle`]) with pointer-identity comparison, matching the
//!   engine's own notion of "same node" / "same decorations".

mod decoration;
mod doc;
mod engine;
mod error;
mod plugin;
mod view;

pub use decoration::{Decoration, DecorationSet};
pub use doc::{DocNode, ExtensionHandle, NodeType};
pub use engine::{DocumentEngine, ListenerId, TransactionListener};
pub use error::ViewError;
pub use plugin::{MenuContext, Plugin, PluginKey, ShouldShow};
pub use view::{
    DeleteNode, GetPos, NodeView, NodeViewArgs, NodeViewFactory, UpdateAttributes,
};
