//! # Vellum DOM
//!
//! Single-threaded retained DOM primitives shared by the document engine
//! and the UI tree.
//!
//! Unlike a value-typed virtual DOM, nodes here are live handles
//! (`Rc<RefCell<_>>`): two handles to the same node compare equal, moving
//! a node between parents preserves its identity, and mutations made
//! through one handle are visible through every other. This matters
//! because the engine and the UI tree both hold references into the same
//! subtrees and reparent each other's nodes during mount/unmount.
//!
//! [`NodeSnapshot`] provides an immutable, serializable copy of a subtree
//! for assertions and debugging.

mod node;
mod snapshot;

pub use node::{Element, Node, Text};
pub use snapshot::NodeSnapshot;
