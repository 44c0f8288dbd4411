//! Domain layer: decision tree, traversal engine and diagnosis data
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod session;
pub mod symptom_tree;
pub mod tree_view;

pub use arena::{DecisionTree, Node, NodeRef, TreeIterator};
pub use builder::{Branch, TreeBuilder};
pub use entities::*;
pub use error::DomainError;
pub use session::Session;
pub use symptom_tree::{build_tree, ESTIMATED_TOTAL_QUESTIONS};
pub use tree_view::TreeView;
