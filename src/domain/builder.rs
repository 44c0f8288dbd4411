//! Declarative tree construction.
//!
//! A [`Branch`] owns its children, so a parent can only be composed from
//! subtrees that already exist. [`TreeBuilder`] then lowers the owned value
//! into an arena, inserting both children before their parent.

use generational_arena::Arena;
use tracing::{debug, instrument};

use crate::domain::arena::{DecisionTree, Node, NodeRef};
use crate::domain::entities::DiagnosisRecord;

/// Owned description of a (sub)tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    Question {
        text: String,
        yes: Box<Branch>,
        no: Box<Branch>,
    },
    Diagnosis(DiagnosisRecord),
}

impl Branch {
    pub fn question(text: impl Into<String>, yes: Branch, no: Branch) -> Self {
        Branch::Question {
            text: text.into(),
            yes: Box::new(yes),
            no: Box::new(no),
        }
    }

    pub fn diagnosis(record: DiagnosisRecord) -> Self {
        Branch::Diagnosis(record)
    }

    /// Total number of nodes in this subtree.
    pub fn len(&self) -> usize {
        match self {
            Branch::Question { yes, no, .. } => 1 + yes.len() + no.len(),
            Branch::Diagnosis(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Moves a [`Branch`] into an arena-backed [`DecisionTree`].
pub struct TreeBuilder {
    arena: Arena<Node>,
}

impl TreeBuilder {
    #[instrument(level = "debug", skip(branch))]
    pub fn build(branch: Branch) -> DecisionTree {
        let mut builder = Self {
            arena: Arena::with_capacity(branch.len()),
        };
        let root = builder.insert(branch);
        debug!(nodes = builder.arena.len(), "decision tree built");
        DecisionTree::from_parts(builder.arena, root)
    }

    fn insert(&mut self, branch: Branch) -> NodeRef {
        match branch {
            Branch::Diagnosis(record) => self.arena.insert(Node::Diagnosis(record)),
            Branch::Question { text, yes, no } => {
                let yes_branch = self.insert(*yes);
                let no_branch = self.insert(*no);
                self.arena.insert(Node::Question {
                    text,
                    yes_branch,
                    no_branch,
                })
            }
        }
    }
}
