//! Arena-backed binary decision tree.

use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::{Answer, DiagnosisRecord};

/// Handle to a node inside a [`DecisionTree`].
pub type NodeRef = Index;

/// A node is either a yes/no question with exactly two children or a
/// terminal diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Question {
        text: String,
        yes_branch: NodeRef,
        no_branch: NodeRef,
    },
    Diagnosis(DiagnosisRecord),
}

impl Node {
    pub fn is_diagnosis(&self) -> bool {
        matches!(self, Node::Diagnosis(_))
    }

    pub fn question(&self) -> Option<&str> {
        match self {
            Node::Question { text, .. } => Some(text),
            Node::Diagnosis(_) => None,
        }
    }

    pub fn diagnosis(&self) -> Option<&DiagnosisRecord> {
        match self {
            Node::Question { .. } => None,
            Node::Diagnosis(record) => Some(record),
        }
    }

    /// Child reached by `answer`, None for diagnosis nodes.
    pub fn branch(&self, answer: Answer) -> Option<NodeRef> {
        match (self, answer) {
            (Node::Question { yes_branch, .. }, Answer::Yes) => Some(*yes_branch),
            (Node::Question { no_branch, .. }, Answer::No) => Some(*no_branch),
            (Node::Diagnosis(_), _) => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Question { text, .. } => write!(f, "{}", text),
            Node::Diagnosis(record) => write!(f, "{}", record),
        }
    }
}

/// Immutable decision tree.
///
/// Only [`crate::domain::TreeBuilder`] creates instances, inserting children
/// before their parents, so every `NodeRef` stored in a question points at a
/// live node and the structure is a strict tree rooted at `root`.
#[derive(Debug)]
pub struct DecisionTree {
    arena: Arena<Node>,
    root: NodeRef,
}

impl DecisionTree {
    pub(crate) fn from_parts(arena: Arena<Node>, root: NodeRef) -> Self {
        Self { arena, root }
    }

    pub fn root(&self) -> NodeRef {
        self.root
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, idx: NodeRef) -> Option<&Node> {
        self.arena.get(idx)
    }

    /// Node lookup for handles handed out by this tree.
    pub(crate) fn node(&self, idx: NodeRef) -> &Node {
        &self.arena[idx]
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn question_count(&self) -> usize {
        self.arena.iter().filter(|(_, n)| !n.is_diagnosis()).count()
    }

    pub fn diagnosis_count(&self) -> usize {
        self.arena.iter().filter(|(_, n)| n.is_diagnosis()).count()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Number of questions on the longest root-to-diagnosis path.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, idx: NodeRef) -> usize {
        match self.get(idx) {
            Some(Node::Question {
                yes_branch,
                no_branch,
                ..
            }) => {
                1 + self
                    .calculate_depth(*yes_branch)
                    .max(self.calculate_depth(*no_branch))
            }
            Some(Node::Diagnosis(_)) | None => 0,
        }
    }

    /// Diagnosis records in pre-order, yes-branch first.
    #[instrument(level = "debug", skip(self))]
    pub fn diagnoses(&self) -> Vec<&DiagnosisRecord> {
        self.iter()
            .filter_map(|(_, node, _)| node.diagnosis())
            .collect()
    }

    /// Answers leading from the root to the diagnosis named `condition`.
    ///
    /// Matching ignores ASCII case. Returns None when no leaf carries that condition.
    #[instrument(level = "debug", skip(self))]
    pub fn path_to(&self, condition: &str) -> Option<Vec<Answer>> {
        let mut stack = vec![(self.root, Vec::new())];

        while let Some((idx, path)) = stack.pop() {
            match self.get(idx)? {
                Node::Diagnosis(record) => {
                    if record.condition.eq_ignore_ascii_case(condition.trim()) {
                        return Some(path);
                    }
                }
                Node::Question {
                    yes_branch,
                    no_branch,
                    ..
                } => {
                    let mut no_path = path.clone();
                    no_path.push(Answer::No);
                    stack.push((*no_branch, no_path));

                    let mut yes_path = path;
                    yes_path.push(Answer::Yes);
                    stack.push((*yes_branch, yes_path));
                }
            }
        }
        None
    }
}

/// Pre-order walk yielding `(handle, node, depth)`; the root has depth 0.
pub struct TreeIterator<'a> {
    tree: &'a DecisionTree,
    stack: Vec<(NodeRef, usize)>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a DecisionTree) -> Self {
        Self {
            tree,
            stack: vec![(tree.root(), 0)],
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (NodeRef, &'a Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, depth)) = self.stack.pop() {
            if let Some(node) = self.tree.get(idx) {
                // no pushed first so yes is visited first
                if let Node::Question {
                    yes_branch,
                    no_branch,
                    ..
                } = node
                {
                    self.stack.push((*no_branch, depth + 1));
                    self.stack.push((*yes_branch, depth + 1));
                }
                return Some((idx, node, depth));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::{Branch, TreeBuilder};
    use crate::domain::entities::Severity;

    fn leaf(name: &str) -> Branch {
        Branch::diagnosis(DiagnosisRecord::new(
            name,
            Severity::Mild,
            "d",
            "r",
            "m",
            "w",
            "p",
        ))
    }

    //        q1
    //       /  \
    //      A    q2
    //          /  \
    //         B    C
    fn small_tree() -> DecisionTree {
        TreeBuilder::build(Branch::question(
            "q1",
            leaf("A"),
            Branch::question("q2", leaf("B"), leaf("C")),
        ))
    }

    #[test]
    fn given_small_tree_when_iterating_then_visits_yes_branch_first() {
        let tree = small_tree();
        let labels: Vec<(String, usize)> = tree
            .iter()
            .map(|(_, node, depth)| (node.to_string(), depth))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("q1".to_string(), 0),
                ("A (MILD)".to_string(), 1),
                ("q2".to_string(), 1),
                ("B (MILD)".to_string(), 2),
                ("C (MILD)".to_string(), 2),
            ]
        );
    }

    #[test]
    fn given_small_tree_when_counting_then_reports_questions_and_leaves() {
        let tree = small_tree();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.question_count(), 2);
        assert_eq!(tree.diagnosis_count(), 3);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn given_single_leaf_when_depth_then_zero() {
        let tree = TreeBuilder::build(leaf("only"));
        assert_eq!(tree.depth(), 0);
        assert!(tree.node(tree.root()).is_diagnosis());
    }

    #[test]
    fn given_condition_when_path_to_then_returns_answers() {
        let tree = small_tree();
        assert_eq!(tree.path_to("a"), Some(vec![Answer::Yes]));
        assert_eq!(tree.path_to("C"), Some(vec![Answer::No, Answer::No]));
        assert_eq!(tree.path_to("missing"), None);
    }

    #[test]
    fn given_question_node_when_branching_then_follows_answer() {
        let tree = small_tree();
        let root = tree.node(tree.root());
        let yes = root.branch(Answer::Yes).unwrap();
        assert_eq!(tree.node(yes).diagnosis().unwrap().condition, "A");
        assert!(tree.node(yes).branch(Answer::No).is_none());
    }
}
