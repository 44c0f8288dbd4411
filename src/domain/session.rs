//! Traversal engine: one user's walk through a shared decision tree.

use std::ptr;

use tracing::{debug, instrument, trace};

use crate::domain::arena::{DecisionTree, Node, NodeRef};
use crate::domain::entities::{Answer, DiagnosisRecord};

/// Cursor and step counter over a borrowed, immutable [`DecisionTree`].
///
/// Sessions are independent of each other; any number of them may borrow the
/// same tree, including from different threads.
#[derive(Debug, Clone, Copy)]
pub struct Session<'t> {
    tree: &'t DecisionTree,
    cursor: NodeRef,
    step_count: usize,
}

impl<'t> Session<'t> {
    /// Begin an assessment at the root; the root question counts as step 1.
    #[instrument(level = "debug", skip(tree))]
    pub fn start(tree: &'t DecisionTree) -> Self {
        Self {
            tree,
            cursor: tree.root(),
            step_count: 1,
        }
    }

    pub fn cursor(&self) -> NodeRef {
        self.cursor
    }

    /// Questions asked or answered so far, for progress display.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn current_node(&self) -> &'t Node {
        let tree = self.tree;
        tree.node(self.cursor)
    }

    pub fn is_terminal(&self) -> bool {
        self.current_node().is_diagnosis()
    }

    pub fn current_question(&self) -> Option<&'t str> {
        self.current_node().question()
    }

    pub fn current_diagnosis(&self) -> Option<&'t DiagnosisRecord> {
        self.current_node().diagnosis()
    }

    /// Follow the branch for `choice` and return the node now under the cursor.
    ///
    /// Once the session sits on a diagnosis, further answers are ignored and
    /// the session is left untouched.
    pub fn answer(&mut self, choice: Answer) -> &'t Node {
        let node = self.current_node();
        let Some(next) = node.branch(choice) else {
            trace!(%choice, "answer ignored on terminal node");
            return node;
        };

        self.step_count += 1;
        self.cursor = next;
        debug!(
            question = %node,
            %choice,
            step = self.step_count,
            terminal = self.is_terminal(),
            "answered"
        );
        self.current_node()
    }

    /// Return to the root with a zero step count.
    ///
    /// The session then waits at the root, before its first question; call
    /// [`Session::begin`] to ask it.
    #[instrument(level = "debug", skip(self))]
    pub fn restart(&mut self) {
        self.cursor = self.tree.root();
        self.step_count = 0;
    }

    /// Ask the root question as step 1, as [`Session::start`] does.
    #[instrument(level = "debug", skip(self))]
    pub fn begin(&mut self) {
        self.cursor = self.tree.root();
        self.step_count = 1;
    }

    /// `min(step_count / estimated_total, 1.0)`; a zero estimate counts as complete.
    pub fn progress_fraction(&self, estimated_total: usize) -> f64 {
        if estimated_total == 0 {
            return 1.0;
        }
        (self.step_count as f64 / estimated_total as f64).min(1.0)
    }
}

impl PartialEq for Session<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree)
            && self.cursor == other.cursor
            && self.step_count == other.step_count
    }
}

impl Eq for Session<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::{Branch, TreeBuilder};
    use crate::domain::entities::Severity;

    fn tree() -> DecisionTree {
        let leaf = |name: &str| {
            Branch::diagnosis(DiagnosisRecord::new(name, Severity::Mild, "", "", "", "", ""))
        };
        TreeBuilder::build(Branch::question(
            "first?",
            leaf("A"),
            Branch::question("second?", leaf("B"), leaf("C")),
        ))
    }

    #[test]
    fn given_new_session_when_started_then_at_root_with_step_one() {
        let tree = tree();
        let session = Session::start(&tree);
        assert_eq!(session.cursor(), tree.root());
        assert_eq!(session.step_count(), 1);
        assert_eq!(session.current_question(), Some("first?"));
        assert!(!session.is_terminal());
    }

    #[test]
    fn given_question_when_answered_then_moves_and_counts() {
        let tree = tree();
        let mut session = Session::start(&tree);

        let node = session.answer(Answer::No);
        assert_eq!(node.question(), Some("second?"));
        assert_eq!(session.step_count(), 2);

        let node = session.answer(Answer::Yes);
        assert_eq!(node.diagnosis().unwrap().condition, "B");
        assert_eq!(session.step_count(), 3);
        assert!(session.is_terminal());
    }

    #[test]
    fn given_terminal_session_when_answered_then_nothing_changes() {
        let tree = tree();
        let mut session = Session::start(&tree);
        session.answer(Answer::Yes);
        let before = session;

        for _ in 0..3 {
            let node = session.answer(Answer::No);
            assert_eq!(node.diagnosis().unwrap().condition, "A");
        }
        assert_eq!(session, before);
    }

    #[test]
    fn given_finished_session_when_restarted_and_begun_then_matches_fresh_start() {
        let tree = tree();
        let mut session = Session::start(&tree);
        session.answer(Answer::No);
        session.answer(Answer::No);

        session.restart();
        assert_eq!(session.step_count(), 0);
        assert_eq!(session.cursor(), tree.root());

        session.begin();
        assert_eq!(session, Session::start(&tree));
    }

    #[test]
    fn given_zero_estimate_when_progress_then_complete() {
        let tree = tree();
        let session = Session::start(&tree);
        assert_eq!(session.progress_fraction(0), 1.0);
    }
}
