/*
Render a decision tree with termtree.
Each child label carries the answer that leads to it.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::{DecisionTree, Node, NodeRef};

pub trait TreeView {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeView for DecisionTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build(tree: &DecisionTree, idx: NodeRef, prefix: &str) -> Tree<String> {
            match tree.get(idx) {
                Some(Node::Question {
                    text,
                    yes_branch,
                    no_branch,
                }) => Tree::new(format!("{}{}", prefix, text)).with_leaves([
                    build(tree, *yes_branch, "yes: "),
                    build(tree, *no_branch, "no: "),
                ]),
                Some(Node::Diagnosis(record)) => Tree::new(format!(
                    "{}{} [{}]",
                    prefix, record.condition, record.severity
                )),
                None => Tree::new(format!("{}<missing node>", prefix)),
            }
        }

        build(self, self.root(), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::{Branch, TreeBuilder};
    use crate::domain::entities::{DiagnosisRecord, Severity};

    #[test]
    fn given_tree_when_rendered_then_labels_branches() {
        let tree = TreeBuilder::build(Branch::question(
            "Fever?",
            Branch::diagnosis(DiagnosisRecord::new("FLU", Severity::Moderate, "", "", "", "", "")),
            Branch::diagnosis(DiagnosisRecord::new("WELL", Severity::Mild, "", "", "", "", "")),
        ));

        let rendered = tree.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Fever?");
        assert!(lines[1].ends_with("yes: FLU [MODERATE]"));
        assert!(lines[2].ends_with("no: WELL [MILD]"));
    }
}
