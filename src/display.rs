/*
Workaround for error: https://doc.rust-lang.org/error_codes/E0116.html
Cannot define inherent `impl` for a type outside of the crate where the type is defined

define a trait that has the desired associated functions/types/constants and implement the trait for the type in question
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::OrgArena;

pub trait OrgChartConvert {
    fn to_org_chart(&self, start: Index) -> Tree<String>;
}

impl OrgChartConvert for OrgArena {
    /// Renders the subtree rooted at `start` as a termtree. Assumes acyclic
    /// wiring; run `count_subordinates` first on untrusted input.
    #[instrument(level = "debug", skip(self))]
    fn to_org_chart(&self, start: Index) -> Tree<String> {
        if let Some(root) = self.get(start) {
            let mut tree = Tree::new(root.name.clone());

            fn build_chart(org: &OrgArena, node_idx: Index, parent_tree: &mut Tree<String>) {
                if let Some(node) = org.get(node_idx) {
                    for &report_idx in &node.reports {
                        if let Some(report) = org.get(report_idx) {
                            let mut report_tree = Tree::new(report.name.clone());
                            build_chart(org, report_idx, &mut report_tree);
                            parent_tree.push(report_tree);
                        }
                    }
                }
            }

            build_chart(self, start, &mut tree);
            tree
        } else {
            Tree::new("Empty hierarchy".to_string())
        }
    }
}
