/*
 * Control Flow Influence Checker
 *
 * Cross-references tainted variables against key-point lines at every use
 * site. Runs only after the whole program has populated the session: a
 * reference occurring lexically before the assignment that taints its
 * variable must still be classified correctly.
 */

use tracing::debug;

use crate::features::input_influence::domain::{AnalysisSession, Finding};

/// Detects tainted references at key-point lines
#[derive(Debug, Default)]
pub struct ControlFlowInfluenceChecker;

impl ControlFlowInfluenceChecker {
    pub fn new() -> Self {
        ControlFlowInfluenceChecker
    }

    /// Check one variable reference
    ///
    /// Emits an influence finding iff the variable is tainted and the line
    /// is a registered key point; either lookup missing suppresses the
    /// finding silently.
    pub fn check_reference(
        &self,
        session: &AnalysisSession,
        name: &str,
        line: u32,
    ) -> Option<Finding> {
        let root = session.root_of(name)?;
        let label = session.key_point(line)?;

        let root_name = session.var_name(root);
        debug!(
            "influence: {} (root {}) referenced at key point line {}",
            name, root_name, line
        );
        Some(Finding::Influence {
            root: root_name.to_string(),
            label: label.to_string(),
            line,
        })
    }
}
