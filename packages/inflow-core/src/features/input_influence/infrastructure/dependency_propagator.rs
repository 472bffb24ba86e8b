/*
 * Dependency Propagator
 *
 * Extends taint state through assignment statements. Only two right-hand
 * side shapes propagate: a single variable reference, and a two-operand
 * binary expression whose operands are each a variable reference or not.
 * Deeper expressions arrive unclassified and are skipped entirely.
 */

use tracing::trace;

use crate::features::input_influence::domain::AnalysisSession;
use crate::shared::models::AssignRhs;

/// Propagates taint through simple assignments
#[derive(Debug, Default)]
pub struct DependencyPropagator;

impl DependencyPropagator {
    pub fn new() -> Self {
        DependencyPropagator
    }

    /// Record one assignment
    ///
    /// For each operand present, in left-then-right order, a tainted
    /// operand attempts a set-once insertion of `dest -> operand's root`.
    /// When both binary operands are tainted with different roots, both
    /// attempts occur and the left one wins; the tie-break is deliberate
    /// and documented in DESIGN.md. Untainted operands leave `dest`
    /// without an entry.
    pub fn record_assignment(&self, session: &mut AnalysisSession, dest: &str, rhs: &AssignRhs) {
        match rhs {
            AssignRhs::SingleRef(name) => {
                self.propagate_operand(session, dest, name);
            }
            AssignRhs::BinaryRef { left, right } => {
                if let Some(name) = left {
                    self.propagate_operand(session, dest, name);
                }
                if let Some(name) = right {
                    self.propagate_operand(session, dest, name);
                }
            }
            // Byte-read right sides belong to the source collector;
            // unclassified right sides are skipped entirely
            AssignRhs::ByteReadCall | AssignRhs::Opaque => {
                trace!("assignment to {} skipped: rhs not propagatable", dest);
            }
        }
    }

    fn propagate_operand(&self, session: &mut AnalysisSession, dest: &str, operand: &str) {
        if let Some(root) = session.root_of(operand) {
            session.taint_from(dest, root);
        }
    }
}
