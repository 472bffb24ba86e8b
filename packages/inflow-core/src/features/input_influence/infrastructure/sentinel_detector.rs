/*
 * Sentinel Comparison Detector
 *
 * Flags equality/inequality comparisons of tainted variables against the
 * canonical end-of-stream sentinel -(1). Such a comparison suggests the
 * program is sensitive to input length rather than input value. Requires
 * only the taint map; key points play no part.
 */

use tracing::debug;

use crate::features::input_influence::domain::{AnalysisSession, Finding};

/// Detects tainted operands of end-of-stream sentinel comparisons
#[derive(Debug, Default)]
pub struct SentinelComparisonDetector;

impl SentinelComparisonDetector {
    pub fn new() -> Self {
        SentinelComparisonDetector
    }

    /// Check the variable operand of a sentinel comparison
    ///
    /// The front end already recognized the -(1) pattern on the other
    /// side; `operand` is None when that side is not a bare variable
    /// reference, which skips the comparison entirely. The finding names
    /// the variable itself, not its root.
    pub fn check_comparison(
        &self,
        session: &AnalysisSession,
        operand: Option<&str>,
    ) -> Option<Finding> {
        let name = operand?;
        if !session.is_tainted(name) {
            return None;
        }

        debug!("sentinel comparison on tainted variable {}", name);
        Some(Finding::Sentinel {
            variable: name.to_string(),
        })
    }
}
