/*
 * Key Point Registry
 *
 * Records program locations the programmer marked as decision points: a
 * label whose text contains "key_point" registers its line. Identification
 * is by label text, not CFG dominance.
 */

use crate::features::input_influence::domain::AnalysisSession;

/// Registers marked labels as key points
#[derive(Debug, Default)]
pub struct KeyPointRegistry;

impl KeyPointRegistry {
    pub fn new() -> Self {
        KeyPointRegistry
    }

    /// Register a label; set-once per line
    ///
    /// Returns true when the label carries the key-point marker, whether or
    /// not the line was already registered — the discovery diagnostic fires
    /// on every marked label.
    pub fn register(&self, session: &mut AnalysisSession, line: u32, label: &str) -> bool {
        session.register_key_point(line, label)
    }
}
