//! Analysis session state
//!
//! One session owns every map the analysis mutates: the variable arena,
//! the taint map (variable → root input variable), the key-point registry
//! and the ordered list of registered input sources. The session lives for
//! one analysis run; `reset` gives drivers per-file isolation when they
//! want it instead of the default accumulate-across-files behavior.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::shared::models::{VarId, VarTable};

/// Marker substring a label must contain to count as a key point
pub const KEY_POINT_MARKER: &str = "key_point";

/// Mutable state of one analysis run
///
/// Pass 1 is the only writer; passes 2 and 3 read the completed state.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    vars: VarTable,
    /// variable → root input variable; set-once, never deleted
    taint: FxHashMap<VarId, VarId>,
    /// key-point line → label text; set-once per line
    key_points: FxHashMap<u32, String>,
    /// registered input sources in first-registration order, deduplicated
    input_vars: Vec<VarId>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable as an external-input source (root = itself)
    ///
    /// Idempotent: a second registration of the same name is a no-op.
    pub fn register_source(&mut self, name: &str) {
        let id = self.vars.intern(name);
        if self.taint.contains_key(&id) {
            return;
        }
        self.taint.insert(id, id);
        self.input_vars.push(id);
        debug!("registered input source: {}", name);
    }

    /// Attempt to record `dest`'s root; first recorded root wins
    ///
    /// Returns false when `dest` already had an entry.
    pub fn taint_from(&mut self, dest: &str, root: VarId) -> bool {
        let dest_id = self.vars.intern(dest);
        if self.taint.contains_key(&dest_id) {
            return false;
        }
        self.taint.insert(dest_id, root);
        debug!("taint: {} <- root {}", dest, self.vars.name(root));
        true
    }

    /// Root input variable of `name`, if tainted
    pub fn root_of(&self, name: &str) -> Option<VarId> {
        let id = self.vars.lookup(name)?;
        self.taint.get(&id).copied()
    }

    pub fn is_tainted(&self, name: &str) -> bool {
        self.root_of(name).is_some()
    }

    /// Record a key point at `line`; set-once per line
    ///
    /// Only labels containing [`KEY_POINT_MARKER`] are recorded. Returns
    /// whether the label carries the marker (callers report every marked
    /// label, registered or not).
    pub fn register_key_point(&mut self, line: u32, label: &str) -> bool {
        if !label.contains(KEY_POINT_MARKER) {
            return false;
        }
        if !self.key_points.contains_key(&line) {
            self.key_points.insert(line, label.to_string());
            debug!("key point at line {}: {}", line, label);
        }
        true
    }

    /// Label text of the key point at `line`, if registered
    pub fn key_point(&self, line: u32) -> Option<&str> {
        self.key_points.get(&line).map(String::as_str)
    }

    /// Reporting name of a variable id
    pub fn var_name(&self, id: VarId) -> &str {
        self.vars.name(id)
    }

    /// Registered input sources in first-registration order
    pub fn input_var_names(&self) -> Vec<&str> {
        self.input_vars.iter().map(|&id| self.vars.name(id)).collect()
    }

    pub fn tainted_count(&self) -> usize {
        self.taint.len()
    }

    pub fn key_point_count(&self) -> usize {
        self.key_points.len()
    }

    /// Drop all state; the session is reusable for a fresh run
    pub fn reset(&mut self) {
        self.vars.clear();
        self.taint.clear();
        self.key_points.clear();
        self.input_vars.clear();
        debug!("session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_source_roots_itself() {
        let mut session = AnalysisSession::new();
        session.register_source("x");

        let root = session.root_of("x").unwrap();
        assert_eq!(session.var_name(root), "x");
    }

    #[test]
    fn test_register_source_idempotent() {
        let mut session = AnalysisSession::new();
        session.register_source("x");
        session.register_source("x");

        assert_eq!(session.tainted_count(), 1);
        assert_eq!(session.input_var_names(), vec!["x"]);
    }

    #[test]
    fn test_taint_entry_set_once() {
        let mut session = AnalysisSession::new();
        session.register_source("a");
        session.register_source("b");
        let root_a = session.root_of("a").unwrap();
        let root_b = session.root_of("b").unwrap();

        assert!(session.taint_from("d", root_a));
        assert!(!session.taint_from("d", root_b));
        assert_eq!(session.root_of("d"), Some(root_a));
    }

    #[test]
    fn test_source_registration_wins_over_later_propagation() {
        let mut session = AnalysisSession::new();
        session.register_source("x");
        let root_x = session.root_of("x").unwrap();

        session.register_source("y");
        let root_y = session.root_of("y").unwrap();
        assert!(!session.taint_from("y", root_x));
        assert_eq!(session.root_of("y"), Some(root_y));
    }

    #[test]
    fn test_key_point_set_once_per_line() {
        let mut session = AnalysisSession::new();
        assert!(session.register_key_point(10, "key_point_first"));
        assert!(session.register_key_point(10, "key_point_second"));

        assert_eq!(session.key_point(10), Some("key_point_first"));
        assert_eq!(session.key_point_count(), 1);
    }

    #[test]
    fn test_label_without_marker_not_registered() {
        let mut session = AnalysisSession::new();
        assert!(!session.register_key_point(5, "loop_start"));

        assert_eq!(session.key_point(5), None);
        assert_eq!(session.key_point_count(), 0);
    }

    #[test]
    fn test_untainted_lookup_misses() {
        let session = AnalysisSession::new();
        assert_eq!(session.root_of("w"), None);
        assert!(!session.is_tainted("w"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = AnalysisSession::new();
        session.register_source("x");
        session.register_key_point(3, "key_point_1");

        session.reset();

        assert_eq!(session.tainted_count(), 0);
        assert_eq!(session.key_point_count(), 0);
        assert!(session.input_var_names().is_empty());
        assert_eq!(session.root_of("x"), None);
    }
}
