/*
 * Input Source Collector
 *
 * Recognizes variables populated by external-input operations and seeds
 * the taint state:
 * - destination operands of a formatted-read call (scanf family),
 * - the left-hand side of an assignment from a byte-stream read (getc
 *   family).
 */

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::features::input_influence::domain::AnalysisSession;
use crate::shared::models::ArgShape;

/// Formatted-read functions recognized by default
static DEFAULT_FORMATTED_READS: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["scanf", "fscanf", "sscanf", "vscanf"].into_iter().collect());

/// Recognizes input sources and registers them in the session
#[derive(Debug)]
pub struct InputSourceCollector {
    formatted_reads: FxHashSet<String>,
}

impl InputSourceCollector {
    /// Create a collector with the default read-call catalog
    pub fn new() -> Self {
        InputSourceCollector {
            formatted_reads: DEFAULT_FORMATTED_READS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Create with a custom formatted-read catalog
    pub fn with_catalog(formatted_reads: FxHashSet<String>) -> Self {
        InputSourceCollector { formatted_reads }
    }

    /// Process a formatted-read call site
    ///
    /// Argument index 0 is the format string; every later operand that is
    /// an address-of expression or a bare variable reference is a value
    /// destination and gets registered as a source. Unrecognized argument
    /// shapes and unknown callees are silent no-ops. Returns the
    /// recognized destination names for diagnostics.
    pub fn collect_scan_call(
        &self,
        session: &mut AnalysisSession,
        callee: &str,
        args: &[ArgShape],
    ) -> Option<Vec<String>> {
        if !self.formatted_reads.contains(callee) {
            debug!("ignoring call to {}: not a formatted read", callee);
            return None;
        }

        let mut recognized = Vec::new();
        for arg in args.iter().skip(1) {
            let name = match arg {
                ArgShape::AddressOf(name) | ArgShape::VarRef(name) => name,
                ArgShape::Opaque => continue,
            };
            session.register_source(name);
            recognized.push(name.clone());
        }
        Some(recognized)
    }

    /// Process an assignment whose right side is a byte-stream read call
    ///
    /// The destination variable receives the read value and is registered
    /// as a source.
    pub fn collect_byte_read(&self, session: &mut AnalysisSession, dest: &str) {
        session.register_source(dest);
    }
}

impl Default for InputSourceCollector {
    fn default() -> Self {
        Self::new()
    }
}
