//! Analysis findings
//!
//! Findings are rendered to the report stream as soon as they are produced;
//! the session never stores them.

use serde::{Deserialize, Serialize};

/// One reported result of the analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finding {
    /// A tainted variable was referenced at a key-point line: input may
    /// determine the program's execution path
    Influence {
        /// Root input variable the reference derives from
        root: String,
        /// Label text of the key point
        label: String,
        /// Key-point line number
        line: u32,
    },

    /// A tainted variable was compared against the end-of-stream sentinel:
    /// stream length, not the value itself, may be what drives control flow
    Sentinel {
        /// The compared variable (not its root)
        variable: String,
    },
}
