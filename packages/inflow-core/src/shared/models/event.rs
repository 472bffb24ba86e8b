//! Construct events
//!
//! The syntax front end walks the program once and delivers one typed event
//! per construct of interest. The analysis never sees the syntax tree
//! itself, only this stream, which keeps the pass ordering explicit in code
//! rather than implicit in traversal timing.

use serde::{Deserialize, Serialize};

/// Classified shape of one argument at an input-call site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgShape {
    /// `&var` — address-of a variable reference
    AddressOf(String),
    /// `var` — a reference already of pointer/buffer type
    VarRef(String),
    /// Anything else; skipped without error
    Opaque,
}

/// Classified right-hand side of an assignment
///
/// Classification stops at one binary level: function calls, explicit
/// casts, ternaries and deeper expressions arrive as `Opaque` and do not
/// propagate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignRhs {
    /// Right side is exactly one variable reference
    SingleRef(String),
    /// Right side is a two-operand binary expression; each operand is a
    /// variable reference or absent (non-reference operand)
    BinaryRef {
        left: Option<String>,
        right: Option<String>,
    },
    /// Right side is a byte-stream read call (`getc` family)
    ByteReadCall,
    /// Unclassified right side; skipped without error
    Opaque,
}

/// Comparison operator of a sentinel comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    Eq,
    Ne,
}

/// One construct delivered by the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstructEvent {
    /// A call to a formatted-read function (`scanf` family)
    InputCall {
        callee: String,
        /// All argument expressions, format string included at index 0
        args: Vec<ArgShape>,
        line: u32,
    },

    /// A label statement
    Label { text: String, line: u32 },

    /// An assignment with a classified right-hand side
    Assignment {
        dest: String,
        rhs: AssignRhs,
        line: u32,
    },

    /// A variable reference anywhere in the program
    Reference { name: String, line: u32 },

    /// An `==`/`!=` comparison where one operand is the parenthesized
    /// end-of-stream sentinel `-(1)`; `operand` is the other side's
    /// variable name if it is a bare reference after stripping implicit
    /// conversions and parentheses
    SentinelComparison {
        op: ComparisonOp,
        operand: Option<String>,
        line: u32,
    },
}

impl ConstructEvent {
    /// Source line the construct was seen at
    pub fn line(&self) -> u32 {
        match self {
            ConstructEvent::InputCall { line, .. }
            | ConstructEvent::Label { line, .. }
            | ConstructEvent::Assignment { line, .. }
            | ConstructEvent::Reference { line, .. }
            | ConstructEvent::SentinelComparison { line, .. } => *line,
        }
    }
}
