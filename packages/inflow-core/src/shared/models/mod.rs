//! Shared data models
//!
//! Construct events delivered by the syntax front end and the variable
//! identity arena that keys all analysis state.

pub mod event;
pub mod var;

pub use event::{ArgShape, AssignRhs, ComparisonOp, ConstructEvent};
pub use var::{VarId, VarTable};
