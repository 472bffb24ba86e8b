//! Domain layer: session state and findings

pub mod finding;
pub mod session;

pub use finding::Finding;
pub use session::{AnalysisSession, KEY_POINT_MARKER};
