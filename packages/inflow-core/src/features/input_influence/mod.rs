// Input-influence analysis: does external input steer the program?
//
// Hexagonal architecture:
// - domain: session state and findings
// - infrastructure: the five analysis components and the report writer
// - ports: boundary the syntax front end plugs into
// - application: the three-pass use case

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-export application layer (primary interface)
pub use application::AnalyzeProgramUseCase;

// Re-export domain types
pub use domain::{AnalysisSession, Finding, KEY_POINT_MARKER};

pub use infrastructure::{
    ControlFlowInfluenceChecker, DependencyPropagator, InputSourceCollector, KeyPointRegistry,
    ReportWriter, SentinelComparisonDetector,
};
pub use ports::SyntaxFrontEnd;
