//! Infrastructure layer: the five analysis components and the report writer

pub mod dependency_propagator;
pub mod influence_checker;
pub mod key_point_registry;
pub mod report;
pub mod sentinel_detector;
pub mod source_collector;

pub use dependency_propagator::DependencyPropagator;
pub use influence_checker::ControlFlowInfluenceChecker;
pub use key_point_registry::KeyPointRegistry;
pub use report::ReportWriter;
pub use sentinel_detector::SentinelComparisonDetector;
pub use source_collector::InputSourceCollector;
