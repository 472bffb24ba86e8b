/*
 * Inflow Core - Input-Influence Analysis Engine
 *
 * Lightweight intraprocedural taint/data-dependence analysis over one
 * program's abstract syntax:
 * - which variables receive values from external input,
 * - how taint propagates through simple assignments,
 * - whether tainted values reach programmer-marked decision points
 *   ("key_point" labels) or end-of-stream sentinel comparisons.
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (construct events, variable arena)
 * - features/    : Vertical slices (input_influence)
 *
 * The syntax front end and the command-line driver live outside this
 * crate; they plug in through the ports layer and the construct-event
 * stream. Single-threaded, synchronous by design: the session is mutated
 * only during pass 1 and read-only for the checking passes.
 */

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{InflowError, Result};
pub use features::input_influence::{
    AnalysisSession, AnalyzeProgramUseCase, Finding, SyntaxFrontEnd,
};
pub use shared::models::{ArgShape, AssignRhs, ComparisonOp, ConstructEvent};
