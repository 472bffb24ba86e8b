/*
 * Program Analysis Use Case
 *
 * Orchestrates the three strictly ordered passes over one program's
 * construct events:
 *   1. populate   - sources, key points, assignments (only writer)
 *   2. influence  - every variable reference against the completed state
 *   3. sentinel   - every sentinel comparison against the completed state
 *
 * The ordering is a pipeline invariant: a reference lexically before the
 * assignment that taints its variable is still classified correctly
 * because no check runs until the taint map is complete. The session
 * accumulates across files within one run; `reset` starts over.
 */

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::features::input_influence::domain::{AnalysisSession, Finding};
use crate::features::input_influence::infrastructure::{
    ControlFlowInfluenceChecker, DependencyPropagator, InputSourceCollector, KeyPointRegistry,
    ReportWriter, SentinelComparisonDetector,
};
use crate::features::input_influence::ports::SyntaxFrontEnd;
use crate::shared::models::{AssignRhs, ConstructEvent};

/// Three-pass analysis over construct events, reporting as it goes
pub struct AnalyzeProgramUseCase<W: Write> {
    session: AnalysisSession,
    report: ReportWriter<W>,
    collector: InputSourceCollector,
    key_points: KeyPointRegistry,
    propagator: DependencyPropagator,
    influence: ControlFlowInfluenceChecker,
    sentinel: SentinelComparisonDetector,
}

impl<W: Write> AnalyzeProgramUseCase<W> {
    /// Create a use case writing its report to `out`
    pub fn new(out: W) -> Self {
        Self::with_collector(out, InputSourceCollector::new())
    }

    /// Create with a custom input-source collector (custom read catalogs)
    pub fn with_collector(out: W, collector: InputSourceCollector) -> Self {
        AnalyzeProgramUseCase {
            session: AnalysisSession::new(),
            report: ReportWriter::new(out),
            collector,
            key_points: KeyPointRegistry::new(),
            propagator: DependencyPropagator::new(),
            influence: ControlFlowInfluenceChecker::new(),
            sentinel: SentinelComparisonDetector::new(),
        }
    }

    /// Run the three passes over one file's events
    ///
    /// State accumulates into the session across calls; see
    /// [`AnalyzeProgramUseCase::reset`] for per-file isolation. Findings
    /// are rendered to the report stream immediately and also returned.
    pub fn run_file(&mut self, events: &[ConstructEvent]) -> Result<Vec<Finding>> {
        self.populate(events)?;
        info!(
            "pass 1 complete: {} tainted variables, {} key points",
            self.session.tainted_count(),
            self.session.key_point_count()
        );

        let mut findings = self.check_references(events)?;
        findings.extend(self.check_comparisons(events)?);
        info!("analysis produced {} findings", findings.len());
        Ok(findings)
    }

    /// Drive a syntax front end over one input file
    ///
    /// A front-end failure is fatal for that input: the error propagates
    /// and no findings are produced for the file.
    pub fn analyze_path<F: SyntaxFrontEnd>(
        &mut self,
        front_end: &mut F,
        path: &Path,
    ) -> Result<Vec<Finding>> {
        let events = front_end.constructs(path)?;
        self.run_file(&events)
    }

    /// Pass 1: fold source, label and assignment events into the session
    fn populate(&mut self, events: &[ConstructEvent]) -> Result<()> {
        for event in events {
            match event {
                ConstructEvent::InputCall { callee, args, .. } => {
                    if let Some(vars) =
                        self.collector
                            .collect_scan_call(&mut self.session, callee, args)
                    {
                        self.report.scan_call(&vars)?;
                    }
                }
                ConstructEvent::Label { text, line } => {
                    if self.key_points.register(&mut self.session, *line, text) {
                        self.report.key_point(text, *line)?;
                    }
                }
                ConstructEvent::Assignment { dest, rhs, .. } => match rhs {
                    AssignRhs::ByteReadCall => {
                        self.collector.collect_byte_read(&mut self.session, dest);
                        self.report.byte_read(dest)?;
                    }
                    _ => self
                        .propagator
                        .record_assignment(&mut self.session, dest, rhs),
                },
                // Reference and comparison events belong to passes 2 and 3
                ConstructEvent::Reference { .. } | ConstructEvent::SentinelComparison { .. } => {}
            }
        }
        Ok(())
    }

    /// Pass 2: every variable reference against the completed state
    fn check_references(&mut self, events: &[ConstructEvent]) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();
        for event in events {
            if let ConstructEvent::Reference { name, line } = event {
                if let Some(finding) = self.influence.check_reference(&self.session, name, *line) {
                    self.report.finding(&finding)?;
                    findings.push(finding);
                }
            }
        }
        Ok(findings)
    }

    /// Pass 3: every sentinel comparison against the completed state
    fn check_comparisons(&mut self, events: &[ConstructEvent]) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();
        for event in events {
            if let ConstructEvent::SentinelComparison { operand, .. } = event {
                if let Some(finding) = self
                    .sentinel
                    .check_comparison(&self.session, operand.as_deref())
                {
                    self.report.finding(&finding)?;
                    findings.push(finding);
                }
            }
        }
        Ok(findings)
    }

    /// Accumulated session state (read-only)
    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    /// Drop all accumulated state, keeping the report stream
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Emit the completion marker and return the report stream
    pub fn finish(mut self) -> Result<W> {
        let input_vars: Vec<String> = self
            .session
            .input_var_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        self.report.completion(&input_vars)?;
        Ok(self.report.into_inner())
    }
}
