/*
 * Report Writer
 *
 * Renders diagnostics and findings to the report stream. The message
 * templates are part of the external interface and are reproduced
 * byte-for-byte; consumers parse these lines.
 */

use std::io::Write;

use crate::errors::Result;
use crate::features::input_influence::domain::Finding;

/// Writes report lines to any output stream
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        ReportWriter { out }
    }

    /// Diagnostic for a recognized formatted-read call
    pub fn scan_call(&mut self, vars: &[String]) -> Result<()> {
        write!(self.out, "Found a scanf call with variables:")?;
        for name in vars {
            write!(self.out, " {}", name)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Diagnostic for a byte-stream read assigned to a variable
    pub fn byte_read(&mut self, var: &str) -> Result<()> {
        writeln!(self.out, "Found getc() call assigned to variable: {}", var)?;
        Ok(())
    }

    /// Diagnostic for a discovered key-point label
    pub fn key_point(&mut self, label: &str, line: u32) -> Result<()> {
        writeln!(self.out, "{} at line {}", label, line)?;
        Ok(())
    }

    /// Render one finding
    pub fn finding(&mut self, finding: &Finding) -> Result<()> {
        match finding {
            Finding::Influence { root, label, line } => {
                writeln!(
                    self.out,
                    "Input variable: {} may determine the program's execution path!",
                    root
                )?;
                writeln!(
                    self.out,
                    "Reason: variable {} affects {} at line: {} and its value is influenced by input.",
                    root, label, line
                )?;
            }
            Finding::Sentinel { variable } => {
                writeln!(
                    self.out,
                    "Variable {} does not directly affect execution, file length may be critical!",
                    variable
                )?;
            }
        }
        Ok(())
    }

    /// Final line signaling analysis completion, listing registered input
    /// variables in first-registration order
    pub fn completion<S: AsRef<str>>(&mut self, input_vars: &[S]) -> Result<()> {
        write!(self.out, "Tool ran, input var list : ")?;
        for name in input_vars {
            write!(self.out, "{} ", name.as_ref())?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Consume the writer, returning the underlying stream
    pub fn into_inner(self) -> W {
        self.out
    }
}
