//! Ports: the boundary the external syntax front end plugs into
//!
//! Parsing source text is out of scope for this crate; a front end walks
//! the program and delivers the constructs of interest as typed events.
//! Tests construct events directly.

use std::path::Path;

use crate::errors::Result;
use crate::shared::models::ConstructEvent;

/// Syntax front end supplying construct events for one input file
///
/// A parse failure is fatal for that input and must surface as
/// [`crate::errors::InflowError::FrontEnd`]; the analysis then produces no
/// findings for the file.
pub trait SyntaxFrontEnd {
    fn constructs(&mut self, path: &Path) -> Result<Vec<ConstructEvent>>;
}
