//! Variable identity arena
//!
//! All analysis maps are keyed by an opaque `VarId` handed out at first
//! sight of a name; the name itself is retained only for reporting.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Opaque variable identifier (index into the owning `VarTable`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VarId(pub u32);

/// Interning arena for variable names
///
/// Known limitation: the front end delivers lexical names, so two distinct
/// variables sharing a name in different scopes intern to the same `VarId`
/// and are indistinguishable to the analysis. Scope-aware identity would
/// need declaration ids from the front end.
#[derive(Debug, Clone, Default)]
pub struct VarTable {
    names: Vec<String>,
    index: FxHashMap<String, VarId>,
}

impl VarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name, returning its id (existing id if already seen)
    pub fn intern(&mut self, name: &str) -> VarId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = VarId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Look up a name without interning it
    pub fn lookup(&self, name: &str) -> Option<VarId> {
        self.index.get(name).copied()
    }

    /// Resolve an id back to its name (for reporting)
    pub fn name(&self, id: VarId) -> &str {
        &self.names[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Drop all interned names
    pub fn clear(&mut self) {
        self.names.clear();
        self.index.clear();
    }
}
