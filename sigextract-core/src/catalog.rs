//! Deduplication and aggregation of matched declarations.
//!
//! The same signal is often declared more than once in preprocessed RTL (one
//! declaration per `if`/`else` branch). The catalog keeps the raw occurrence
//! lists for the text report and a deduplicated name → dimension mapping for
//! the CSV export.
//!
//! Ordering is deterministic: name sets and the mapping keep first-seen order,
//! while the mapping value is the dimension of the last occurrence.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::declarations::{Declaration, SignalKind};

/// One deduplicated signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalEntry {
    /// Signal identifier
    pub name: String,
    /// Kind of the last occurrence
    pub kind: SignalKind,
    /// Dimension of the last occurrence
    pub dimension: String,
}

/// Occurrence and uniqueness counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub raw_wires: usize,
    pub raw_registers: usize,
    pub unique_wires: usize,
    pub unique_registers: usize,
    /// `unique_wires + unique_registers`; a name used as both kinds counts twice
    pub unique_total: usize,
}

/// Aggregated extraction result handed to the output writers.
#[derive(Debug, Clone, Default)]
pub struct SignalCatalog {
    wires: Vec<Declaration>,
    registers: Vec<Declaration>,
    unique_wire_names: Vec<String>,
    unique_register_names: Vec<String>,
    entries: Vec<SignalEntry>,
    index: HashMap<String, usize>,
    stats: CatalogStats,
}

/// Distinct names in first-seen order.
fn unique_names(decls: &[Declaration]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(decls.len());
    decls
        .iter()
        .filter(|d| seen.insert(d.name.as_str()))
        .map(|d| d.name.clone())
        .collect()
}

impl SignalCatalog {
    /// Builds the catalog from the raw wire and register lists.
    pub fn build(wires: Vec<Declaration>, registers: Vec<Declaration>) -> Self {
        let unique_wire_names = unique_names(&wires);
        let unique_register_names = unique_names(&registers);

        let mut entries: Vec<SignalEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        let tagged = wires
            .iter()
            .map(|d| (SignalKind::Wire, d))
            .chain(registers.iter().map(|d| (SignalKind::Register, d)));

        for (kind, decl) in tagged {
            match index.get(&decl.name).copied() {
                Some(i) => {
                    entries[i].kind = kind;
                    entries[i].dimension = decl.dimension.clone();
                }
                None => {
                    index.insert(decl.name.clone(), entries.len());
                    entries.push(SignalEntry {
                        name: decl.name.clone(),
                        kind,
                        dimension: decl.dimension.clone(),
                    });
                }
            }
        }

        let stats = CatalogStats {
            raw_wires: wires.len(),
            raw_registers: registers.len(),
            unique_wires: unique_wire_names.len(),
            unique_registers: unique_register_names.len(),
            unique_total: unique_wire_names.len() + unique_register_names.len(),
        };

        Self {
            wires,
            registers,
            unique_wire_names,
            unique_register_names,
            entries,
            index,
            stats,
        }
    }

    /// Raw wire occurrences in source order.
    pub fn wires(&self) -> &[Declaration] {
        &self.wires
    }

    /// Raw register occurrences in source order.
    pub fn registers(&self) -> &[Declaration] {
        &self.registers
    }

    pub fn unique_wire_names(&self) -> &[String] {
        &self.unique_wire_names
    }

    pub fn unique_register_names(&self) -> &[String] {
        &self.unique_register_names
    }

    /// Deduplicated signals in mapping order.
    pub fn entries(&self) -> &[SignalEntry] {
        &self.entries
    }

    /// Looks up a signal by name.
    pub fn get(&self, name: &str) -> Option<&SignalEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Dimension recorded for `name` (last occurrence wins).
    pub fn dimension_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|e| e.dimension.as_str())
    }

    pub fn stats(&self) -> CatalogStats {
        self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
