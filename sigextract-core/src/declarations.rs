//! Wire and register declaration matching.
//!
//! A declaration site is the keyword (`wire` or `reg`), up to two bracketed
//! dimensions, whitespace and an identifier, optionally closed by `;`.
//! Occurrences whose keyword follows `input` or `output` are port
//! declarations and are skipped.
//!
//! Matching is purely textual: comments and strings are not special, and the
//! keyword is not required to start a word.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Kind of an internal signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Wire,
    Register,
}

impl SignalKind {
    /// Keyword that introduces a declaration of this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Wire => "wire",
            Self::Register => "reg",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire => f.write_str("wire"),
            Self::Register => f.write_str("register"),
        }
    }
}

/// One textual occurrence of a wire or register declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Bracketed dimensions as written, concatenated; empty when absent
    pub dimension: String,
    /// Signal identifier
    pub name: String,
}

impl Declaration {
    pub fn new(dimension: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            name: name.into(),
        }
    }
}

fn declaration_pattern(keyword: &str) -> String {
    format!(
        r"{keyword}\s*(?P<dims>(?:\[[`A-Za-z0-9_\-+:*/ ]+\][ ]*){{0,2}})\s+(?P<name>[A-Za-z0-9_$]+)\s*;?"
    )
}

fn wire_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(&declaration_pattern("wire")).expect("Hardcoded regex pattern is valid")
    })
}

fn reg_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(&declaration_pattern("reg")).expect("Hardcoded regex pattern is valid")
    })
}

fn regex_for(kind: SignalKind) -> &'static Regex {
    match kind {
        SignalKind::Wire => wire_regex(),
        SignalKind::Register => reg_regex(),
    }
}

/// Returns true when `before` ends in `input` or `output` followed by a
/// whitespace run of at most `limit` characters (`None` = any length).
pub fn is_port_prefixed(before: &str, limit: Option<usize>) -> bool {
    let stripped = before.trim_end_matches(char::is_whitespace);
    let gap = before[stripped.len()..].chars().count();
    if limit.is_some_and(|max| gap > max) {
        return false;
    }
    stripped.ends_with("input") || stripped.ends_with("output")
}

/// Joins the bracket tokens of a dimension run, dropping the spaces between them.
fn join_dimensions(dims: &str) -> String {
    let mut out = String::with_capacity(dims.len());
    let mut depth = 0usize;
    for c in dims.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            c if depth == 0 && c.is_whitespace() => continue,
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Extracts every non-port declaration of `kind`, in source order.
///
/// A rejected port candidate does not consume its window: scanning resumes
/// one character after the rejected keyword.
pub fn extract_declarations(
    source: &str,
    kind: SignalKind,
    port_gap_limit: Option<usize>,
) -> Vec<Declaration> {
    let re = regex_for(kind);
    let mut found = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let Some(caps) = re.captures_at(source, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if is_port_prefixed(&source[..whole.start()], port_gap_limit) {
            // keywords are ASCII, so one byte past the start is a char boundary
            pos = whole.start() + 1;
            continue;
        }

        let dimension = caps
            .name("dims")
            .map(|m| join_dimensions(m.as_str()))
            .unwrap_or_default();
        let name = caps.name("name").map(|m| m.as_str()).unwrap_or_default();
        found.push(Declaration::new(dimension, name));

        pos = whole.end();
    }

    tracing::debug!(kind = %kind, count = found.len(), "declarations matched");
    found
}

/// Extracts internal wires.
pub fn extract_wires(source: &str, port_gap_limit: Option<usize>) -> Vec<Declaration> {
    extract_declarations(source, SignalKind::Wire, port_gap_limit)
}

/// Extracts internal registers.
pub fn extract_registers(source: &str, port_gap_limit: Option<usize>) -> Vec<Declaration> {
    extract_declarations(source, SignalKind::Register, port_gap_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PORT_GAP_LIMIT;

    const LIMIT: Option<usize> = Some(DEFAULT_PORT_GAP_LIMIT);

    #[test]
    fn test_simple_wire_with_dimension() {
        let result = extract_wires("wire [7:0] foo;", LIMIT);
        assert_eq!(result, vec![Declaration::new("[7:0]", "foo")]);
    }

    #[test]
    fn test_no_dimension_and_no_semicolon() {
        let result = extract_registers("  reg busy\nendmodule", LIMIT);
        assert_eq!(result, vec![Declaration::new("", "busy")]);
    }

    #[test]
    fn test_ports_are_excluded() {
        let content = r#"
module top (
    input wire clk,
    input  wire [3:0] sel,
    output reg [7:0] data,
    output      reg valid
);
    wire [3:0] internal_a;
    reg internal_b;
endmodule
"#;
        assert_eq!(
            extract_wires(content, LIMIT),
            vec![Declaration::new("[3:0]", "internal_a")]
        );
        assert_eq!(
            extract_registers(content, LIMIT),
            vec![Declaration::new("", "internal_b")]
        );
    }

    #[test]
    fn test_port_keyword_without_space() {
        assert!(extract_wires("inputwire clk;", LIMIT).is_empty());
    }

    #[test]
    fn test_port_gap_bound() {
        let at_limit = format!("input{}wire a;", " ".repeat(16));
        let past_limit = format!("input{}wire a;", " ".repeat(17));

        assert!(extract_wires(&at_limit, LIMIT).is_empty());
        assert_eq!(
            extract_wires(&past_limit, LIMIT),
            vec![Declaration::new("", "a")]
        );
        assert!(extract_wires(&past_limit, None).is_empty());
    }

    #[test]
    fn test_port_gap_spans_newlines_and_tabs() {
        assert!(extract_registers("output\n\treg q;", LIMIT).is_empty());
    }

    #[test]
    fn test_two_dimensions_are_joined() {
        let result = extract_registers("reg [7:0] [WIDTH-1:0] mem;", LIMIT);
        assert_eq!(result, vec![Declaration::new("[7:0][WIDTH-1:0]", "mem")]);
    }

    #[test]
    fn test_dimension_characters() {
        let result = extract_wires("wire [`BUS_W*2/4 + 1 : 0] bus_$x;", LIMIT);
        assert_eq!(result, vec![Declaration::new("[`BUS_W*2/4 + 1 : 0]", "bus_$x")]);
    }

    #[test]
    fn test_source_order_and_duplicates() {
        let content = "reg a;\nreg [3:0] b;\nreg a;\n";
        let result = extract_registers(content, LIMIT);
        assert_eq!(
            result,
            vec![
                Declaration::new("", "a"),
                Declaration::new("[3:0]", "b"),
                Declaration::new("", "a"),
            ]
        );
    }

    #[test]
    fn test_reg_prefix_of_identifier_is_not_a_declaration() {
        assert!(extract_registers("regfile_t regs;", LIMIT).is_empty());
    }

    #[test]
    fn test_rejected_port_window_is_rescanned() {
        // the port match swallows the second `reg`, which must still be found
        let result = extract_registers("output reg reg q;", LIMIT);
        assert_eq!(result, vec![Declaration::new("", "q")]);
    }

    #[test]
    fn test_is_port_prefixed() {
        assert!(is_port_prefixed("input ", LIMIT));
        assert!(is_port_prefixed("  output", LIMIT));
        assert!(!is_port_prefixed("inout ", LIMIT));
        assert!(!is_port_prefixed("", LIMIT));
        assert!(!is_port_prefixed("input x ", LIMIT));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SignalKind::Wire.to_string(), "wire");
        assert_eq!(SignalKind::Register.to_string(), "register");
        assert_eq!(SignalKind::Register.keyword(), "reg");
    }
}
