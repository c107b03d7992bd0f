//! Module name resolution.
//!
//! Looks for `module <name> (` or `module <name> #(` headers. The keyword must
//! not follow a letter, underscore or slash, which keeps `endmodule`,
//! `submodule` and `//module` out. A `$[PREFIX]` placeholder in front of the
//! name is skipped.

use std::sync::OnceLock;

use regex::Regex;

/// Identifier used when the header cannot be resolved to a single name.
pub const FALLBACK_MODULE_NAME: &str = "module";

fn header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"module\s+(?:\$\[PREFIX\])?(?P<name>[A-Za-z_0-9]+)\s*#?\s*\(")
            .expect("Hardcoded regex pattern is valid")
    })
}

fn blocks_header(prev: char) -> bool {
    prev.is_ascii_alphabetic() || prev == '_' || prev == '/'
}

/// Outcome of resolving the module name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleResolution {
    /// Resolved name, or [`FALLBACK_MODULE_NAME`]
    pub name: String,
    /// Every header name found, in source order
    pub candidates: Vec<String>,
}

impl ModuleResolution {
    /// True when zero or several headers were found and the fallback is in use.
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() != 1
    }
}

/// Collects the names of all module headers in source order.
pub fn find_module_headers(source: &str) -> Vec<String> {
    let re = header_regex();
    let mut names = Vec::new();
    let mut pos = 0;

    while pos < source.len() {
        let Some(caps) = re.captures_at(source, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        let blocked = source[..whole.start()]
            .chars()
            .next_back()
            .is_some_and(blocks_header);
        if blocked {
            pos = whole.start() + 1;
            continue;
        }

        if let Some(name) = caps.name("name") {
            names.push(name.as_str().to_string());
        }
        pos = whole.end();
    }

    names
}

/// Resolves the module identifier, falling back when the result is ambiguous.
pub fn resolve_module_name(source: &str) -> ModuleResolution {
    let candidates = find_module_headers(source);
    let name = match candidates.as_slice() {
        [only] => only.clone(),
        _ => {
            tracing::warn!(
                found = candidates.len(),
                fallback = FALLBACK_MODULE_NAME,
                "module name could not be identified"
            );
            FALLBACK_MODULE_NAME.to_string()
        }
    };

    ModuleResolution { name, candidates }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_header() {
        let result = resolve_module_name("module counter (\n input wire clk\n);\nendmodule\n");
        assert_eq!(result.name, "counter");
        assert!(!result.is_ambiguous());
    }

    #[test]
    fn test_parameterized_header() {
        let content = "module fifo\n  #(parameter DEPTH = 8)\n  (input wire clk);\nendmodule";
        assert_eq!(resolve_module_name(content).name, "fifo");
    }

    #[test]
    fn test_prefix_placeholder() {
        let result = resolve_module_name("module $[PREFIX]core_top (\n);\nendmodule");
        assert_eq!(result.name, "core_top");
    }

    #[test]
    fn test_no_header_falls_back() {
        let result = resolve_module_name("wire a;\nreg b;\n");
        assert_eq!(result.name, FALLBACK_MODULE_NAME);
        assert!(result.is_ambiguous());
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn test_two_headers_fall_back() {
        let content = "module a (\n);\nendmodule\nmodule b (\n);\nendmodule\n";
        let result = resolve_module_name(content);
        assert_eq!(result.name, FALLBACK_MODULE_NAME);
        assert_eq!(result.candidates, vec!["a", "b"]);
    }

    #[test]
    fn test_commented_and_embedded_keywords_ignored() {
        let content = "//module ghost (\nsubmodule inner (\nmodule real_one (\n);\nendmodule";
        assert_eq!(find_module_headers(content), vec!["real_one"]);
    }

    #[test]
    fn test_header_without_paren_is_not_counted() {
        assert!(find_module_headers("module top;\nendmodule").is_empty());
    }
}
