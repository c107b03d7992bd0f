//! Console message table.
//!
//! All user-facing text lives here as fixed templates; callers fill in file
//! names and counts at the point of use.

use std::fmt;
use std::path::Path;

use crate::catalog::CatalogStats;

const RULE: &str = "===========================================================================";
const WIDE_RULE: &str =
    "========================================================================================================";

/// Severity tag printed in front of a console notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

impl NoticeKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Error => "\t***Error: ",
            Self::Success => "\t***Success: ",
            Self::Info => "\t***Info: ",
        }
    }
}

/// A tagged console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.tag(), self.text)
    }
}

pub fn no_input() -> Notice {
    Notice::error(
        "No input arguments were specified. Please use '--filename' followed\n\
         \tby the path of the module to be inspected.",
    )
}

pub fn no_such_file(path: &Path) -> Notice {
    Notice::error(format!(
        "The module file '{}' could not be located - double-check the name or file path.",
        path.display()
    ))
}

pub fn file_read_success() -> Notice {
    Notice::success("The module file was read in successfully.")
}

pub fn file_read_error(path: &Path, reason: &str) -> Notice {
    Notice::error(format!(
        "The module file '{}' could not be read in successfully ({}).",
        path.display(),
        reason
    ))
}

pub fn module_name_not_identified(fallback: &str) -> Notice {
    Notice::error(format!(
        "The module name could not be identified. Please ensure that you have used\n\
         a standard or conventional structure. Setting the module name to {} for now",
        fallback
    ))
}

pub fn no_internal_wires() -> Notice {
    Notice::info("No internal wire declarations were found")
}

pub fn no_internal_registers() -> Notice {
    Notice::info("No internal register declarations were found")
}

pub fn write_failed(path: &Path, reason: &str) -> Notice {
    Notice::error(format!(
        "The output file '{}' could not be written ({}).",
        path.display(),
        reason
    ))
}

/// Banner opening the wires section of the text report.
pub fn wires_header(source: &Path) -> String {
    format!("\n\n{RULE}\n\t\tInternal Wires of {}\n{RULE}", source.display())
}

/// Banner opening the registers section of the text report.
pub fn registers_header(source: &Path) -> String {
    format!("\n\n{RULE}\n\t\tInternal Registers of {}\n{RULE}", source.display())
}

/// Final banner naming both output files.
pub fn goodbye(report: &Path, csv: &Path) -> String {
    format!(
        "\n{WIDE_RULE}\n\tSuccess! The list of internal signals is in {}.\n\t The list can also be found in CSV format in {}.\n{WIDE_RULE}",
        report.display(),
        csv.display()
    )
}

/// Summary block with unique counts.
pub fn summary(module: &str, stats: &CatalogStats) -> String {
    format!(
        "\n\n{RULE}\n\t\t{} Internal Signals Information\n\t\tTotal number of wires: {}\n\t\tTotal number of registers: {}\n\t\tTotal number of internal signals: {}\n{RULE}",
        module, stats.unique_wires, stats.unique_registers, stats.unique_total
    )
}
