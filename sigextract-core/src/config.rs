//! Configuration loading from sigextract.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "sigextract.toml";

/// Default number of whitespace characters allowed between `input`/`output`
/// and `wire`/`reg` for the declaration to still count as a port.
pub const DEFAULT_PORT_GAP_LIMIT: usize = 16;

/// Contents of sigextract.toml.
#[derive(Debug, Deserialize, Default)]
pub struct SigextractConfig {
    /// Directory where the report and CSV files are written. A relative path
    /// is taken relative to the directory holding sigextract.toml.
    pub output_dir: Option<PathBuf>,
    /// Maximum whitespace run between a port keyword and `wire`/`reg`.
    pub port_gap_limit: Option<usize>,
    /// Treat any amount of whitespace after `input`/`output` as a port prefix.
    pub unbounded_port_gap: Option<bool>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
    /// Directory the file was loaded from.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Summary format: "plain" or "json".
    pub format: Option<String>,
}

impl SigextractConfig {
    /// Whether the file asks for a JSON summary.
    pub fn wants_json(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }

    /// Output directory with a relative path anchored at `base_dir`.
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => self.base_dir.join(dir),
            None => PathBuf::from("."),
        }
    }

    /// Resolves the port gap bound; `None` means unbounded.
    pub fn port_gap(&self) -> Option<usize> {
        if self.unbounded_port_gap.unwrap_or(false) {
            None
        } else {
            Some(self.port_gap_limit.unwrap_or(DEFAULT_PORT_GAP_LIMIT))
        }
    }
}

/// Resolved settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Directory that receives the two output files.
    pub output_dir: PathBuf,
    /// Port prefix whitespace bound; `None` disables the bound.
    pub port_gap_limit: Option<usize>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            port_gap_limit: Some(DEFAULT_PORT_GAP_LIMIT),
        }
    }
}

impl From<&SigextractConfig> for ExtractorConfig {
    fn from(cfg: &SigextractConfig) -> Self {
        Self {
            output_dir: cfg.resolved_output_dir(),
            port_gap_limit: cfg.port_gap(),
        }
    }
}

/// Loads configuration from `dir/sigextract.toml` if it exists.
pub fn load_config(dir: &Path) -> Result<Option<SigextractConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(None);
    }

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let mut cfg: SigextractConfig =
        toml::from_str(&content).with_context(|| format!("Invalid {}", path.display()))?;
    cfg.base_dir = dir.to_path_buf();
    Ok(Some(cfg))
}

/// Looks for sigextract.toml next to the input file, then in the working directory.
pub fn discover_config(input: &Path) -> Result<Option<SigextractConfig>> {
    if let Some(parent) = input.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Some(cfg) = load_config(parent)? {
            return Ok(Some(cfg));
        }
    }
    load_config(Path::new("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_full_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "output_dir = \"out\"\nport_gap_limit = 4\n\n[output]\nformat = \"JSON\"\n",
        )
        .unwrap();

        let cfg = load_config(dir.path()).unwrap().unwrap();
        assert_eq!(cfg.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cfg.port_gap(), Some(4));
        assert!(cfg.wants_json());

        let resolved = ExtractorConfig::from(&cfg);
        assert_eq!(resolved.output_dir, dir.path().join("out"));
        assert_eq!(resolved.port_gap_limit, Some(4));
    }

    #[test]
    fn test_unbounded_overrides_limit() {
        let cfg = SigextractConfig {
            port_gap_limit: Some(2),
            unbounded_port_gap: Some(true),
            ..Default::default()
        };
        assert_eq!(cfg.port_gap(), None);
    }

    #[test]
    fn test_defaults() {
        let cfg = SigextractConfig::default();
        assert_eq!(cfg.port_gap(), Some(DEFAULT_PORT_GAP_LIMIT));
        assert!(!cfg.wants_json());
        assert_eq!(ExtractorConfig::from(&cfg), ExtractorConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "port_gap_limit = \"many\"").unwrap();
        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_discover_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "port_gap_limit = 3").unwrap();
        let input = dir.path().join("top.v");

        let cfg = discover_config(&input).unwrap().unwrap();
        assert_eq!(cfg.port_gap(), Some(3));
    }

    #[test]
    fn test_relative_output_dir_follows_config_location() {
        let dir = tempfile::tempdir().unwrap();
        let rtl = dir.path().join("rtl");
        fs::create_dir(&rtl).unwrap();
        fs::write(rtl.join(CONFIG_FILE_NAME), "output_dir = \"reports\"").unwrap();

        let cfg = discover_config(&rtl.join("top.v")).unwrap().unwrap();
        assert_eq!(cfg.base_dir, rtl);
        assert_eq!(ExtractorConfig::from(&cfg).output_dir, rtl.join("reports"));
    }

    #[test]
    fn test_absolute_output_dir_kept() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("elsewhere");
        let cfg = SigextractConfig {
            output_dir: Some(target.clone()),
            base_dir: PathBuf::from("rtl"),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_output_dir(), target);
    }
}
