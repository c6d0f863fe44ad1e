//! Analysis configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Bounds on the coverability search. The analyzer never blocks or yields,
/// but a caller can still cap memory/time on a pathological net; timeouts
/// beyond a node count are the caller's own concern.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Maximum number of coverability-tree nodes the search may create.
    /// `None` means unbounded.
    #[serde(default)]
    pub node_limit: Option<usize>,
}

impl AnalysisConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).with_context(|| format!("Failed to read config file: {path:?}"))?;
        let config: AnalysisConfig =
            toml::from_str(&content).with_context(|| format!("Failed to parse config file: {path:?}"))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_default() {
        let cfg = AnalysisConfig::load_from_file("/nonexistent/path/petri-cover.toml").unwrap();
        assert_eq!(cfg.node_limit, None);
    }
}
