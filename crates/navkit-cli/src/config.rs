//! Tuning configuration loaded from a YAML file.

use std::path::Path;

use anyhow::{Context, Result};
use navkit_extract::{EdgeParams, LinkParams};
use navkit_mesh::DEFAULT_QUERY_EXTENT;
use serde::{Deserialize, Serialize};

/// Extraction tuning. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Boundary detection and edge reconstruction
    pub edges: EdgeParams,

    /// Off-mesh link correction
    pub links: LinkParams,

    /// How far a query point may sit from the surface and still locate onto it
    #[serde(default = "default_query_extent")]
    pub query_extent: f32,
}

fn default_query_extent() -> f32 {
    DEFAULT_QUERY_EXTENT
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            edges: EdgeParams::default(),
            links: LinkParams::default(),
            query_extent: default_query_extent(),
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let yaml = "edges:\n  steps: 10\nlinks:\n  correct: true\n";
        let config: CliConfig = serde_yaml::from_str(yaml).expect("parse");

        assert_eq!(config.edges.steps, 10);
        assert_eq!(config.edges.edge_tolerance, EdgeParams::default().edge_tolerance);
        assert!(config.links.correct);
        assert_eq!(config.links.ceiling_height, LinkParams::default().ceiling_height);
        assert_eq!(config.query_extent, DEFAULT_QUERY_EXTENT);
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.yaml");

        let err = CliConfig::load(&path).expect_err("missing file");
        assert!(format!("{err:#}").contains("absent.yaml"));
    }

    #[test]
    fn no_path_means_defaults() {
        let config = CliConfig::load_or_default(None).expect("defaults");
        assert_eq!(config, CliConfig::default());
    }
}
