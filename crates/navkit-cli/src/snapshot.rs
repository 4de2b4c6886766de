//! Navmesh snapshots exported by a host engine.

use std::path::{Path, PathBuf};

use navkit_core::{Aabb, NavError, NavSettings, RawOffMeshLink, Triangulation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported snapshot extension for {0} (expected .json, .yaml or .yml)")]
    UnknownFormat(PathBuf),

    #[error("invalid snapshot settings: {0}")]
    Settings(#[from] NavError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// One baked navmesh as captured from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub settings: NavSettings,

    pub triangulation: Triangulation,

    #[serde(default)]
    pub off_mesh_links: Vec<RawOffMeshLink>,

    /// Navmesh volume. Falls back to the triangulation's bounding box.
    #[serde(default)]
    pub bounds: Option<Aabb>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let format =
            Format::from_path(path).ok_or_else(|| SnapshotError::UnknownFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = match format {
            Format::Json => Self::from_json(&content)?,
            Format::Yaml => Self::from_yaml(&content)?,
        };
        tracing::debug!(
            path = %path.display(),
            vertices = snapshot.triangulation.vertices().len(),
            triangles = snapshot.triangulation.triangle_count(),
            links = snapshot.off_mesh_links.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_json(content: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(content)?;
        snapshot.settings.validate()?;
        Ok(snapshot)
    }

    pub fn from_yaml(content: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_yaml::from_str(content)?;
        snapshot.settings.validate()?;
        Ok(snapshot)
    }

    /// Declared bounds, or the triangulation's bounding box.
    pub fn effective_bounds(&self) -> Option<Aabb> {
        self.bounds.or_else(|| self.triangulation.bounds())
    }
}
