#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerances for boundary point detection and edge reconstruction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EdgeParams {
    /// Largest closest-edge distance at which a vertex counts as on the boundary.
    pub boundary_epsilon: f32,
    /// Vertices within `agent_radius * crop_margin_factor` of a horizontal
    /// bounds face belong to the crop boundary and are skipped.
    pub crop_margin_factor: f32,
    /// Number of samples taken along each candidate pair.
    pub steps: u32,
    /// Every sample must be within this distance of the surface.
    pub sample_tolerance: f32,
    /// Every sample must be within this distance of a boundary edge.
    pub edge_tolerance: f32,
    /// Decimal digits kept when grouping sampled normals.
    pub normal_decimals: u32,
    /// Only pair points whose horizontal separation is at most this far.
    /// `None` scans every ordered pair.
    pub pair_radius: Option<f32>,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            boundary_epsilon: 0.0001,
            crop_margin_factor: 1.001,
            steps: 20,
            sample_tolerance: 0.1,
            edge_tolerance: 0.1,
            normal_decimals: 2,
            pair_radius: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinkParams {
    /// Snap link end points onto the ground below them, discarding links that
    /// are neither a valid drop nor a valid jump.
    pub correct: bool,
    /// Reach of the upward probe; also the fallback ceiling offset.
    pub ceiling_height: f32,
    /// The downward probe starts this far below a ceiling hit.
    pub ceiling_clearance: f32,
}

impl Default for LinkParams {
    fn default() -> Self {
        Self {
            correct: false,
            ceiling_height: 1000.0,
            ceiling_clearance: 0.01,
        }
    }
}
