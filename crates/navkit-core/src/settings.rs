use crate::{NavError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Agent and bake parameters associated with a navmesh snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavSettings {
    /// Horizontal agent clearance, used as a tolerance margin.
    pub agent_radius: f32,
    /// Largest downward step an off-mesh link may represent.
    pub max_drop_height: f32,
    /// Largest upward step an off-mesh link may represent.
    pub max_jump_distance: f32,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            agent_radius: 0.5,
            max_drop_height: 4.0,
            max_jump_distance: 2.0,
        }
    }
}

impl NavSettings {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("agent_radius", self.agent_radius),
            ("max_drop_height", self.max_drop_height),
            ("max_jump_distance", self.max_jump_distance),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(NavError::InvalidSetting { name, value });
            }
        }
        Ok(())
    }
}
