use crate::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Source link-type value that marks a link as traversable both ways.
pub const BIDIRECTIONAL_LINK_TYPE: i32 = 2;

/// Off-mesh link as stored by the host bake.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawOffMeshLink {
    pub start: Vec3,
    pub end: Vec3,
    pub link_type: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffMeshLink {
    pub start: Vec3,
    pub end: Vec3,
    pub bidirectional: bool,
}

impl OffMeshLink {
    pub fn from_raw(raw: &RawOffMeshLink) -> Self {
        Self {
            start: raw.start,
            end: raw.end,
            bidirectional: raw.link_type == BIDIRECTIONAL_LINK_TYPE,
        }
    }
}

impl From<RawOffMeshLink> for OffMeshLink {
    fn from(raw: RawOffMeshLink) -> Self {
        Self::from_raw(&raw)
    }
}
