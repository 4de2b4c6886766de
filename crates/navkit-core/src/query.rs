//! Spatial queries supplied by the host navigation system.
//!
//! Extraction code only ever talks to these traits. `navkit-mesh` ships a
//! reference implementation; an engine integration provides its own.

use crate::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a nearest-boundary-edge query.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeHit {
    /// Closest point on the boundary edge.
    pub position: Vec3,
    /// Distance from the queried point (projected onto the surface) to `position`.
    pub distance: f32,
    /// Unit normal of the edge, pointing away from the walkable side.
    pub normal: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathStatus {
    /// The end point is reachable from the start point.
    Complete,
    /// A path exists but stops short of the end point.
    Partial,
    /// One of the end points could not be located on the surface.
    Invalid,
}

pub trait NavQuery {
    /// Nearest boundary edge to `point`, if the point maps onto the surface.
    fn closest_edge(&self, point: Vec3) -> Option<EdgeHit>;

    fn path_status(&self, start: Vec3, end: Vec3) -> PathStatus;

    /// Nearest on-surface position within `max_distance` of `point`.
    fn sample_position(&self, point: Vec3, max_distance: f32) -> Option<Vec3>;
}

pub trait Raycaster {
    /// First hit along `direction` (unit length) within `max_distance`.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Vec3>;
}

impl<T: NavQuery + ?Sized> NavQuery for &T {
    fn closest_edge(&self, point: Vec3) -> Option<EdgeHit> {
        (**self).closest_edge(point)
    }

    fn path_status(&self, start: Vec3, end: Vec3) -> PathStatus {
        (**self).path_status(start, end)
    }

    fn sample_position(&self, point: Vec3, max_distance: f32) -> Option<Vec3> {
        (**self).sample_position(point, max_distance)
    }
}

impl<T: Raycaster + ?Sized> Raycaster for &T {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Vec3> {
        (**self).raycast(origin, direction, max_distance)
    }
}
