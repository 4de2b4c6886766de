use navkit_core::{Aabb, NavQuery, Triangulation, Vec3};

use crate::EdgeParams;

/// Vertices that sit exactly on an obstacle boundary.
///
/// Vertices within `agent_radius * crop_margin_factor` of a horizontal face of
/// `bounds` are skipped first: the crop boundary of a baked surface looks like
/// an obstacle edge to the closest-edge query. The remaining vertices are kept
/// when their closest edge is no further than `boundary_epsilon`. Output follows
/// vertex order and is not deduplicated.
pub fn detect_boundary_points<Q: NavQuery>(
    triangulation: &Triangulation,
    bounds: &Aabb,
    agent_radius: f32,
    query: &Q,
    params: &EdgeParams,
) -> Vec<Vec3> {
    let crop_margin = agent_radius * params.crop_margin_factor;

    let mut cropped = 0usize;
    let points: Vec<Vec3> = triangulation
        .vertices()
        .iter()
        .copied()
        .filter(|&v| {
            if bounds.horizontal_face_distance(v) <= crop_margin {
                cropped += 1;
                return false;
            }
            query
                .closest_edge(v)
                .is_some_and(|hit| hit.distance <= params.boundary_epsilon)
        })
        .collect();

    tracing::debug!(
        vertices = triangulation.vertices().len(),
        cropped,
        boundary_points = points.len(),
        "detected boundary points"
    );
    points
}
