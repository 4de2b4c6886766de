use navkit_core::{
    Aabb, NavQuery, NavSettings, OffMeshLink, Raycaster, RawOffMeshLink, Triangulation, Vec3,
};

use crate::{
    detect_boundary_points, extract_links, reconstruct_edges, DirectedEdge, EdgeParams, LinkParams,
    SubmeshIndex,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything extracted from one snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extraction {
    pub submeshes: SubmeshIndex,
    pub boundary_points: Vec<Vec3>,
    pub edges: Vec<DirectedEdge>,
    pub links: Vec<OffMeshLink>,
}

/// Run partitioning, edge reconstruction and link extraction on one snapshot.
///
/// `bounds` defaults to the triangulation's bounding box. An empty
/// triangulation yields empty submeshes, points and edges.
pub fn extract_all<B>(
    triangulation: &Triangulation,
    bounds: Option<Aabb>,
    raw_links: &[RawOffMeshLink],
    settings: &NavSettings,
    edge_params: &EdgeParams,
    link_params: &LinkParams,
    backend: &B,
) -> Extraction
where
    B: NavQuery + Raycaster,
{
    let submeshes = SubmeshIndex::build(triangulation);

    let boundary_points = match bounds.or_else(|| triangulation.bounds()) {
        Some(bounds) => detect_boundary_points(
            triangulation,
            &bounds,
            settings.agent_radius,
            backend,
            edge_params,
        ),
        None => Vec::new(),
    };
    let edges = reconstruct_edges(&boundary_points, backend, edge_params);

    let links = extract_links(raw_links, settings, link_params, backend, backend);

    Extraction {
        submeshes,
        boundary_points,
        edges,
        links,
    }
}
