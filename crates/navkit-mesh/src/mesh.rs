use core::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use navkit_core::{EdgeHit, NavQuery, PathStatus, Raycaster, Triangulation, Vec3};

use crate::geometry::{
    closest_point_on_segment, closest_point_on_triangle, outward_edge_normal, ray_triangle_t,
    tri_centroid, tri_edges, RAY_EPSILON,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How far an end point may sit off the surface and still be mapped onto a
/// triangle for path queries.
pub const DEFAULT_QUERY_EXTENT: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    f: u32,
    g: u32,
    tri: usize,
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, usize, u64) {
        (self.f, self.g, self.tri, self.tie)
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable scratch buffers for `TriNavMesh` path queries.
///
/// `NavQuery::path_status` allocates fresh buffers per call. Callers issuing
/// many queries against one mesh can hold a `PathScratch` and go through
/// [`TriNavMesh::path_status_with`] instead.
#[derive(Debug, Default)]
pub struct PathScratch {
    open: BinaryHeap<OpenNode>,
    g_score: Vec<u32>,
    came_from: Vec<Option<usize>>,
}

/// A triangle edge with no neighbor on the other side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryEdge {
    pub a: Vec3,
    pub b: Vec3,
    /// Horizontal unit normal pointing away from the owning triangle.
    pub normal: Vec3,
    pub triangle: usize,
}

#[derive(Debug, Clone)]
pub struct TriNavMesh {
    source: Triangulation,
    tris: Vec<[Vec3; 3]>,
    neighbors: Vec<[Option<usize>; 3]>,
    centroids: Vec<Vec3>,
    boundary_edges: Vec<BoundaryEdge>,
    query_extent: f32,
}

impl TriNavMesh {
    /// Build the query structure for a triangulation snapshot.
    ///
    /// Adjacency is inferred from shared edges. Vertices are matched by exact
    /// position, so duplicated vertex entries still stitch together.
    pub fn from_triangulation(triangulation: &Triangulation) -> Self {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        struct VertexKey(u32, u32, u32);

        impl VertexKey {
            fn from_vec3(p: Vec3) -> Self {
                Self(p.x.to_bits(), p.y.to_bits(), p.z.to_bits())
            }
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        struct EdgeKey(VertexKey, VertexKey);

        impl EdgeKey {
            fn new(a: Vec3, b: Vec3) -> Self {
                let ka = VertexKey::from_vec3(a);
                let kb = VertexKey::from_vec3(b);
                if ka <= kb {
                    Self(ka, kb)
                } else {
                    Self(kb, ka)
                }
            }
        }

        let tris: Vec<[Vec3; 3]> = (0..triangulation.triangle_count())
            .map(|t| triangulation.triangle_positions(t))
            .collect();

        let mut neighbors = vec![[None; 3]; tris.len()];
        let mut edge_map: BTreeMap<EdgeKey, (usize, usize)> = BTreeMap::new();

        for (tri_idx, tri) in tris.iter().enumerate() {
            for (edge_idx, (a, b)) in tri_edges(tri).into_iter().enumerate() {
                let key = EdgeKey::new(a, b);
                if let Some((other_tri, other_edge)) = edge_map.remove(&key) {
                    neighbors[tri_idx][edge_idx] = Some(other_tri);
                    neighbors[other_tri][other_edge] = Some(tri_idx);
                } else {
                    edge_map.insert(key, (tri_idx, edge_idx));
                }
            }
        }

        let mut boundary_edges = Vec::new();
        for (tri_idx, tri) in tris.iter().enumerate() {
            for (edge_idx, (a, b)) in tri_edges(tri).into_iter().enumerate() {
                if neighbors[tri_idx][edge_idx].is_none() {
                    let opposite = tri[(edge_idx + 2) % 3];
                    boundary_edges.push(BoundaryEdge {
                        a,
                        b,
                        normal: outward_edge_normal(a, b, opposite),
                        triangle: tri_idx,
                    });
                }
            }
        }

        let centroids = tris.iter().map(tri_centroid).collect();

        tracing::debug!(
            triangles = tris.len(),
            boundary_edges = boundary_edges.len(),
            "built reference navmesh"
        );

        Self {
            source: triangulation.clone(),
            tris,
            neighbors,
            centroids,
            boundary_edges,
            query_extent: DEFAULT_QUERY_EXTENT,
        }
    }

    pub fn with_query_extent(mut self, extent: f32) -> Self {
        self.query_extent = extent.max(0.0);
        self
    }

    pub fn query_extent(&self) -> f32 {
        self.query_extent
    }

    pub fn triangulation(&self) -> &Triangulation {
        &self.source
    }

    pub fn triangle_count(&self) -> usize {
        self.tris.len()
    }

    pub fn triangles(&self) -> &[[Vec3; 3]] {
        &self.tris
    }

    pub fn boundary_edges(&self) -> &[BoundaryEdge] {
        &self.boundary_edges
    }

    /// Nearest triangle to `p` together with the closest point on it.
    pub fn nearest_triangle(&self, p: Vec3) -> Option<(usize, Vec3)> {
        let mut best: Option<(f32, usize, Vec3)> = None;
        for (i, tri) in self.tris.iter().enumerate() {
            let q = closest_point_on_triangle(p, tri);
            let d2 = q.distance_squared(p);
            match best {
                None => best = Some((d2, i, q)),
                Some((best_d2, _, _)) if d2 < best_d2 => best = Some((d2, i, q)),
                _ => {}
            }
        }
        best.map(|(_, i, q)| (i, q))
    }

    /// Triangle an end point maps to for path queries, if within `query_extent`.
    pub fn locate(&self, p: Vec3) -> Option<usize> {
        let (tri, q) = self.nearest_triangle(p)?;
        (q.distance(p) <= self.query_extent).then_some(tri)
    }

    pub fn find_poly_path(&self, start: Vec3, goal: Vec3) -> Option<Vec<usize>> {
        let mut scratch = PathScratch::default();
        let mut out = Vec::new();
        self.find_poly_path_into(start, goal, &mut scratch, &mut out)?;
        Some(out)
    }

    pub fn find_poly_path_into(
        &self,
        start: Vec3,
        goal: Vec3,
        scratch: &mut PathScratch,
        out: &mut Vec<usize>,
    ) -> Option<()> {
        out.clear();

        let start_tri = self.locate(start)?;
        let goal_tri = self.locate(goal)?;
        if start_tri == goal_tri {
            out.push(start_tri);
            return Some(());
        }

        let quant = |d: f32| -> u32 { (d.max(0.0) * 1024.0) as u32 };
        let heuristic = |tri: usize| -> u32 { quant(self.centroids[tri].distance(goal)) };
        let edge_cost = |a: usize, b: usize| -> u32 {
            // Cost between triangle centroids.
            quant(self.centroids[a].distance(self.centroids[b])).saturating_add(1)
        };

        let PathScratch {
            open,
            g_score,
            came_from,
        } = scratch;

        let n = self.tris.len();
        open.clear();
        g_score.resize(n, u32::MAX);
        g_score.fill(u32::MAX);
        came_from.resize(n, None);
        came_from.fill(None);

        g_score[start_tri] = 0;
        open.push(OpenNode {
            f: heuristic(start_tri),
            g: 0,
            tri: start_tri,
            tie: 0,
        });
        let mut tie: u64 = 1;

        while let Some(node) = open.pop() {
            if node.tri == goal_tri {
                out.push(goal_tri);
                let mut current = goal_tri;
                while let Some(prev) = came_from[current] {
                    current = prev;
                    out.push(current);
                }
                out.reverse();
                return Some(());
            }

            if node.g != g_score[node.tri] {
                continue;
            }

            for ntri in self.tri_neighbors(node.tri) {
                let tentative_g = node.g.saturating_add(edge_cost(node.tri, ntri));
                if tentative_g >= g_score[ntri] {
                    continue;
                }

                came_from[ntri] = Some(node.tri);
                g_score[ntri] = tentative_g;
                open.push(OpenNode {
                    f: tentative_g.saturating_add(heuristic(ntri)),
                    g: tentative_g,
                    tri: ntri,
                    tie,
                });
                tie += 1;
            }
        }

        None
    }

    pub fn path_status_with(
        &self,
        start: Vec3,
        end: Vec3,
        scratch: &mut PathScratch,
        out: &mut Vec<usize>,
    ) -> PathStatus {
        if self.locate(start).is_none() || self.locate(end).is_none() {
            return PathStatus::Invalid;
        }
        match self.find_poly_path_into(start, end, scratch, out) {
            Some(()) => PathStatus::Complete,
            None => PathStatus::Partial,
        }
    }

    fn tri_neighbors(&self, tri: usize) -> impl Iterator<Item = usize> + '_ {
        // Deterministic order: edge order (0,1), (1,2), (2,0).
        self.neighbors[tri].into_iter().flatten()
    }
}

impl NavQuery for TriNavMesh {
    fn closest_edge(&self, point: Vec3) -> Option<EdgeHit> {
        let (_, on_mesh) = self.nearest_triangle(point)?;

        let mut best: Option<EdgeHit> = None;
        for edge in &self.boundary_edges {
            let c = closest_point_on_segment(on_mesh, edge.a, edge.b);
            let d = c.distance(on_mesh);
            match best {
                Some(hit) if hit.distance <= d => {}
                _ => {
                    best = Some(EdgeHit {
                        position: c,
                        distance: d,
                        normal: edge.normal,
                    })
                }
            }
        }
        best
    }

    fn path_status(&self, start: Vec3, end: Vec3) -> PathStatus {
        let mut scratch = PathScratch::default();
        let mut out = Vec::new();
        self.path_status_with(start, end, &mut scratch, &mut out)
    }

    fn sample_position(&self, point: Vec3, max_distance: f32) -> Option<Vec3> {
        let (_, q) = self.nearest_triangle(point)?;
        (q.distance(point) <= max_distance).then_some(q)
    }
}

impl Raycaster for TriNavMesh {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<Vec3> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }

        let mut best_t: Option<f32> = None;
        for tri in &self.tris {
            let Some(t) = ray_triangle_t(origin, dir, tri) else {
                continue;
            };
            // Ignore contact with the surface the ray starts on.
            if t <= RAY_EPSILON || t > max_distance {
                continue;
            }
            match best_t {
                Some(best) if best <= t => {}
                _ => best_t = Some(t),
            }
        }

        best_t.map(|t| origin + dir * t)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct TriNavMeshSerde {
    triangulation: Triangulation,
    #[serde(default = "default_query_extent")]
    query_extent: f32,
}

#[cfg(feature = "serde")]
fn default_query_extent() -> f32 {
    DEFAULT_QUERY_EXTENT
}

#[cfg(feature = "serde")]
impl Serialize for TriNavMesh {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TriNavMeshSerde {
            triangulation: self.source.clone(),
            query_extent: self.query_extent,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TriNavMesh {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = TriNavMeshSerde::deserialize(deserializer)?;
        Ok(TriNavMesh::from_triangulation(&data.triangulation).with_query_extent(data.query_extent))
    }
}
