use std::collections::BTreeMap;

use navkit_core::math::horizontal_distance;
use navkit_core::{flatten, quantize, Aabb, NavQuery, PathStatus, Triangulation, Vec3};

use crate::{detect_boundary_points, EdgeParams};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A boundary edge walked from `start` to `end`.
///
/// The same physical edge is usually reported once per direction; near corners
/// the two directions may disagree on `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectedEdge {
    pub start: Vec3,
    pub end: Vec3,
    /// Most common sampled edge normal, with y zeroed.
    pub normal: Vec3,
}

#[derive(Debug, Clone, Copy)]
struct NormalBucket {
    key: [i32; 3],
    count: u32,
    representative: Vec3,
}

/// Majority vote over sampled normals.
///
/// Normals are grouped by their `decimals`-digit rounding; the most frequent
/// group wins, ties going to the group seen first. Returns the first raw
/// normal of the winning group with y zeroed, or `None` for no samples.
pub fn select_normal(samples: &[Vec3], decimals: u32) -> Option<Vec3> {
    let mut buckets: Vec<NormalBucket> = Vec::new();
    for &normal in samples {
        let key = quantize(normal, decimals);
        match buckets.iter_mut().find(|b| b.key == key) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(NormalBucket {
                key,
                count: 1,
                representative: normal,
            }),
        }
    }

    let mut best: Option<NormalBucket> = None;
    for bucket in buckets {
        match best {
            Some(b) if b.count >= bucket.count => {}
            _ => best = Some(bucket),
        }
    }
    best.map(|b| flatten(b.representative))
}

/// Walk the straight segment `start -> end` and return its edge normal if every
/// sample stays on the surface and hugs a boundary edge.
fn validate_pair<Q: NavQuery>(
    start: Vec3,
    end: Vec3,
    query: &Q,
    params: &EdgeParams,
    samples: &mut Vec<Vec3>,
) -> Option<Vec3> {
    if query.path_status(start, end) != PathStatus::Complete {
        tracing::trace!(?start, ?end, "pair rejected: no complete path");
        return None;
    }

    let step = (end - start) / params.steps.max(1) as f32;
    let mut pos = start;
    samples.clear();

    for _ in 0..params.steps {
        pos += step;

        if query.sample_position(pos, params.sample_tolerance).is_none() {
            tracing::trace!(?start, ?end, sample = ?pos, "pair rejected: sample off surface");
            return None;
        }

        let Some(hit) = query.closest_edge(pos) else {
            tracing::trace!(?start, ?end, sample = ?pos, "pair rejected: no closest edge");
            return None;
        };
        if hit.distance > params.edge_tolerance {
            tracing::trace!(
                ?start,
                ?end,
                sample = ?pos,
                distance = hit.distance,
                "pair rejected: sample leaves the boundary"
            );
            return None;
        }

        samples.push(hit.normal);
    }

    select_normal(samples, params.normal_decimals)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Cell(i64, i64);

/// Uniform horizontal grid over the points, for the optional pair prefilter.
struct PairGrid {
    cell_size: f32,
    buckets: BTreeMap<Cell, Vec<usize>>,
}

impl PairGrid {
    fn new(points: &[Vec3], radius: f32) -> Self {
        let cell_size = radius.max(1e-3);
        let mut buckets: BTreeMap<Cell, Vec<usize>> = BTreeMap::new();
        for (i, p) in points.iter().enumerate() {
            buckets
                .entry(Self::cell_of(cell_size, *p))
                .or_default()
                .push(i);
        }
        Self { cell_size, buckets }
    }

    fn cell_of(cell_size: f32, p: Vec3) -> Cell {
        Cell(
            (p.x / cell_size).floor() as i64,
            (p.z / cell_size).floor() as i64,
        )
    }

    /// Indices within `radius` of `points[i]`, excluding `i`, ascending.
    fn neighbors_into(&self, points: &[Vec3], i: usize, radius: f32, out: &mut Vec<usize>) {
        out.clear();
        let p = points[i];
        let Cell(cx, cz) = Self::cell_of(self.cell_size, p);
        for dz in -1..=1 {
            for dx in -1..=1 {
                let cell = Cell(cx.saturating_add(dx), cz.saturating_add(dz));
                let Some(bucket) = self.buckets.get(&cell) else {
                    continue;
                };
                out.extend(
                    bucket
                        .iter()
                        .copied()
                        .filter(|&j| j != i && horizontal_distance(p, points[j]) <= radius),
                );
            }
        }
        // Saturated cells repeat at the extremes of the grid.
        out.sort_unstable();
        out.dedup();
    }
}

/// Directed boundary edges between pairs of boundary points.
///
/// Every ordered pair `(i, j)`, `i != j`, is validated independently; output
/// follows `(i, j)` order. This is quadratic in `points.len()`; set
/// `pair_radius` to restrict candidates to nearby points.
pub fn reconstruct_edges<Q: NavQuery>(
    points: &[Vec3],
    query: &Q,
    params: &EdgeParams,
) -> Vec<DirectedEdge> {
    let mut edges = Vec::new();
    let mut samples = Vec::with_capacity(params.steps as usize);
    let mut candidates = Vec::new();
    let grid = params
        .pair_radius
        .map(|radius| (PairGrid::new(points, radius), radius));

    for (i, &start) in points.iter().enumerate() {
        match &grid {
            Some((grid, radius)) => grid.neighbors_into(points, i, *radius, &mut candidates),
            None => {
                candidates.clear();
                candidates.extend((0..points.len()).filter(|&j| j != i));
            }
        }

        for &j in &candidates {
            let end = points[j];
            if let Some(normal) = validate_pair(start, end, query, params, &mut samples) {
                edges.push(DirectedEdge { start, end, normal });
            }
        }
    }

    tracing::debug!(
        points = points.len(),
        edges = edges.len(),
        pruned = params.pair_radius.is_some(),
        "reconstructed boundary edges"
    );
    edges
}

/// Boundary detection followed by edge reconstruction on one snapshot.
pub fn extract_edges<Q: NavQuery>(
    triangulation: &Triangulation,
    bounds: &Aabb,
    agent_radius: f32,
    query: &Q,
    params: &EdgeParams,
) -> Vec<DirectedEdge> {
    let points = detect_boundary_points(triangulation, bounds, agent_radius, query, params);
    reconstruct_edges(&points, query, params)
}
