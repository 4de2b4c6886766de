mod common;

use navkit_core::{EdgeHit, NavQuery, PathStatus, Vec3};
use navkit_extract::{extract_edges, reconstruct_edges, select_normal, DirectedEdge, EdgeParams};
use navkit_mesh::TriNavMesh;

use common::{assert_near, grid};

/// Straight boundary along +x whose sampled normal depends on the sample's x.
struct ScriptedEdge {
    normal_at: fn(f32) -> Vec3,
    blocked: Option<(Vec3, Vec3)>,
}

impl NavQuery for ScriptedEdge {
    fn closest_edge(&self, point: Vec3) -> Option<EdgeHit> {
        Some(EdgeHit {
            position: point,
            distance: 0.0,
            normal: (self.normal_at)(point.x),
        })
    }

    fn path_status(&self, start: Vec3, end: Vec3) -> PathStatus {
        match self.blocked {
            Some((a, b)) if (start == a && end == b) || (start == b && end == a) => {
                PathStatus::Partial
            }
            _ => PathStatus::Complete,
        }
    }

    fn sample_position(&self, point: Vec3, _max_distance: f32) -> Option<Vec3> {
        Some(point)
    }
}

fn mostly_tilted(x: f32) -> Vec3 {
    match x.round() as i32 {
        1 => Vec3::new(0.501, 1.0, 0.249),
        2..=15 => Vec3::new(0.499, 0.998, 0.251),
        16 => Vec3::new(-1.0, 0.0, 0.0),
        17 => Vec3::new(0.0, 0.0, 1.0),
        _ => Vec3::new(0.3, 0.0, 0.9),
    }
}

#[test]
fn dominant_normal_bucket_wins_and_loses_its_y() {
    let query = ScriptedEdge {
        normal_at: mostly_tilted,
        blocked: None,
    };
    let points = [Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0)];

    let edges = reconstruct_edges(&points, &query, &EdgeParams::default());
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].start, points[0]);
    assert_eq!(edges[0].end, points[1]);
    // First normal seen in the winning bucket, flattened.
    assert_eq!(edges[0].normal, Vec3::new(0.501, 0.0, 0.249));

    // Walking back visits the buckets in a different order but the vote holds.
    assert_eq!(edges[1].start, points[1]);
    assert_eq!(edges[1].normal, Vec3::new(0.499, 0.0, 0.251));
}

#[test]
fn select_normal_ties_go_to_first_seen_bucket() {
    let a = Vec3::new(0.0, 1.0, 0.0);
    let b = Vec3::new(1.0, 0.0, 0.0);
    assert_eq!(select_normal(&[a, b, b, a], 2), Some(Vec3::ZERO));
    assert_eq!(select_normal(&[b, a, a, b], 2), Some(b));
    assert_eq!(select_normal(&[b, a, a], 2), Some(Vec3::ZERO));
    assert_eq!(select_normal(&[], 2), None);
}

#[test]
fn pair_without_complete_path_is_never_emitted() {
    let a = Vec3::ZERO;
    let b = Vec3::new(4.0, 0.0, 0.0);
    let c = Vec3::new(8.0, 0.0, 0.0);
    let query = ScriptedEdge {
        normal_at: |_| Vec3::Z,
        blocked: Some((a, b)),
    };

    let edges = reconstruct_edges(&[a, b, c], &query, &EdgeParams::default());
    let pairs: Vec<(Vec3, Vec3)> = edges.iter().map(|e| (e.start, e.end)).collect();
    assert_eq!(pairs, vec![(a, c), (b, c), (c, a), (c, b)]);
}

#[test]
fn zero_steps_emit_nothing() {
    let query = ScriptedEdge {
        normal_at: |_| Vec3::Z,
        blocked: None,
    };
    let params = EdgeParams {
        steps: 0,
        ..EdgeParams::default()
    };
    assert!(reconstruct_edges(&[Vec3::ZERO, Vec3::X], &query, &params).is_empty());
}

fn hole_edges(params: &EdgeParams) -> Vec<DirectedEdge> {
    let tri = grid(5, 5, 0.0, &[(2, 2)]);
    let mesh = TriNavMesh::from_triangulation(&tri);
    let bounds = tri.bounds().expect("bounds");
    extract_edges(&tri, &bounds, 0.1, &mesh, params)
}

#[test]
fn square_hole_yields_each_side_in_both_directions() {
    let edges = hole_edges(&EdgeParams::default());

    let p00 = Vec3::new(2.0, 0.0, 2.0);
    let p10 = Vec3::new(3.0, 0.0, 2.0);
    let p01 = Vec3::new(2.0, 0.0, 3.0);
    let p11 = Vec3::new(3.0, 0.0, 3.0);

    // Diagonals cross the hole and are rejected.
    let expected = [
        (p00, p10, Vec3::Z),
        (p00, p01, Vec3::X),
        (p10, p00, Vec3::Z),
        (p10, p11, Vec3::NEG_X),
        (p01, p00, Vec3::X),
        (p01, p11, Vec3::NEG_Z),
        (p11, p10, Vec3::NEG_X),
        (p11, p01, Vec3::NEG_Z),
    ];
    assert_eq!(edges.len(), expected.len(), "{edges:#?}");
    for (edge, (start, end, normal)) in edges.iter().zip(expected) {
        assert_eq!(edge.start, start);
        assert_eq!(edge.end, end);
        assert_near(edge.normal, normal);
        assert_eq!(edge.normal.y, 0.0);
    }
}

#[test]
fn pair_radius_prefilter_keeps_scan_order() {
    let full = hole_edges(&EdgeParams::default());
    let pruned = hole_edges(&EdgeParams {
        pair_radius: Some(1.5),
        ..EdgeParams::default()
    });
    assert_eq!(full, pruned);

    let too_tight = hole_edges(&EdgeParams {
        pair_radius: Some(0.5),
        ..EdgeParams::default()
    });
    assert!(too_tight.is_empty());
}

#[test]
fn pair_grid_handles_far_out_coordinates() {
    let query = ScriptedEdge {
        normal_at: |_| Vec3::Z,
        blocked: None,
    };
    let far = Vec3::new(f32::MAX, 0.0, 0.0);
    let points = [
        Vec3::new(3.0e6, 0.0, 0.0),
        far,
        Vec3::new(-3.0e6, 0.0, 0.0),
        far,
    ];
    let params = EdgeParams {
        pair_radius: Some(0.001),
        ..EdgeParams::default()
    };

    let edges = reconstruct_edges(&points, &query, &params);
    let pairs: Vec<(Vec3, Vec3)> = edges.iter().map(|e| (e.start, e.end)).collect();
    assert_eq!(pairs, vec![(far, far), (far, far)]);
    assert!(edges.iter().all(|e| e.normal == Vec3::Z));
}
