#![allow(dead_code)]

use navkit_core::{AreaTag, Triangulation, Vec3};

/// Flat grid of unit quads at height `y`, skipping the listed `(x, z)` cells.
pub fn grid(width: u32, depth: u32, y: f32, holes: &[(u32, u32)]) -> Triangulation {
    let mut vertices = Vec::new();
    for z in 0..=depth {
        for x in 0..=width {
            vertices.push(Vec3::new(x as f32, y, z as f32));
        }
    }

    let row = width + 1;
    let mut indices = Vec::new();
    for z in 0..depth {
        for x in 0..width {
            if holes.contains(&(x, z)) {
                continue;
            }
            let i0 = z * row + x;
            indices.extend_from_slice(&[i0, i0 + 1, i0 + row + 1, i0, i0 + row + 1, i0 + row]);
        }
    }

    let areas = vec![AreaTag(0); indices.len() / 3];
    Triangulation::new(vertices, indices, areas).expect("valid grid")
}

/// `b` appended to `a`, with `b` moved by `offset`.
pub fn merge(a: &Triangulation, b: &Triangulation, offset: Vec3) -> Triangulation {
    let base = a.vertices().len() as u32;
    let mut vertices = a.vertices().to_vec();
    vertices.extend(b.vertices().iter().map(|v| *v + offset));
    let mut indices = a.indices().to_vec();
    indices.extend(b.indices().iter().map(|i| i + base));
    let mut areas = a.areas().to_vec();
    areas.extend_from_slice(b.areas());
    Triangulation::new(vertices, indices, areas).expect("valid merge")
}

pub fn assert_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-4,
        "expected {expected:?}, got {actual:?}"
    );
}
