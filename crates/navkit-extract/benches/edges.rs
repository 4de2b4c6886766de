use criterion::{black_box, criterion_group, criterion_main, Criterion};
use navkit_core::{AreaTag, Triangulation, Vec3};
use navkit_extract::{detect_boundary_points, reconstruct_edges, EdgeParams};
use navkit_mesh::TriNavMesh;

fn grid_with_holes(width: u32, depth: u32, holes: &[(u32, u32)]) -> Triangulation {
    let mut vertices = Vec::with_capacity(((width + 1) * (depth + 1)) as usize);
    for z in 0..=depth {
        for x in 0..=width {
            vertices.push(Vec3::new(x as f32, 0.0, z as f32));
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

fn bench_edges(c: &mut Criterion) {
    let tri = grid_with_holes(12, 12, &[(3, 3), (3, 4), (8, 8), (8, 9), (9, 8)]);
    let mesh = TriNavMesh::from_triangulation(&tri);
    let bounds = tri.bounds().expect("non-empty grid");
    let params = EdgeParams::default();
    let points = detect_boundary_points(&tri, &bounds, 0.1, &mesh, &params);

    let mut group = c.benchmark_group("navkit-extract/edges");

    group.bench_function("detect_boundary_points", |b| {
        b.iter(|| black_box(detect_boundary_points(&tri, &bounds, 0.1, &mesh, &params)))
    });

    group.bench_function("reconstruct_all_pairs", |b| {
        b.iter(|| black_box(reconstruct_edges(&points, &mesh, &params)))
    });

    let gridded = EdgeParams {
        pair_radius: Some(1.5),
        ..EdgeParams::default()
    };
    group.bench_function("reconstruct_pair_radius", |b| {
        b.iter(|| black_box(reconstruct_edges(&points, &mesh, &gridded)))
    });

    group.finish();
}

criterion_group!(benches, bench_edges);
criterion_main!(benches);
