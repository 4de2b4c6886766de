use navkit_core::{AreaTag, Triangulation, Vec3};
use navkit_extract::{multi_mesh, single_mesh, write_compact_obj, write_obj};

/// Two unit quads side by side; the right one is tagged as a jump area.
fn two_areas() -> Triangulation {
    Triangulation::new(
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(2.0, 0.0, 1.0),
        ],
        vec![0, 1, 4, 0, 4, 3, 1, 2, 5, 1, 5, 4],
        vec![AreaTag(0), AreaTag(0), AreaTag(2), AreaTag(2)],
    )
    .expect("valid")
}

#[test]
fn single_mesh_shares_the_full_vertex_buffer() {
    let tri = two_areas();
    let export = single_mesh(&tri);

    assert_eq!(export.name, "NavMesh");
    assert_eq!(export.vertices, tri.vertices());
    assert_eq!(export.submeshes.len(), 2);
    assert_eq!(export.submeshes[1].area, AreaTag(2));
    assert_eq!(export.submeshes[1].indices, vec![1, 2, 5, 1, 5, 4]);
}

#[test]
fn multi_mesh_ships_only_referenced_vertices() {
    let meshes = multi_mesh(&two_areas());
    assert_eq!(meshes.len(), 2);

    let jump = &meshes[1];
    assert_eq!(jump.name, "NavMesh_1");
    assert_eq!(jump.source_indices, vec![1, 2, 5, 4]);
    assert_eq!(jump.indices, vec![0, 1, 2, 0, 2, 3]);
    assert_eq!(jump.vertices[3], Vec3::new(1.0, 0.0, 1.0));
    assert_eq!(jump.source_triangles(), vec![1, 2, 5, 1, 5, 4]);
}

#[test]
fn obj_groups_faces_by_area() {
    let mut out = Vec::new();
    write_obj(&single_mesh(&two_areas()), &mut out).expect("write obj");
    let text = String::from_utf8(out).expect("utf-8");

    assert!(text.contains("o NavMesh\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 6);
    assert!(text.contains("g area_0\nf 1 2 5\nf 1 5 4\n"));
    assert!(text.contains("g area_2\nf 2 3 6\nf 2 6 5\n"));
}

#[test]
fn compact_obj_offsets_each_object() {
    let mut out = Vec::new();
    write_compact_obj(&multi_mesh(&two_areas()), &mut out).expect("write obj");
    let text = String::from_utf8(out).expect("utf-8");

    assert!(text.contains("o NavMesh_0\n"));
    assert!(text.contains("o NavMesh_1\n"));
    // Second object starts after the first one's four vertices.
    assert!(text.contains("g area_2\nf 5 6 7\nf 5 7 8\n"));
}
