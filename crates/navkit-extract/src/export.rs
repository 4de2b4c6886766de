//! Mesh exports of a partitioned triangulation.

use std::collections::BTreeMap;
use std::io::Write;

use navkit_core::{AreaTag, Triangulation, Vec3};
use thiserror::Error;

use crate::{Submesh, SubmeshIndex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const SINGLE_MESH_NAME: &str = "NavMesh";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The whole surface as one vertex buffer with one submesh per area tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavMeshExport {
    pub name: String,
    pub vertices: Vec<Vec3>,
    pub submeshes: Vec<Submesh>,
}

/// One submesh with its own compacted vertex buffer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompactMesh {
    pub name: String,
    pub area: AreaTag,
    pub vertices: Vec<Vec3>,
    /// Local indices into `vertices`.
    pub indices: Vec<u32>,
    /// `source_indices[local]` is the vertex index in the source buffer.
    pub source_indices: Vec<u32>,
}

impl CompactMesh {
    /// Re-index `submesh` against only the vertices it references.
    ///
    /// Local indices are assigned in order of first use. `submesh` must index
    /// into `source`.
    pub(crate) fn compact(name: String, submesh: &Submesh, source: &[Vec3]) -> Self {
        let mut local: BTreeMap<u32, u32> = BTreeMap::new();
        let mut vertices = Vec::new();
        let mut source_indices = Vec::new();
        let mut indices = Vec::with_capacity(submesh.indices.len());

        for &index in &submesh.indices {
            let n = *local.entry(index).or_insert_with(|| {
                vertices.push(source[index as usize]);
                source_indices.push(index);
                (vertices.len() - 1) as u32
            });
            indices.push(n);
        }

        Self {
            name,
            area: submesh.area,
            vertices,
            indices,
            source_indices,
        }
    }

    /// Indices translated back into the source vertex buffer.
    pub fn source_triangles(&self) -> Vec<u32> {
        self.indices
            .iter()
            .map(|&i| self.source_indices[i as usize])
            .collect()
    }
}

pub fn single_mesh(triangulation: &Triangulation) -> NavMeshExport {
    NavMeshExport {
        name: SINGLE_MESH_NAME.to_string(),
        vertices: triangulation.vertices().to_vec(),
        submeshes: SubmeshIndex::build(triangulation).into_submeshes(),
    }
}

/// One independent mesh per area tag, named `NavMesh_<i>` in submesh order.
pub fn multi_mesh(triangulation: &Triangulation) -> Vec<CompactMesh> {
    let index = SubmeshIndex::build(triangulation);
    let meshes: Vec<CompactMesh> = index
        .iter()
        .enumerate()
        .map(|(i, submesh)| {
            CompactMesh::compact(
                format!("{SINGLE_MESH_NAME}_{i}"),
                submesh,
                triangulation.vertices(),
            )
        })
        .collect();

    tracing::debug!(
        meshes = meshes.len(),
        vertices = meshes.iter().map(|m| m.vertices.len()).sum::<usize>(),
        "compacted submeshes"
    );
    meshes
}

/// Write a single-mesh export as Wavefront OBJ, one group per submesh.
pub fn write_obj<W: Write>(export: &NavMeshExport, mut writer: W) -> Result<(), ExportError> {
    writeln!(writer, "# navkit navmesh export")?;
    writeln!(writer, "o {}", export.name)?;
    write_vertices(&mut writer, &export.vertices)?;
    for submesh in &export.submeshes {
        writeln!(writer, "g area_{}", submesh.area.0)?;
        write_faces(&mut writer, &submesh.indices, 1)?;
    }
    Ok(())
}

/// Write compacted meshes as consecutive OBJ objects.
pub fn write_compact_obj<W: Write>(meshes: &[CompactMesh], mut writer: W) -> Result<(), ExportError> {
    writeln!(writer, "# navkit navmesh export")?;
    // OBJ indices are global and 1-based.
    let mut base = 1usize;
    for mesh in meshes {
        writeln!(writer, "o {}", mesh.name)?;
        write_vertices(&mut writer, &mesh.vertices)?;
        writeln!(writer, "g area_{}", mesh.area.0)?;
        write_faces(&mut writer, &mesh.indices, base)?;
        base += mesh.vertices.len();
    }
    Ok(())
}

fn write_vertices<W: Write>(writer: &mut W, vertices: &[Vec3]) -> std::io::Result<()> {
    for v in vertices {
        writeln!(writer, "v {:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
    }
    Ok(())
}

fn write_faces<W: Write>(writer: &mut W, indices: &[u32], base: usize) -> std::io::Result<()> {
    for face in indices.chunks_exact(3) {
        writeln!(
            writer,
            "f {} {} {}",
            face[0] as usize + base,
            face[1] as usize + base,
            face[2] as usize + base
        )?;
    }
    Ok(())
}
