//! Extraction algorithms over a navmesh snapshot.
//!
//! Two independent flows share one snapshot:
//! - triangulation -> [`SubmeshIndex`] -> single/multi mesh export
//! - triangulation -> boundary points -> directed boundary edges
//!
//! Off-mesh links are extracted on the side. Every query failure is a
//! per-item skip; nothing here returns an error except writing exports.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod edges;
pub mod export;
pub mod extraction;
pub mod links;
pub mod params;
pub mod partition;

pub use boundary::detect_boundary_points;
pub use edges::{extract_edges, reconstruct_edges, select_normal, DirectedEdge};
pub use export::{
    multi_mesh, single_mesh, write_compact_obj, write_obj, CompactMesh, ExportError, NavMeshExport,
};
pub use extraction::{extract_all, Extraction};
pub use links::{classify_vertical_delta, correct_link, extract_links, LinkClass};
pub use params::{EdgeParams, LinkParams};
pub use partition::{Submesh, SubmeshIndex};
