//! Reference navmesh backend: answers the navkit host queries directly from a
//! triangulation snapshot.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod geometry;
pub mod mesh;

pub use mesh::{BoundaryEdge, PathScratch, TriNavMesh, DEFAULT_QUERY_EXTENT};
