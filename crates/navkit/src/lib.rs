//! Umbrella crate that re-exports the `navkit-*` building blocks.
//!
//! `core` holds the triangulation model and the query seams a host engine
//! implements, `mesh` is a pure-Rust query backend over a triangulation, and
//! `extract` holds the partitioning, edge and link extraction passes.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use navkit_core as core;

#[cfg(feature = "mesh")]
#[cfg_attr(docsrs, doc(cfg(feature = "mesh")))]
pub use navkit_mesh as mesh;

#[cfg(feature = "extract")]
#[cfg_attr(docsrs, doc(cfg(feature = "extract")))]
pub use navkit_extract as extract;

/// Common imports for running an extraction against the reference backend.
#[cfg(feature = "full")]
#[cfg_attr(docsrs, doc(cfg(feature = "full")))]
pub mod prelude {
    pub use navkit_core::{
        Aabb, AreaTag, NavQuery, NavSettings, OffMeshLink, Raycaster, RawOffMeshLink,
        Triangulation, Vec3,
    };
    pub use navkit_extract::{extract_all, EdgeParams, Extraction, LinkParams, SubmeshIndex};
    pub use navkit_mesh::TriNavMesh;
}
