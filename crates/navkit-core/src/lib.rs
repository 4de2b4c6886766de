//! Navmesh snapshot data model and the query seams a host navigation system provides.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod link;
pub mod math;
pub mod query;
pub mod settings;
pub mod triangulation;

pub use bounds::Aabb;
pub use error::{NavError, Result};
pub use link::{OffMeshLink, RawOffMeshLink, BIDIRECTIONAL_LINK_TYPE};
pub use math::{flatten, inverse_lerp, quantize, Vec3};
pub use query::{EdgeHit, NavQuery, PathStatus, Raycaster};
pub use settings::NavSettings;
pub use triangulation::{AreaTag, Triangulation};
