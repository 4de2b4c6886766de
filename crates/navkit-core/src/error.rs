use thiserror::Error;

/// Invariant violations detected while building a snapshot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("expected {expected} triangle indices for {triangles} area tags, got {got}")]
    IndexCountMismatch {
        expected: usize,
        triangles: usize,
        got: usize,
    },

    #[error("triangle {triangle} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),

    #[error("invalid setting `{name}`: {value}")]
    InvalidSetting { name: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, NavError>;
