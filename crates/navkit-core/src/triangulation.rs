use crate::{Aabb, NavError, Result, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Per-triangle area classification (walkable, jump, obstacle, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AreaTag(pub i32);

/// A snapshot of the walkable surface: shared vertices, one index triple and
/// one area tag per triangle.
///
/// `indices.len() == 3 * areas.len()` and every index is in range; both are
/// checked on construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangulation {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    areas: Vec<AreaTag>,
}

impl Triangulation {
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>, areas: Vec<AreaTag>) -> Result<Self> {
        if indices.len() != areas.len() * 3 {
            return Err(NavError::IndexCountMismatch {
                expected: areas.len() * 3,
                triangles: areas.len(),
                got: indices.len(),
            });
        }

        if let Some(bad) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(NavError::NonFiniteVertex(bad));
        }

        let vertex_count = vertices.len();
        if let Some((pos, &index)) = indices
            .iter()
            .enumerate()
            .find(|(_, i)| **i as usize >= vertex_count)
        {
            return Err(NavError::IndexOutOfRange {
                triangle: pos / 3,
                index,
                vertex_count,
            });
        }

        Ok(Self {
            vertices,
            indices,
            areas,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn areas(&self) -> &[AreaTag] {
        &self.areas
    }

    pub fn triangle_count(&self) -> usize {
        self.areas.len()
    }

    pub fn triangle(&self, tri: usize) -> [u32; 3] {
        let i = tri * 3;
        [self.indices[i], self.indices[i + 1], self.indices[i + 2]]
    }

    pub fn triangle_positions(&self, tri: usize) -> [Vec3; 3] {
        self.triangle(tri).map(|i| self.vertices[i as usize])
    }

    pub fn triangles(&self) -> impl Iterator<Item = ([u32; 3], AreaTag)> + '_ {
        (0..self.triangle_count()).map(move |t| (self.triangle(t), self.areas[t]))
    }

    /// Bounding box of the vertex buffer, `None` when there are no vertices.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().copied())
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct TriangulationSerde {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
    areas: Vec<AreaTag>,
}

#[cfg(feature = "serde")]
impl Serialize for Triangulation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TriangulationSerde {
            vertices: self.vertices.clone(),
            indices: self.indices.clone(),
            areas: self.areas.clone(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Triangulation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = TriangulationSerde::deserialize(deserializer)?;
        Triangulation::new(data.vertices, data.indices, data.areas)
            .map_err(serde::de::Error::custom)
    }
}
