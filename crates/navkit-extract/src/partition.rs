use std::collections::BTreeMap;

use navkit_core::{AreaTag, Triangulation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Triangles sharing one area tag, as a flat index list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Submesh {
    pub area: AreaTag,
    pub indices: Vec<u32>,
}

impl Submesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Area tag -> index list, ordered by first appearance of each tag.
///
/// Submesh `i` of a single-mesh export is `submeshes()[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SubmeshIndex {
    submeshes: Vec<Submesh>,
}

impl SubmeshIndex {
    pub fn build(triangulation: &Triangulation) -> Self {
        let mut slots: BTreeMap<AreaTag, usize> = BTreeMap::new();
        let mut submeshes: Vec<Submesh> = Vec::new();

        for (tri, area) in triangulation.triangles() {
            let slot = *slots.entry(area).or_insert_with(|| {
                submeshes.push(Submesh {
                    area,
                    indices: Vec::new(),
                });
                submeshes.len() - 1
            });
            submeshes[slot].indices.extend_from_slice(&tri);
        }

        tracing::debug!(
            triangles = triangulation.triangle_count(),
            submeshes = submeshes.len(),
            "partitioned triangulation by area"
        );

        Self { submeshes }
    }

    pub fn len(&self) -> usize {
        self.submeshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submeshes.is_empty()
    }

    pub fn submeshes(&self) -> &[Submesh] {
        &self.submeshes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Submesh> {
        self.submeshes.iter()
    }

    pub fn get(&self, area: AreaTag) -> Option<&[u32]> {
        self.submeshes
            .iter()
            .find(|s| s.area == area)
            .map(|s| s.indices.as_slice())
    }

    pub fn total_indices(&self) -> usize {
        self.submeshes.iter().map(|s| s.indices.len()).sum()
    }

    /// Triangles with their area tag, in submesh order.
    pub fn flatten(&self) -> Vec<([u32; 3], AreaTag)> {
        self.submeshes
            .iter()
            .flat_map(|s| {
                s.indices
                    .chunks_exact(3)
                    .map(move |c| ([c[0], c[1], c[2]], s.area))
            })
            .collect()
    }

    pub fn into_submeshes(self) -> Vec<Submesh> {
        self.submeshes
    }
}

impl<'a> IntoIterator for &'a SubmeshIndex {
    type Item = &'a Submesh;
    type IntoIter = std::slice::Iter<'a, Submesh>;

    fn into_iter(self) -> Self::IntoIter {
        self.submeshes.iter()
    }
}
