use navkit_core::{NavQuery, NavSettings, OffMeshLink, Raycaster, RawOffMeshLink, Vec3};

use crate::LinkParams;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LinkClass {
    /// The link descends from its start to the ground at its end.
    Drop,
    /// The link climbs from its start to the ground at its end.
    Jump,
}

/// Classify `delta = start.y - ground.y` against the bake limits.
///
/// A zero delta is a drop.
pub fn classify_vertical_delta(delta: f32, settings: &NavSettings) -> Option<LinkClass> {
    if delta >= 0.0 {
        (delta <= settings.max_drop_height).then_some(LinkClass::Drop)
    } else {
        (-delta <= settings.max_jump_distance).then_some(LinkClass::Jump)
    }
}

/// Re-seat a link's end point on the ground below it.
///
/// Probes up from `end` for a ceiling (falling back to `ceiling_height` above
/// it), then down from just under that ceiling for the ground. A surface less
/// than `agent_radius` above `end` is taken as the ground the end has sunk
/// under, not as a ceiling. The link is kept
/// when the vertical step from `start` to the ground is a valid drop or jump
/// and the ground point samples onto the surface within `agent_radius`.
pub fn correct_link<Q, R>(
    raw: &RawOffMeshLink,
    settings: &NavSettings,
    params: &LinkParams,
    query: &Q,
    raycaster: &R,
) -> Option<OffMeshLink>
where
    Q: NavQuery,
    R: Raycaster,
{
    let mut overhead = raycaster.raycast(raw.end, Vec3::Y, params.ceiling_height);
    if let Some(hit) = overhead {
        // An end sunk just under a surface belongs to that surface; the
        // ceiling is whatever lies above it.
        if hit.y - raw.end.y <= settings.agent_radius {
            tracing::trace!(end = ?raw.end, surface = ?hit, "link end is under its own surface");
            overhead = raycaster.raycast(
                hit + Vec3::Y * params.ceiling_clearance,
                Vec3::Y,
                params.ceiling_height,
            );
        }
    }
    let ceiling = match overhead {
        Some(hit) => hit - Vec3::Y * params.ceiling_clearance,
        None => raw.end + Vec3::Y * params.ceiling_height,
    };

    let Some(ground) = raycaster.raycast(ceiling, Vec3::NEG_Y, params.ceiling_height * 2.0) else {
        tracing::trace!(start = ?raw.start, end = ?raw.end, "link discarded: no ground below end");
        return None;
    };

    let delta = raw.start.y - ground.y;
    let Some(class) = classify_vertical_delta(delta, settings) else {
        tracing::trace!(start = ?raw.start, end = ?raw.end, delta, "link discarded: step too large");
        return None;
    };

    let Some(end) = query.sample_position(ground, settings.agent_radius) else {
        tracing::trace!(start = ?raw.start, ground = ?ground, "link discarded: ground is off the surface");
        return None;
    };

    tracing::trace!(start = ?raw.start, end = ?end, ?class, "link corrected");
    Some(OffMeshLink {
        end,
        ..OffMeshLink::from_raw(raw)
    })
}

/// Off-mesh links of a snapshot, optionally corrected onto the ground.
///
/// Without correction every raw link is returned unchanged. With correction,
/// links that fail any step of [`correct_link`] are dropped independently.
pub fn extract_links<Q, R>(
    raw: &[RawOffMeshLink],
    settings: &NavSettings,
    params: &LinkParams,
    query: &Q,
    raycaster: &R,
) -> Vec<OffMeshLink>
where
    Q: NavQuery,
    R: Raycaster,
{
    let links: Vec<OffMeshLink> = if params.correct {
        raw.iter()
            .filter_map(|link| correct_link(link, settings, params, query, raycaster))
            .collect()
    } else {
        raw.iter().map(OffMeshLink::from_raw).collect()
    };

    tracing::debug!(
        raw = raw.len(),
        kept = links.len(),
        corrected = params.correct,
        "extracted off-mesh links"
    );
    links
}
