//! Warp table deduplication and normalization.
//!
//! The dump lists one row per warp tile, so a door with a two-tile-wide
//! entrance shows up twice. Rows are collapsed by (origin, destination) map
//! pair before synthetic ids are handed out.

use std::collections::HashSet;

use hoenn_graph_catalog::{MapId, RawWarp, Warp};

use crate::ids::{IdKind, IdSequence, LocationIndex};

/// Drop every warp whose `(MapId, DestinationMap)` pair was already seen.
///
/// The first occurrence is kept and the relative order of kept rows is
/// unchanged.
pub fn deduplicate_warps(raw_warps: &[RawWarp]) -> Vec<RawWarp> {
    let mut seen: HashSet<(&MapId, &MapId)> = HashSet::with_capacity(raw_warps.len());
    raw_warps
        .iter()
        .filter(|warp| seen.insert((&warp.map_id, &warp.destination_map)))
        .cloned()
        .collect()
}

/// Assign warp ids in order and resolve both ends against the location index.
///
/// A raw id with no matching location leaves the corresponding field `None`;
/// the warp is still emitted.
pub fn normalize_warps(warps: &[RawWarp], index: &LocationIndex, id_prefix: &str) -> Vec<Warp> {
    let mut ids = IdSequence::new(id_prefix, IdKind::Warp);

    warps
        .iter()
        .map(|raw| {
            let warp = Warp {
                id: ids.mint(),
                origin: raw.map_id.clone(),
                origin_id: index.resolve(&raw.map_id).map(str::to_string),
                standard_target: raw.destination_map.clone(),
                standard_target_id: index.resolve(&raw.destination_map).map(str::to_string),
                is_locked: raw.is_locked,
            };
            if warp.origin_id.is_none() {
                log::debug!("{}: origin map {} has no location", warp.id, warp.origin);
            }
            if warp.standard_target_id.is_none() {
                log::debug!(
                    "{}: target map {} has no location",
                    warp.id,
                    warp.standard_target
                );
            }
            warp
        })
        .collect()
}
