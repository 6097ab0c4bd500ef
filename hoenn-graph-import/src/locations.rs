//! Raw map descriptors → locations with synthetic ids.

use std::collections::BTreeSet;

use hoenn_graph_catalog::{Location, RawLocation};

use crate::ids::{IdKind, IdSequence, LocationIndex};

/// Locations in input order plus the raw-id lookup built alongside them.
#[derive(Debug, Clone)]
pub struct NormalizedLocations {
    pub locations: Vec<Location>,
    pub index: LocationIndex,
}

/// Emit exactly one `Location` per raw descriptor, in input order.
///
/// Nothing is skipped or merged: two descriptors with the same raw id still
/// become two locations, but the index resolves that raw id to the first.
pub fn normalize_locations(
    raw_locations: &[RawLocation],
    id_prefix: &str,
    games: &BTreeSet<String>,
) -> NormalizedLocations {
    let mut ids = IdSequence::new(id_prefix, IdKind::Location);
    let mut index = LocationIndex::default();

    let locations: Vec<Location> = raw_locations
        .iter()
        .map(|raw| {
            let location = Location {
                id: ids.mint(),
                map_id: raw.id.clone(),
                name: raw.name.clone(),
                games: games.clone(),
            };
            index.insert(&location.map_id, &location.id);
            location
        })
        .collect();

    NormalizedLocations { locations, index }
}
