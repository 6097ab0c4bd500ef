//! Synthetic id minting and raw-id lookup.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use hoenn_graph_catalog::{Location, MapId};

/// Record kinds that receive synthetic ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Location,
    Warp,
}

impl IdKind {
    pub fn tag(&self) -> char {
        match self {
            Self::Location => 'L',
            Self::Warp => 'W',
        }
    }
}

/// Monotonic id counter for one record kind.
///
/// Ids look like `HOE-L-0000`: prefix, kind tag, then the number of ids
/// already issued, zero-padded to four digits. Numbers past 9999 keep all
/// their digits.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: String,
    kind: IdKind,
    next: usize,
}

impl IdSequence {
    pub fn new(prefix: impl Into<String>, kind: IdKind) -> Self {
        Self {
            prefix: prefix.into(),
            kind,
            next: 0,
        }
    }

    pub fn mint(&mut self) -> String {
        let id = format!("{}-{}-{:04}", self.prefix, self.kind.tag(), self.next);
        self.next += 1;
        id
    }

    /// Number of ids minted so far.
    pub fn issued(&self) -> usize {
        self.next
    }
}

/// Raw map id → synthetic location id.
///
/// When several locations share a raw id, the first one inserted wins.
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    by_map: HashMap<MapId, String>,
}

impl LocationIndex {
    pub fn from_locations(locations: &[Location]) -> Self {
        let mut index = Self::default();
        for location in locations {
            index.insert(&location.map_id, &location.id);
        }
        index
    }

    /// Insert a mapping unless the raw id is already known.
    ///
    /// Returns `false` if an earlier location already claimed `map_id`.
    pub fn insert(&mut self, map_id: &MapId, location_id: &str) -> bool {
        match self.by_map.entry(map_id.clone()) {
            Entry::Occupied(existing) => {
                log::debug!(
                    "MapId {} already mapped to {}; ignoring {}",
                    map_id,
                    existing.get(),
                    location_id
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(location_id.to_string());
                true
            }
        }
    }

    /// Look up the synthetic id for a raw map id. A miss is `None`, not an error.
    pub fn resolve(&self, map_id: &MapId) -> Option<&str> {
        self.by_map.get(map_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_map.is_empty()
    }
}
