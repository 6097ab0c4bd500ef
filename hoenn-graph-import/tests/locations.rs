use std::collections::BTreeSet;

use hoenn_graph_catalog::*;
use hoenn_graph_import::*;

fn raw(id: MapId, name: &str) -> RawLocation {
    RawLocation {
        id,
        name: name.to_string(),
        connections: None,
    }
}

fn emerald() -> BTreeSet<String> {
    BTreeSet::from(["EMRL".to_string()])
}

#[test]
fn one_location_per_descriptor_in_input_order() {
    let raws: Vec<RawLocation> = (0..12)
        .map(|i| raw(MapId::Number(100 + i), &format!("Map{i}")))
        .collect();
    let normalized = normalize_locations(&raws, "HOE", &emerald());

    assert_eq!(normalized.locations.len(), 12);
    for (i, location) in normalized.locations.iter().enumerate() {
        assert_eq!(location.id, format!("HOE-L-{i:04}"));
        assert_eq!(location.map_id, raws[i].id);
        assert_eq!(location.name, raws[i].name);
        assert_eq!(location.games, emerald());
    }
    assert_eq!(normalized.locations[10].id, "HOE-L-0010");
}

#[test]
fn empty_input_yields_nothing() {
    let normalized = normalize_locations(&[], "HOE", &emerald());
    assert!(normalized.locations.is_empty());
    assert!(normalized.index.is_empty());
}

#[test]
fn shared_map_id_keeps_both_locations_but_indexes_the_first() {
    let raws = vec![
        raw(MapId::from("MAP_PETALBURG_CITY"), "PetalburgCity"),
        raw(MapId::from("MAP_PETALBURG_CITY"), "PetalburgCityCopy"),
    ];
    let normalized = normalize_locations(&raws, "HOE", &emerald());

    assert_eq!(normalized.locations.len(), 2);
    assert_eq!(normalized.locations[1].id, "HOE-L-0001");
    assert_eq!(
        normalized.index.resolve(&MapId::from("MAP_PETALBURG_CITY")),
        Some("HOE-L-0000")
    );
}

#[test]
fn prefix_and_games_come_from_the_caller() {
    let games = BTreeSet::from(["RUBY".to_string(), "SAPP".to_string()]);
    let normalized = normalize_locations(&[raw(MapId::Number(0), "Town")], "RSE", &games);

    assert_eq!(normalized.locations[0].id, "RSE-L-0000");
    assert_eq!(normalized.locations[0].games, games);
}
