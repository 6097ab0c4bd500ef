use super::*;
use serde_json::json;

#[test]
fn number_and_name_map_ids_never_match() {
    assert_ne!(MapId::Number(1), MapId::from("1"));
    let parsed: Vec<MapId> = serde_json::from_value(json!([1, "1"])).unwrap();
    assert_eq!(parsed, vec![MapId::Number(1), MapId::Name("1".to_string())]);
}

#[test]
fn location_serializes_with_dump_field_names() {
    let location = Location {
        id: "HOE-L-0000".to_string(),
        map_id: MapId::from("MAP_ROUTE101"),
        name: "Route101".to_string(),
        games: BTreeSet::from(["EMRL".to_string()]),
    };
    assert_eq!(
        serde_json::to_value(&location).unwrap(),
        json!({
            "id": "HOE-L-0000",
            "MapId": "MAP_ROUTE101",
            "name": "Route101",
            "games": ["EMRL"],
        })
    );
}

#[test]
fn unresolved_warp_ids_serialize_as_null() {
    let warp = Warp {
        id: "HOE-W-0003".to_string(),
        origin: MapId::Number(12),
        origin_id: Some("HOE-L-0001".to_string()),
        standard_target: MapId::Number(99),
        standard_target_id: None,
        is_locked: true,
    };
    assert_eq!(
        serde_json::to_value(&warp).unwrap(),
        json!({
            "id": "HOE-W-0003",
            "origin": 12,
            "originId": "HOE-L-0001",
            "standardTarget": 99,
            "standardTargetId": null,
            "isLocked": true,
        })
    );
}

#[test]
fn unordered_key_ignores_node_order() {
    let forward = Connection {
        connection_type: "static".to_string(),
        nodes: ["HOE-L-0002".to_string(), "HOE-L-0000".to_string()],
        weight: 1,
    };
    let backward = Connection {
        nodes: ["HOE-L-0000".to_string(), "HOE-L-0002".to_string()],
        ..forward.clone()
    };
    assert_eq!(forward.unordered_key(), backward.unordered_key());
    assert_eq!(forward.unordered_key(), ("HOE-L-0000", "HOE-L-0002"));
}
