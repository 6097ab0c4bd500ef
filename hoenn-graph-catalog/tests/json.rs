use hoenn_graph_catalog::{
    CatalogError, MapId, RawWarp, load_raw_locations, load_warp_table, write_json_pretty,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_map(maps_dir: &Path, folder: &str, content: &str) {
    let dir = maps_dir.join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("map.json"), content).unwrap();
}

#[test]
fn load_locations_from_map_descriptors() {
    let tmp = TempDir::new().unwrap();
    let maps = tmp.path().join("maps");

    write_map(
        &maps,
        "Route101",
        r#"{
  "id": "MAP_ROUTE101",
  "name": "Route101",
  "layout": "LAYOUT_ROUTE101",
  "connections": [
    {"map": "MAP_LITTLEROOT_TOWN", "offset": 0, "direction": "down"}
  ]
}"#,
    );
    write_map(
        &maps,
        "LittlerootTown",
        r#"{"id": "MAP_LITTLEROOT_TOWN", "name": "LittlerootTown", "connections": null}"#,
    );
    // Only files literally named map.json count.
    fs::write(maps.join("Route101").join("scripts.json"), "{}").unwrap();

    let locations = load_raw_locations(&maps).unwrap();
    assert_eq!(locations.len(), 2);

    // Walk order is by file name.
    assert_eq!(locations[0].id, MapId::from("MAP_LITTLEROOT_TOWN"));
    assert!(locations[0].adjacent().is_empty());
    assert_eq!(locations[1].name, "Route101");
    assert_eq!(locations[1].adjacent().len(), 1);
    assert_eq!(locations[1].adjacent()[0].map, MapId::from("MAP_LITTLEROOT_TOWN"));
}

#[test]
fn nested_descriptors_are_found() {
    let tmp = TempDir::new().unwrap();
    let maps = tmp.path().join("maps");
    write_map(&maps, "indoor/BrendansHouse_1F", r#"{"id": 7, "name": "House"}"#);

    let locations = load_raw_locations(&maps).unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].id, MapId::Number(7));
    assert_eq!(locations[0].connections, None);
}

#[test]
fn missing_name_is_a_parse_error_naming_the_file() {
    let tmp = TempDir::new().unwrap();
    let maps = tmp.path().join("maps");
    write_map(&maps, "Broken", r#"{"id": "MAP_BROKEN"}"#);

    let err = load_raw_locations(&maps).unwrap_err();
    match err {
        CatalogError::Parse { path, source } => {
            assert!(path.ends_with("map.json"));
            assert!(source.to_string().contains("missing field `name`"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_maps_dir_is_reported() {
    let tmp = TempDir::new().unwrap();
    let err = load_raw_locations(&tmp.path().join("nonexistent")).unwrap_err();
    assert!(matches!(err, CatalogError::DirNotFound(_)));
}

#[test]
fn load_warp_table_keeps_order_and_duplicates() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("warpMap.json");
    fs::write(
        &path,
        r#"[
  {"MapId": 1, "DestinationMap": 2, "IsLocked": false, "WarpId": 0},
  {"MapId": 1, "DestinationMap": 2, "IsLocked": false, "WarpId": 1},
  {"MapId": 2, "DestinationMap": 1, "IsLocked": true}
]"#,
    )
    .unwrap();

    let warps = load_warp_table(&path).unwrap();
    assert_eq!(warps.len(), 3);
    assert_eq!(
        warps[2],
        RawWarp {
            map_id: MapId::Number(2),
            destination_map: MapId::Number(1),
            is_locked: true,
        }
    );
}

#[test]
fn warp_missing_lock_flag_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("warpMap.json");
    fs::write(&path, r#"[{"MapId": 1, "DestinationMap": 2}]"#).unwrap();

    let err = load_warp_table(&path).unwrap_err();
    assert!(err.to_string().contains("IsLocked"));
}

#[test]
fn pretty_output_uses_four_spaces_and_keeps_unicode() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out.json");
    write_json_pretty(&path, &serde_json::json!({"name": "Pokémon Center"})).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "{\n    \"name\": \"Pokémon Center\"\n}\n");
}
