use hexplore::{
    visible_set, Biome, Explorer, HexPoint, MapCollection, Survey,
};

/// A save file in the browser tool's format: no grid size, no `explored` on
/// some hexes, and extra metadata that we don't care about
const LEGACY: &str = r#"{
    "version": "1.0",
    "maps": {
        "Default Map": {
            "seed": "Default Map",
            "hexes": {
                "5,5": {"biome": "Forest", "feature": "", "notes": "start here"},
                "4,5": {"biome": "Unexplored", "feature": "", "notes": ""},
                "6,5": {"biome": "River", "feature": "Mist Dock", "notes": "", "explored": true}
            }
        },
        "Second": {
            "seed": 1700000000000,
            "hexes": {}
        }
    },
    "activeMap": "Default Map",
    "exportDate": "2024-05-01T12:00:00.000Z"
}"#;

#[test]
fn test_load_legacy() {
    let collection = MapCollection::from_json(LEGACY).unwrap();
    assert!(!collection.exploration_mode);
    assert_eq!(collection.active_map, "Default Map");
    assert_eq!(
        collection.maps.keys().collect::<Vec<_>>(),
        vec!["Default Map", "Second"]
    );
    assert_eq!(collection.maps["Second"].seed().as_str(), "1700000000000");

    let map = collection.active_map().unwrap();
    assert_eq!(map.grid().len(), 144);
    let hex = map.get(HexPoint::new(5, 5)).unwrap();
    assert_eq!(hex.biome(), Some(Biome::Forest));
    assert_eq!(hex.notes(), "start here");
    assert!(!hex.explored());
    assert!(map.get(HexPoint::new(4, 5)).unwrap().is_unexplored());
    assert!(map.get(HexPoint::new(6, 5)).unwrap().explored());
}

#[test]
fn test_round_trip_keeps_order() {
    let mut collection = MapCollection::default();
    collection.set_exploration_mode(true);
    let map = collection.active_map_mut().unwrap();
    Explorer::default()
        .start_at(map, HexPoint::new(2, 9))
        .unwrap();

    let json = collection.to_json().unwrap();
    assert!(json.contains("\"activeMap\": \"Default Map\""));
    assert!(json.contains("\"explorationMode\": true"));
    assert!(json.contains("\"biome\": \"Unexplored\""));

    let loaded = MapCollection::from_json(&json).unwrap();
    assert_eq!(loaded, collection);
    let keys = |c: &MapCollection| -> Vec<HexPoint> {
        c.active_map().unwrap().hexes().keys().copied().collect()
    };
    assert_eq!(keys(&loaded), keys(&collection));
    assert_eq!(
        visible_set(loaded.active_map().unwrap(), loaded.exploration_mode),
        visible_set(
            collection.active_map().unwrap(),
            collection.exploration_mode
        )
    );
}

#[test]
fn test_load_errors() {
    // Active map doesn't exist
    let json = LEGACY.replace(
        r#""activeMap": "Default Map""#,
        r#""activeMap": "Gone""#,
    );
    assert!(MapCollection::from_json(&json).is_err());

    // Unknown biome
    let json = LEGACY.replace(r#""biome": "Forest""#, r#""biome": "Tundra""#);
    assert!(MapCollection::from_json(&json).is_err());

    // Key outside the grid
    let json = LEGACY.replace("\"5,5\"", "\"12,5\"");
    assert!(MapCollection::from_json(&json).is_err());

    // Explored hex with no biome
    let json = LEGACY.replace(
        r#""4,5": {"biome": "Unexplored", "feature": "", "notes": ""}"#,
        r#""4,5": {"biome": "Unexplored", "feature": "", "notes": "", "explored": true}"#,
    );
    let err = MapCollection::from_json(&json).unwrap_err();
    assert!(format!("{:#}", err).contains("explored but has no biome"));

    // Two spellings of the same hex would overwrite each other
    let json = LEGACY.replace("\"4,5\"", "\" 05, +5\"");
    let err = MapCollection::from_json(&json).unwrap_err();
    assert!(format!("{:#}", err).contains("should be written as"));

    assert!(MapCollection::from_json("not json").is_err());
}

#[test]
fn test_explore_within_collection() {
    let mut collection = MapCollection::from_json(LEGACY).unwrap();
    let mut explorer = Explorer::default();
    let map = collection.active_map_mut().unwrap();
    let exploration = explorer
        .explore(map, HexPoint::new(5, 5), Survey::new(Biome::Forest))
        .unwrap()
        .unwrap();
    // Notes from the survey replace the old ones
    assert_eq!(exploration.updated.notes(), "");
    // 6,5 was already known, the rest are new or placeholders
    assert!(!exploration.generated.contains_key(&HexPoint::new(6, 5)));
    assert!(exploration.generated.contains_key(&HexPoint::new(4, 5)));
    assert_eq!(exploration.generated.len(), 5);
}
