use hexplore::{
    FeatureDensity, GenerationConfig, MapState, TerrainDensity, WaterAmount,
};
use validator::{Validate, ValidationErrors};

#[test]
fn test_config_validation() {
    let config = GenerationConfig {
        seed: "".into(),    // valid (empty seeds are allowed)
        cols: 0,            // invalid
        rows: 1001,         // invalid (too big)
        terrain_density: TerrainDensity::High,
        feature_density: FeatureDensity::Sparse,
        water_amount: WaterAmount::Minimal,
    };

    // This is a bit of a lazy check but it works well enough
    let err = MapState::generate(&config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["cols", "rows"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_config_bounds_are_inclusive() {
    for (cols, rows) in [(1, 1), (1000, 1), (1, 1000)] {
        let config = GenerationConfig {
            cols,
            rows,
            ..Default::default()
        };
        assert!(config.validate().is_ok(), "{}x{}", cols, rows);
    }
}

#[test]
fn test_config_defaults() {
    let a = GenerationConfig::default();
    let b = GenerationConfig::default();
    assert_eq!(a.grid_size().len(), 144);
    assert_eq!(a.feature_density, FeatureDensity::Normal);
    assert_eq!(a.water_amount, WaterAmount::Medium);
    // Random seeds, so two defaults (almost certainly) differ
    assert_ne!(a.seed, b.seed);
}

/// Configs are usually written by hand, so missing fields fall back to
/// defaults and integer seeds are accepted
#[cfg(feature = "json")]
#[test]
fn test_config_from_json() {
    use hexplore::Seed;

    let config: GenerationConfig = serde_json::from_str(
        r#"{"seed": 1700000000000, "rows": 8, "water_amount": "high"}"#,
    )
    .unwrap();
    assert_eq!(config.seed, Seed::from("1700000000000"));
    assert_eq!(config.cols, 12);
    assert_eq!(config.rows, 8);
    assert_eq!(config.water_amount, WaterAmount::High);
    assert_eq!(config.terrain_density, TerrainDensity::Medium);

    let err = serde_json::from_str::<GenerationConfig>(
        r#"{"feature_density": "lots"}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("unknown variant"), "{}", err);
}
