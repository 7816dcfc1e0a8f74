mod seed;

pub use seed::Seed;

use crate::world::hex::GridSize;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

/// Configuration that defines a full-map generation run. Two maps generated
/// with the same config will always be identical.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed for every random draw made during generation. See [Seed] for the
    /// formats it can be loaded from.
    pub seed: Seed,

    /// Width of the map, in hexes
    #[validate(range(min = 1, max = 1000))]
    pub cols: u16,

    /// Height of the map, in hexes
    #[validate(range(min = 1, max = 1000))]
    pub rows: u16,

    /// How tightly biomes clump together. Saved with the map for reference,
    /// but the clustering pass currently ignores it, so it has no effect on
    /// the output.
    pub terrain_density: TerrainDensity,

    /// How many hexes get a point of interest
    pub feature_density: FeatureDensity,

    /// How much of the map gets seeded as ocean
    pub water_amount: WaterAmount,
}

impl GenerationConfig {
    pub fn grid_size(&self) -> GridSize {
        GridSize::new(self.cols, self.rows)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            // Danger! This means the default will vary between calls!
            seed: Seed::random(),
            cols: 12,
            rows: 12,
            terrain_density: TerrainDensity::Medium,
            feature_density: FeatureDensity::Normal,
            water_amount: WaterAmount::Medium,
        }
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TerrainDensity {
    Low,
    Medium,
    High,
}

/// How likely a hex is to receive a feature. The same tier maps to different
/// probabilities depending on whether a whole map is being generated at once
/// or hexes are being revealed one by one during exploration: exploration is
/// deliberately more generous.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeatureDensity {
    Sparse,
    Normal,
    Dense,
}

impl FeatureDensity {
    /// Chance of a feature on each hex during full-map generation
    pub fn map_chance(self) -> f64 {
        match self {
            Self::Sparse => 0.15,
            Self::Normal => 0.25,
            Self::Dense => 0.4,
        }
    }

    /// Chance of a feature on each hex generated during exploration
    pub fn hex_chance(self) -> f64 {
        match self {
            Self::Sparse => 0.25,
            Self::Normal => 0.5,
            Self::Dense => 0.75,
        }
    }
}

impl Default for FeatureDensity {
    fn default() -> Self {
        Self::Normal
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WaterAmount {
    Minimal,
    Low,
    Medium,
    High,
}

impl WaterAmount {
    /// Chance for each hex to be seeded as ocean
    pub fn ocean_chance(self) -> f64 {
        match self {
            Self::Minimal => 0.05,
            Self::Low => 0.1,
            Self::Medium => 0.15,
            Self::High => 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tiers() {
        assert_eq!(
            "dense".parse::<FeatureDensity>().unwrap(),
            FeatureDensity::Dense
        );
        assert_eq!(
            "minimal".parse::<WaterAmount>().unwrap(),
            WaterAmount::Minimal
        );
        assert_eq!(TerrainDensity::High.to_string(), "high");
        assert!("Dense".parse::<FeatureDensity>().is_err());
    }

    /// The single-hex tiers are intentionally higher than the full-map ones
    #[test]
    fn test_feature_chances_differ() {
        for density in [
            FeatureDensity::Sparse,
            FeatureDensity::Normal,
            FeatureDensity::Dense,
        ] {
            assert!(density.hex_chance() > density.map_chance());
        }
        assert_eq!(FeatureDensity::Normal.map_chance(), 0.25);
        assert_eq!(FeatureDensity::Normal.hex_chance(), 0.5);
    }
}
