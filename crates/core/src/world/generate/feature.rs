use crate::world::generate::{Generate, MapBuilder};

/// Give a random subset of hexes a feature from the world catalog. Every hex
/// without a feature rolls once, in map order; on a hit it gets a uniform pick
/// from its biome's list. Hexes that already have something (creeks, mostly)
/// are skipped without a roll.
#[derive(Debug)]
pub struct FeatureGenerator;

impl Generate for FeatureGenerator {
    fn generate(&self, map: &mut MapBuilder) -> anyhow::Result<()> {
        let chance = map.feature_density.map_chance();
        for hex in map.hexes.values_mut() {
            // Note the inclusive bound: a draw exactly at the chance still
            // gets a feature
            if !hex.feature.is_empty() || map.rng.next_f64() > chance {
                continue;
            }

            if let Some(biome) = hex.biome {
                // No draw is made for a biome with an empty list
                if let Some(feature) =
                    map.rng.pick(map.catalog.features(biome))
                {
                    hex.feature = feature;
                }
            }
        }
        Ok(())
    }
}
