mod biome;
mod creek;
mod feature;
mod ocean;
mod river;

use crate::{
    config::{FeatureDensity, WaterAmount},
    timed,
    util::random::SeededRandom,
    world::{
        catalog::FeatureCatalog,
        generate::{
            biome::BiomeGenerator, creek::CreekGenerator,
            feature::FeatureGenerator, ocean::OceanGenerator,
            river::RiverGenerator,
        },
        hex::{GridSize, HexPoint, HexPointMap},
        Biome, HexRecord,
    },
    GenerationConfig,
};
use anyhow::Context;
use fnv::FnvBuildHasher;
use log::info;
use std::fmt::Debug;

/// A container for generating a new map. This applies a series of generators
/// in sequence to create the map. These fields are public to allow for
/// disjoint borrowing of multiple fields at once.
///
/// Every generator draws from the same random stream, in a fixed order. The
/// map is ordered too: hexes are inserted ocean-first, then land, and every
/// pass that walks the map walks it in that order. Changing either will
/// change the output for every existing seed.
pub struct MapBuilder {
    pub grid: GridSize,

    /// The one random stream for the whole run
    pub rng: SeededRandom,

    pub feature_density: FeatureDensity,
    pub water_amount: WaterAmount,

    /// Feature names that can be placed, per biome
    pub catalog: FeatureCatalog,

    /// Every hex generated so far. Hexes are added by the first two passes;
    /// after that, hexes can be modified but never added or removed.
    pub hexes: HexPointMap<HexRecord>,
}

impl MapBuilder {
    pub fn new(config: &GenerationConfig) -> Self {
        let grid = config.grid_size();
        Self {
            grid,
            rng: SeededRandom::new(config.seed.as_str()),
            feature_density: config.feature_density,
            water_amount: config.water_amount,
            catalog: FeatureCatalog::world(),
            hexes: HexPointMap::with_capacity_and_hasher(
                grid.len(),
                FnvBuildHasher::default(),
            ),
        }
    }

    /// Generate a map by running a series of generation steps sequentially.
    /// Must be run from a blank slate. Outputs the finalized set of hexes.
    pub fn generate_map(mut self) -> anyhow::Result<HexPointMap<HexRecord>> {
        // Run each generation step. The order is very important!
        self.apply_generator(OceanGenerator)?;
        self.apply_generator(BiomeGenerator)?;
        self.apply_generator(RiverGenerator)?;
        self.apply_generator(CreekGenerator)?;
        self.apply_generator(FeatureGenerator)?;

        info!(
            "Generated {} hexes ({} with features)",
            self.hexes.len(),
            self.hexes
                .values()
                .filter(|hex| !hex.feature().is_empty())
                .count()
        );
        Ok(self.hexes)
    }

    /// A helper to run a generation step on this builder.
    fn apply_generator(
        &mut self,
        generator: impl Debug + Generate,
    ) -> anyhow::Result<()> {
        timed!(&format!("{:?}", generator), generator.generate(self))
            .with_context(|| format!("error in {:?}", generator))
    }

    /// Get the biome of a generated hex. Every hex in the builder has one.
    fn biome_at(&self, point: &HexPoint) -> Option<Biome> {
        self.hexes.get(point).and_then(HexRecord::biome)
    }

    /// Every generated hex of the given biome, in map order
    fn points_of(&self, biome: Biome) -> Vec<HexPoint> {
        self.hexes
            .iter()
            .filter(|(_, hex)| hex.biome() == Some(biome))
            .map(|(point, _)| *point)
            .collect()
    }
}

/// A type that generates some sort of data for the map. Generators are
/// chained together, where each one adds some more data until the map is
/// complete.
trait Generate {
    /// Apply some generation step to the given map. Any failure here is a
    /// bug in the generator rather than anything invalid about the input,
    /// since the config has already been validated.
    fn generate(&self, map: &mut MapBuilder) -> anyhow::Result<()>;
}
