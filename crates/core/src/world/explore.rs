//! Incremental map generation. Instead of generating the whole map up front,
//! a map can start out blank and get filled in as the player explores it:
//! every time a hex is explored, its unknown neighbors are generated on the
//! spot.

use crate::{
    config::FeatureDensity,
    util::random::SeededRandom,
    world::{
        catalog::FeatureCatalog,
        hex::{HexPoint, HexPointMap},
        Biome, HexRecord, MapState, Survey,
    },
};
use anyhow::{anyhow, bail};
use log::debug;
use serde::Serialize;

/// Chance that a new hex copies a biome from around the explored hex
const CLUSTER_CHANCE: f64 = 0.6;
/// Chance of a second feature on a hex that already got one, dense only
const SECOND_FEATURE_CHANCE: f64 = 0.25;

/// Generates hexes one at a time as a map is explored.
///
/// An explorer owns a single random stream. It should live as long as the
/// exploration session does, since every explore continues the stream where
/// the last one left off. Two sessions that start from the same seed and
/// perform the same explores in the same order will generate the same hexes.
#[derive(Clone, Debug)]
pub struct Explorer {
    rng: SeededRandom,
    catalog: FeatureCatalog,
    feature_density: FeatureDensity,
}

/// The result of exploring a hex
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Exploration {
    pub point: HexPoint,
    /// The explored hex, as it now stands in the map
    pub updated: HexRecord,
    /// Neighbors that were generated by this explore, in generation order
    pub generated: HexPointMap<HexRecord>,
}

impl Explorer {
    /// Seed used when a session doesn't ask for a specific one
    pub const DEFAULT_SEED: &'static str = "exploration-seed";

    pub fn new(seed: &str) -> Self {
        Self {
            rng: SeededRandom::new(seed),
            catalog: FeatureCatalog::exploration(),
            feature_density: FeatureDensity::default(),
        }
    }

    pub fn with_feature_density(
        mut self,
        feature_density: FeatureDensity,
    ) -> Self {
        self.feature_density = feature_density;
        self
    }

    /// Replace the catalog that features are drawn from
    pub fn with_catalog(mut self, catalog: FeatureCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The current state of the random stream
    pub fn rng(&self) -> &SeededRandom {
        &self.rng
    }

    pub fn feature_density(&self) -> FeatureDensity {
        self.feature_density
    }

    /// Generate a single unexplored hex. If `neighboring_biomes` isn't empty,
    /// the new hex will usually copy one of them. Otherwise (or if that roll
    /// misses) its biome is drawn from every biome, water included. Unlike
    /// full-map generation, that means an explored hex can turn up Ocean or
    /// River out of nowhere.
    pub fn generate_hex(&mut self, neighboring_biomes: &[Biome]) -> HexRecord {
        let (biome, feature) = self.roll(neighboring_biomes);
        HexRecord::new(biome).with_feature(feature)
    }

    /// Draw a biome and feature for a new hex. See [Self::generate_hex].
    fn roll(&mut self, neighboring_biomes: &[Biome]) -> (Biome, String) {
        let candidates = if !neighboring_biomes.is_empty()
            && self.rng.chance(CLUSTER_CHANCE)
        {
            neighboring_biomes
        } else {
            Biome::ALL
        };
        // Both candidate lists are non-empty here
        let biome = candidates[self.rng.index(candidates.len())];

        let mut features: Vec<String> = Vec::new();
        if self.rng.chance(self.feature_density.hex_chance()) {
            let options = self.catalog.features(biome);
            if let Some(feature) = self.rng.pick(options) {
                features.push(feature);
                if self.feature_density == FeatureDensity::Dense
                    && self.rng.chance(SECOND_FEATURE_CHANCE)
                {
                    // Can be a repeat of the first
                    features.extend(self.rng.pick(options));
                }
            }
        }

        (biome, features.join(", "))
    }

    /// Mark a hex as explored with whatever the player saw there, then
    /// generate any of its neighbors that haven't been generated yet.
    ///
    /// Exploring a hex that's already explored does nothing at all (no
    /// changes to the map, no random draws) and returns `Ok(None)`. Returns
    /// an error if the point is outside the map.
    pub fn explore(
        &mut self,
        map: &mut MapState,
        point: HexPoint,
        survey: Survey,
    ) -> anyhow::Result<Option<Exploration>> {
        map.grid.ensure_contains(point)?;
        if map.get(point).map_or(false, HexRecord::explored) {
            debug!("Hex {} is already explored", point);
            return Ok(None);
        }

        let updated = HexRecord {
            biome: Some(survey.biome),
            feature: survey.feature,
            notes: survey.notes,
            explored: true,
        };
        map.hexes.insert(point, updated.clone());

        // Collected once for the whole ring, before any neighbor is generated
        let neighbors: Vec<HexPoint> = map.grid.adjacents(point).collect();
        let neighboring_biomes = known_biomes(map, &neighbors);

        let mut generated = HexPointMap::default();
        for neighbor in neighbors {
            if map.get(neighbor).map_or(true, HexRecord::is_unexplored) {
                let hex = self.generate_hex(&neighboring_biomes);
                map.hexes.insert(neighbor, hex.clone());
                generated.insert(neighbor, hex);
            }
        }

        debug!(
            "Explored {} as {}, generated {} neighbors",
            point,
            survey.biome,
            generated.len()
        );
        Ok(Some(Exploration {
            point,
            updated,
            generated,
        }))
    }

    /// Pick where exploration begins on a fresh map. The starting hex is
    /// generated like any other new hex (biased by whatever is already known
    /// around it), then explored with that biome and feature. Any notes
    /// already on the hex are kept.
    ///
    /// Returns an error if the point is outside the map, or if some hex has
    /// already been explored.
    pub fn start_at(
        &mut self,
        map: &mut MapState,
        point: HexPoint,
    ) -> anyhow::Result<Exploration> {
        map.grid.ensure_contains(point)?;
        if !map.needs_starting_point() {
            bail!("map already has a starting point");
        }

        let neighbors: Vec<HexPoint> = map.grid.adjacents(point).collect();
        let neighboring_biomes = known_biomes(map, &neighbors);
        let (biome, feature) = self.roll(&neighboring_biomes);
        let survey = Survey {
            biome,
            feature,
            notes: map
                .get(point)
                .map(|hex| hex.notes.clone())
                .unwrap_or_default(),
        };

        self.explore(map, point, survey)?
            .ok_or_else(|| anyhow!("hex {} is already explored", point))
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// Biomes of every generated hex among `points`, in order. Water counts.
fn known_biomes(map: &MapState, points: &[HexPoint]) -> Vec<Biome> {
    points
        .iter()
        .filter_map(|point| map.get(*point))
        .filter_map(HexRecord::biome)
        .collect()
}
