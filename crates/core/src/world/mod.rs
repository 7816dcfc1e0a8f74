pub mod catalog;
pub mod explore;
mod generate;
pub mod hex;
pub mod visibility;

use crate::{
    config::Seed,
    timed,
    util::serde_biome,
    world::{
        generate::MapBuilder,
        hex::{GridSize, HexDirection, HexPoint, HexPointMap},
    },
    GenerationConfig,
};
use anyhow::{bail, Context};
use log::info;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use validator::Validate;

/// A biome is the terrain category of a hex. Every generated hex has exactly
/// one. Hexes that haven't been generated yet have no biome at all (see
/// [HexRecord::biome]).
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Biome {
    Forest,
    Plains,
    Mountains,
    Hills,
    Swamp,
    Desert,
    Ocean,
    River,
}

impl Biome {
    /// Every biome, in canonical order. Exploration draws uniformly from this
    /// list, so the order is load-bearing.
    pub const ALL: &'static [Biome] = &[
        Self::Forest,
        Self::Plains,
        Self::Mountains,
        Self::Hills,
        Self::Swamp,
        Self::Desert,
        Self::Ocean,
        Self::River,
    ];

    /// The biomes that can be chosen directly during full-map land
    /// generation. Ocean is seeded in its own pass, and River is only ever
    /// carved.
    pub const LAND: &'static [Biome] = &[
        Self::Forest,
        Self::Plains,
        Self::Mountains,
        Self::Hills,
        Self::Swamp,
        Self::Desert,
    ];

    /// Is this Ocean or River?
    pub fn is_water(self) -> bool {
        matches!(self, Self::Ocean | Self::River)
    }
}

/// Everything we know about a single hex.
///
/// A hex whose `biome` is `None` (saved as `"Unexplored"`) is a placeholder:
/// it has never been generated, so it is never `explored` and never has a
/// feature. Once `explored` is set it stays set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexRecord {
    #[serde(with = "serde_biome")]
    pub(crate) biome: Option<Biome>,
    /// Points of interest on this hex, joined with `", "`. Empty for none.
    pub(crate) feature: String,
    /// Free-form player notes
    pub(crate) notes: String,
    /// Older saves don't have this field at all, which means "not explored"
    #[serde(default)]
    pub(crate) explored: bool,
}

impl HexRecord {
    /// An unexplored placeholder hex
    pub fn unexplored() -> Self {
        Self::default()
    }

    /// A freshly generated, unexplored hex with no feature or notes
    pub fn new(biome: Biome) -> Self {
        Self {
            biome: Some(biome),
            ..Self::default()
        }
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = feature.into();
        self
    }

    pub fn biome(&self) -> Option<Biome> {
        self.biome
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn explored(&self) -> bool {
        self.explored
    }

    /// Has this hex not been generated yet?
    pub fn is_unexplored(&self) -> bool {
        self.biome.is_none()
    }

    /// Convenience method to check if this hex is Ocean or River. Returns
    /// false for land AND for hexes with no biome.
    pub fn is_water(&self) -> bool {
        self.biome.map_or(false, Biome::is_water)
    }

    fn check_invariants(&self, point: HexPoint) -> anyhow::Result<()> {
        if self.biome.is_none() {
            if self.explored {
                bail!("hex {} is explored but has no biome", point);
            }
            if !self.feature.is_empty() {
                bail!("hex {} has a feature but no biome", point);
            }
        }
        Ok(())
    }
}

/// What the player reports about a hex as they explore it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Survey {
    pub biome: Biome,
    pub feature: String,
    pub notes: String,
}

impl Survey {
    pub fn new(biome: Biome) -> Self {
        Self {
            biome,
            feature: String::new(),
            notes: String::new(),
        }
    }
}

/// A manual edit to a hex. Editing never changes whether a hex is explored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexEdit {
    pub biome: Option<Biome>,
    pub feature: String,
    pub notes: String,
}

/// What lies in one direction from a hex, as far as the map knows
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NeighborSlot<'a> {
    /// The direction leads off the edge of the grid
    Edge,
    /// The hex exists in the grid but the map has no record for it
    Unknown,
    Known(&'a HexRecord),
}

/// A single map: a bounded grid of hexes, plus the seed that owns it.
///
/// Hexes are kept in insertion order. Generation depends on that order (it
/// decides which mountain a river starts from, which river cell gets to place
/// a creek first, etc.), so it's preserved through serialization as well.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapState {
    seed: Seed,
    /// Saves from before grid sizes were configurable don't store this; they
    /// were all 12x12.
    #[serde(default)]
    grid: GridSize,
    #[serde(default)]
    hexes: HexPointMap<HexRecord>,
}

impl MapState {
    /// Generate a complete map from a config. Two maps generated from the
    /// same config will always be identical. Returns an error if the config
    /// is invalid.
    pub fn generate(config: &GenerationConfig) -> anyhow::Result<Self> {
        info!("Generating map with config {:#?}", config);

        config.validate().context("invalid config")?;

        let hexes = timed!(
            "Map generation",
            log::Level::Info,
            MapBuilder::new(config).generate_map()
        )?;

        Ok(Self {
            seed: config.seed.clone(),
            grid: config.grid_size(),
            hexes,
        })
    }

    /// Create a map where every hex in the grid exists but is unexplored.
    /// This is the starting point for an exploration-driven map.
    pub fn blank(seed: Seed, grid: GridSize) -> Self {
        let hexes = grid
            .points()
            .map(|point| (point, HexRecord::unexplored()))
            .collect();
        Self { seed, grid, hexes }
    }

    /// Build a map from existing hexes. Returns an error if any hex is outside
    /// the grid or breaks the unexplored invariant.
    pub fn from_hexes(
        seed: Seed,
        grid: GridSize,
        hexes: HexPointMap<HexRecord>,
    ) -> anyhow::Result<Self> {
        let map = Self { seed, grid, hexes };
        map.validate()?;
        Ok(map)
    }

    /// Check that every hex is in bounds and consistent. Maps loaded from
    /// disk should go through this before being used.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (point, hex) in &self.hexes {
            self.grid.ensure_contains(*point)?;
            hex.check_invariants(*point)?;
        }
        Ok(())
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// All known hexes, in map order
    pub fn hexes(&self) -> &HexPointMap<HexRecord> {
        &self.hexes
    }

    pub fn get(&self, point: HexPoint) -> Option<&HexRecord> {
        self.hexes.get(&point)
    }

    /// True while no hex has been explored, i.e. the player still needs to
    /// pick somewhere to start.
    pub fn needs_starting_point(&self) -> bool {
        !self.hexes.values().any(HexRecord::explored)
    }

    /// Overwrite the biome, feature and notes of a hex. The explored flag is
    /// kept as-is. Returns an error if the point is out of bounds, or if the
    /// edit would leave an unexplored placeholder with a feature or un-generate
    /// an explored hex.
    pub fn edit_hex(
        &mut self,
        point: HexPoint,
        edit: HexEdit,
    ) -> anyhow::Result<&HexRecord> {
        self.grid.ensure_contains(point)?;
        let explored = self.get(point).map_or(false, HexRecord::explored);
        let hex = HexRecord {
            biome: edit.biome,
            feature: edit.feature,
            notes: edit.notes,
            explored,
        };
        hex.check_invariants(point)
            .with_context(|| format!("invalid edit for hex {}", point))?;

        let entry = self.hexes.entry(point).or_default();
        *entry = hex;
        Ok(&*entry)
    }

    /// Describe the six neighbor slots around a hex, in [HexDirection] order
    pub fn neighborhood(
        &self,
        point: HexPoint,
    ) -> [(HexDirection, NeighborSlot<'_>); 6] {
        let mut slots = [(HexDirection::North, NeighborSlot::Edge); 6];
        let neighbors = self.grid.neighbors(point);
        for ((slot, direction), neighbor) in slots
            .iter_mut()
            .zip(HexDirection::iter())
            .zip(neighbors.iter())
        {
            let value = match neighbor {
                None => NeighborSlot::Edge,
                Some(neighbor) => match self.hexes.get(neighbor) {
                    None => NeighborSlot::Unknown,
                    Some(hex) => NeighborSlot::Known(hex),
                },
            };
            *slot = (direction, value);
        }
        slots
    }
}
