//! Hexplore is a hex map generator for tabletop exploration games. This crate
//! contains all the core logic: seeded full-map generation, incremental
//! exploration with fog of war, and the saved-file format. Presentation and
//! file handling are implemented elsewhere.
//!
//! ```
//! use hexplore::{GenerationConfig, MapState};
//!
//! let config = GenerationConfig {
//!     seed: "test".into(),
//!     ..Default::default()
//! };
//! let map = MapState::generate(&config).unwrap();
//! println!("{}", map.hexes().len());
//! // From here you can display/explore the map however you like.
//! ```
//!
//! Maps can also be grown a ring at a time as the player explores:
//!
//! ```
//! use hexplore::{Biome, Explorer, GridSize, HexPoint, MapState, Survey};
//!
//! let mut map = MapState::blank("my map".into(), GridSize::default());
//! let mut explorer = Explorer::default();
//! let exploration = explorer
//!     .explore(&mut map, HexPoint::new(5, 5), Survey::new(Biome::Forest))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(exploration.generated.len(), 6);
//! ```
//!
//! See [GenerationConfig] for details on how generation can be customized.

mod collection;
mod config;
mod util;
mod world;

pub use crate::{
    collection::MapCollection,
    config::{
        FeatureDensity, GenerationConfig, Seed, TerrainDensity, WaterAmount,
    },
    util::random::SeededRandom,
    world::{
        catalog::FeatureCatalog,
        explore::{Exploration, Explorer},
        hex::{GridSize, HexDirection, HexPoint, HexPointMap, HexPointSet},
        visibility::{is_visible, visible_set},
        Biome, HexEdit, HexRecord, MapState, NeighborSlot, Survey,
    },
};
