//! The saved-file format: a named set of maps, one of which is active.

use crate::{
    config::Seed,
    world::{hex::GridSize, MapState},
};
use anyhow::{anyhow, bail, Context};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything that gets saved to disk. Maps are kept in the order they were
/// added. Managing which maps exist (create/rename/delete) is up to whoever
/// owns the file; the collection only hands out the active one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapCollection {
    pub version: String,
    pub maps: IndexMap<String, MapState>,
    pub active_map: String,
    /// Fog of war. Older files don't have this at all.
    #[serde(default)]
    pub exploration_mode: bool,
}

impl MapCollection {
    pub const VERSION: &'static str = "1.0";
    pub const DEFAULT_MAP: &'static str = "Default Map";

    /// Check that the collection is usable: it has a version, its active map
    /// exists, and every map is internally consistent.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.version.is_empty() {
            bail!("collection has no version");
        }
        if !self.maps.contains_key(&self.active_map) {
            bail!("active map {:?} does not exist", self.active_map);
        }
        for (name, map) in &self.maps {
            map.validate()
                .with_context(|| format!("invalid map {:?}", name))?;
        }
        Ok(())
    }

    pub fn active_map(&self) -> anyhow::Result<&MapState> {
        let name = &self.active_map;
        self.maps
            .get(name)
            .ok_or_else(|| anyhow!("active map {:?} does not exist", name))
    }

    pub fn active_map_mut(&mut self) -> anyhow::Result<&mut MapState> {
        let name = &self.active_map;
        self.maps
            .get_mut(name)
            .ok_or_else(|| anyhow!("active map {:?} does not exist", name))
    }

    pub fn set_exploration_mode(&mut self, exploration_mode: bool) {
        self.exploration_mode = exploration_mode;
    }

    /// Flip fog of war on/off, and return the new setting
    pub fn toggle_exploration_mode(&mut self) -> bool {
        self.exploration_mode = !self.exploration_mode;
        self.exploration_mode
    }
}

#[cfg(feature = "json")]
impl MapCollection {
    /// Parse a collection from JSON, then validate it
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let collection: Self =
            serde_json::from_str(json).context("malformed map collection")?;
        collection.validate()?;
        Ok(collection)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for MapCollection {
    /// A single blank map, named and seeded "Default Map"
    fn default() -> Self {
        let mut maps = IndexMap::new();
        maps.insert(
            Self::DEFAULT_MAP.to_owned(),
            MapState::blank(Seed::from(Self::DEFAULT_MAP), GridSize::default()),
        );
        Self {
            version: Self::VERSION.to_owned(),
            maps,
            active_map: Self::DEFAULT_MAP.to_owned(),
            exploration_mode: false,
        }
    }
}
