use crate::world::{
    generate::{Generate, MapBuilder},
    Biome, HexRecord,
};
use anyhow::Context;

/// Chance that a land hex copies one of its land neighbors instead of
/// picking a fresh biome
const CLUSTER_CHANCE: f64 = 0.7;

/// Fill every hex the ocean pass left empty with a land biome, in row-major
/// order. A hex looks at whichever neighbors already exist (ocean from the
/// previous pass, plus land from earlier in this one) and usually copies a
/// land biome from one of them, which is what makes biomes clump together.
///
/// Water neighbors never seed a cluster, so land never becomes Ocean or
/// River here.
#[derive(Debug)]
pub struct BiomeGenerator;

impl Generate for BiomeGenerator {
    fn generate(&self, map: &mut MapBuilder) -> anyhow::Result<()> {
        for point in map.grid.points() {
            if map.hexes.contains_key(&point) {
                continue;
            }

            let neighbor_biomes: Vec<Biome> = map
                .grid
                .adjacents(point)
                .filter_map(|neighbor| map.biome_at(&neighbor))
                .filter(|biome| !biome.is_water())
                .collect();

            // Only roll for clustering when there's something to cluster with
            let candidates: &[Biome] = if !neighbor_biomes.is_empty()
                && map.rng.chance(CLUSTER_CHANCE)
            {
                &neighbor_biomes
            } else {
                Biome::LAND
            };
            let biome = map
                .rng
                .pick(candidates)
                .with_context(|| format!("no biome candidates for {}", point))?;

            map.hexes.insert(point, HexRecord::new(biome));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{
        generate::{ocean::OceanGenerator, tests::builder},
        hex::HexPoint,
    };

    #[test]
    fn test_fills_every_hex_with_land() {
        let mut map = builder("land", 9, 7);
        OceanGenerator.generate(&mut map).unwrap();
        let oceans = map.hexes.len();
        BiomeGenerator.generate(&mut map).unwrap();

        assert_eq!(map.hexes.len(), 63);
        // Oceans stay first in map order, land follows
        for (i, hex) in map.hexes.values().enumerate() {
            let biome = hex.biome().unwrap();
            if i < oceans {
                assert_eq!(biome, Biome::Ocean);
            } else {
                assert!(Biome::LAND.contains(&biome), "{:?}", biome);
            }
        }
    }

    /// The first land hex has no land neighbors, so it makes exactly one
    /// draw, straight into the land list
    #[test]
    fn test_first_hex_without_neighbors() {
        let mut map = builder("x", 1, 1);
        let mut rng = map.rng.clone();
        BiomeGenerator.generate(&mut map).unwrap();
        let expected = Biome::LAND[rng.index(Biome::LAND.len())];
        assert_eq!(map.biome_at(&HexPoint::new(0, 0)), Some(expected));
        assert_eq!(map.rng, rng);
    }
}
