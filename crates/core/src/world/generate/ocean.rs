use crate::world::{
    generate::{Generate, MapBuilder},
    Biome, HexRecord,
};

/// Seed ocean hexes uniformly across the grid. Each hex gets one draw, in
/// row-major order, and becomes ocean if the draw comes in under the
/// configured water amount. No clustering happens here; the land pass fills
/// in around whatever this leaves behind.
#[derive(Debug)]
pub struct OceanGenerator;

impl Generate for OceanGenerator {
    fn generate(&self, map: &mut MapBuilder) -> anyhow::Result<()> {
        let ocean_chance = map.water_amount.ocean_chance();
        for point in map.grid.points() {
            if map.rng.chance(ocean_chance) {
                map.hexes.insert(point, HexRecord::new(Biome::Ocean));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generate::tests::builder;

    #[test]
    fn test_one_draw_per_hex() {
        let mut map = builder("ocean", 5, 4);
        let mut expected = map.rng.clone();
        OceanGenerator.generate(&mut map).unwrap();
        for _ in 0..20 {
            expected.next_f64();
        }
        assert_eq!(map.rng, expected);
        assert!(map
            .hexes
            .values()
            .all(|hex| hex.biome() == Some(Biome::Ocean)));
    }

    #[test]
    fn test_oceans_in_row_major_order() {
        let mut map = builder("Default Map", 12, 12);
        OceanGenerator.generate(&mut map).unwrap();
        let points: Vec<_> = map.hexes.keys().copied().collect();
        let mut sorted = points.clone();
        sorted.sort_by_key(|point| (point.row(), point.col()));
        assert_eq!(points, sorted);
    }
}
