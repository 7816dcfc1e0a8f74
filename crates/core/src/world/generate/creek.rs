use crate::world::{
    generate::{Generate, MapBuilder},
    Biome,
};

/// Chance for each eligible hex next to a river to get a creek
const CREEK_CHANCE: f64 = 0.3;
const CREEK: &str = "Creek";

/// Sprinkle creeks on the land around rivers. River hexes are visited in map
/// order, and each of their land neighbors with no feature yet gets a roll.
/// Once a hex has a creek it's no longer eligible, so a hex bordering several
/// river cells can only be claimed once.
#[derive(Debug)]
pub struct CreekGenerator;

impl Generate for CreekGenerator {
    fn generate(&self, map: &mut MapBuilder) -> anyhow::Result<()> {
        for river in map.points_of(Biome::River) {
            for neighbor in map.grid.adjacents(river) {
                if let Some(hex) = map.hexes.get_mut(&neighbor) {
                    // The roll only happens for eligible hexes
                    if !hex.is_water()
                        && hex.feature.is_empty()
                        && map.rng.chance(CREEK_CHANCE)
                    {
                        hex.feature = CREEK.into();
                    }
                }
            }
        }
        Ok(())
    }
}
