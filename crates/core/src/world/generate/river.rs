use crate::world::{
    generate::{Generate, MapBuilder},
    hex::{HexPoint, HexPointIndexSet},
    Biome,
};
use anyhow::Context;
use log::debug;

/// Max number of rivers carved per map
const MAX_RIVERS: usize = 3;
/// Max number of hexes a single river can visit
const MAX_RIVER_LENGTH: usize = 20;

/// Carve rivers from mountains toward the sea. Each river starts on a random
/// mountain hex, picks a random ocean hex as its target, then wanders toward
/// it one neighbor at a time, turning land into River as it goes. Moves that
/// head toward the target are weighted more heavily, but any in-bounds move
/// is possible, so rivers meander and can dead-end.
///
/// A map with no mountains or no ocean gets no rivers, and no random draws
/// are made at all in that case.
#[derive(Debug)]
pub struct RiverGenerator;

impl Generate for RiverGenerator {
    fn generate(&self, map: &mut MapBuilder) -> anyhow::Result<()> {
        // Both lists are taken once up front. Carving later rivers can turn
        // mountains into river, but they remain valid sources.
        let sources = map.points_of(Biome::Mountains);
        let targets = map.points_of(Biome::Ocean);
        if sources.is_empty() || targets.is_empty() {
            debug!(
                "Skipping rivers ({} mountains, {} oceans)",
                sources.len(),
                targets.len()
            );
            return Ok(());
        }

        let num_rivers = map.rng.index(MAX_RIVERS) + 1;
        for _ in 0..num_rivers {
            let source = map.rng.pick(&sources).context("no river source")?;
            let target = map.rng.pick(&targets).context("no river target")?;
            let path = carve(map, source, target);
            debug!(
                "Carved river {} -> {} ({} hexes)",
                source,
                target,
                path.len()
            );
        }
        Ok(())
    }
}

/// Walk a single river from `source` toward `target`, converting each land
/// hex along the way to River (and wiping its feature). Existing water is
/// left alone. The walk stops when it touches ocean, revisits a hex, or
/// reaches the length cap. Returns every hex visited, in order.
fn carve(
    map: &mut MapBuilder,
    source: HexPoint,
    target: HexPoint,
) -> HexPointIndexSet {
    let mut visited = HexPointIndexSet::default();
    let mut current = source;

    while visited.len() < MAX_RIVER_LENGTH {
        if !visited.insert(current) {
            break;
        }

        if let Some(hex) = map.hexes.get_mut(&current) {
            if !hex.is_water() {
                hex.biome = Some(Biome::River);
                hex.feature.clear();
            }
        }

        // Made it to the sea
        if map
            .grid
            .adjacents(current)
            .any(|neighbor| map.biome_at(&neighbor) == Some(Biome::Ocean))
        {
            break;
        }

        let moves = weighted_moves(map, current, target);
        if moves.is_empty() {
            break;
        }
        current = moves[map.rng.index(moves.len())];
    }

    visited
}

/// List the possible next steps from `current`, in neighbor order. Each
/// neighbor appears once, plus twice more for each axis where it heads the
/// same way as the target (standing still on an axis counts as matching a
/// target that's level on that axis).
fn weighted_moves(
    map: &MapBuilder,
    current: HexPoint,
    target: HexPoint,
) -> Vec<HexPoint> {
    let delta = |from: HexPoint, to: HexPoint| {
        (
            (i32::from(to.col()) - i32::from(from.col())).signum(),
            (i32::from(to.row()) - i32::from(from.row())).signum(),
        )
    };
    let (target_col, target_row) = delta(current, target);

    let mut moves = Vec::new();
    for neighbor in map.grid.adjacents(current) {
        let (step_col, step_row) = delta(current, neighbor);
        let mut weight = 1;
        if step_col == target_col {
            weight += 2;
        }
        if step_row == target_row {
            weight += 2;
        }
        moves.extend(std::iter::repeat(neighbor).take(weight));
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{generate::tests::builder, HexRecord};

    /// Fill a builder's grid with a single biome
    fn fill(map: &mut MapBuilder, biome: Biome) {
        for point in map.grid.points() {
            map.hexes.insert(point, HexRecord::new(biome));
        }
    }

    #[test]
    fn test_no_ocean_no_rivers() {
        let mut map = builder("dry", 6, 6);
        fill(&mut map, Biome::Mountains);
        let before = map.hexes.clone();
        let rng = map.rng.clone();

        RiverGenerator.generate(&mut map).unwrap();
        assert_eq!(map.hexes, before);
        // Nothing was drawn either
        assert_eq!(map.rng, rng);
    }

    #[test]
    fn test_weighted_moves() {
        let mut map = builder("w", 12, 12);
        fill(&mut map, Biome::Plains);
        // From (5,5) toward (5,0), straight north. N matches both axes and S
        // only matches on columns. The diagonals match neither.
        let moves =
            weighted_moves(&map, HexPoint::new(5, 5), HexPoint::new(5, 0));
        let count = |col, row| {
            moves
                .iter()
                .filter(|point| **point == HexPoint::new(col, row))
                .count()
        };
        assert_eq!(count(4, 5), 1); // NW, odd col so same row
        assert_eq!(count(5, 4), 5); // N
        assert_eq!(count(6, 5), 1); // NE
        assert_eq!(count(4, 6), 1); // SW
        assert_eq!(count(5, 6), 3); // S
        assert_eq!(count(6, 6), 1); // SE
        assert_eq!(moves.len(), 12);
    }

    #[test]
    fn test_carve_stops_at_cap() {
        // A huge landlocked grid, so the only way out is the length cap or a
        // revisit
        let mut map = builder("long", 60, 60);
        fill(&mut map, Biome::Forest);
        map.hexes[&HexPoint::new(59, 59)] = HexRecord::new(Biome::Ocean);
        map.hexes[&HexPoint::new(0, 0)].feature = "Hut".into();

        let path =
            carve(&mut map, HexPoint::new(0, 0), HexPoint::new(59, 59));
        assert!(!path.is_empty() && path.len() <= MAX_RIVER_LENGTH);
        assert_eq!(path.get_index(0), Some(&HexPoint::new(0, 0)));
        for point in &path {
            let hex = &map.hexes[point];
            assert_eq!(hex.biome(), Some(Biome::River));
            assert_eq!(hex.feature(), "");
        }
    }

    #[test]
    fn test_carve_next_to_ocean() {
        let mut map = builder("coast", 4, 4);
        fill(&mut map, Biome::Hills);
        map.hexes[&HexPoint::new(1, 0)] = HexRecord::new(Biome::Ocean);
        let rng = map.rng.clone();

        // Source touches the ocean, so the river is one hex long
        let path = carve(&mut map, HexPoint::new(0, 0), HexPoint::new(1, 0));
        assert_eq!(path.len(), 1);
        assert_eq!(map.biome_at(&HexPoint::new(0, 0)), Some(Biome::River));
        assert_eq!(map.biome_at(&HexPoint::new(1, 0)), Some(Biome::Ocean));
        assert_eq!(map.rng, rng);
    }
}
