use crate::world::{
    hex::{HexPoint, HexPointSet},
    HexRecord, MapState,
};

/// Get the set of hexes the player can currently see.
///
/// With exploration mode off, that's every hex the map knows about. With it
/// on, only explored hexes are visible, along with a one-hex halo around each
/// of them. Halo hexes are visible even if the map has no record for them
/// yet.
pub fn visible_set(map: &MapState, exploration_mode: bool) -> HexPointSet {
    if !exploration_mode {
        return map.hexes().keys().copied().collect();
    }

    let mut visible = HexPointSet::default();
    for (point, _) in map.hexes().iter().filter(|(_, hex)| hex.explored()) {
        visible.insert(*point);
        visible.extend(map.grid().adjacents(*point));
    }
    visible
}

/// Is a single hex visible? Cheaper than building the whole set when only one
/// hex matters.
pub fn is_visible(
    map: &MapState,
    exploration_mode: bool,
    point: HexPoint,
) -> bool {
    let explored =
        |point: HexPoint| map.get(point).map_or(false, HexRecord::explored);
    if !exploration_mode {
        map.get(point).is_some()
    } else {
        explored(point) || map.grid().adjacents(point).any(explored)
    }
}
