//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate System
//!
//! Maps are a bounded rectangle of flat-topped hexes addressed by *offset*
//! coordinates: `(col, row)`, with `(0, 0)` in the top-left corner. Columns
//! are laid out "odd-q": every odd column is shoved half a hex downward. That
//! means the diagonal neighbors of a hex depend on whether its column is even
//! or odd, while the north and south neighbors never do. See
//! [redblobgames](https://www.redblobgames.com/grids/hexagons/#coordinates-offset)
//! for a good visual explanation.
//!
//! Coordinates outside the grid don't exist. When asking for the neighbors of
//! an edge hex, the missing slots are reported as `None` rather than dropped,
//! so a slot index always maps to the same compass direction.

use anyhow::{anyhow, bail, Context};
use derive_more::Display;
use fnv::FnvBuildHasher;
use indexmap::{IndexMap, IndexSet};
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::HashSet, fmt, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// A set of hex points
pub type HexPointSet = HashSet<HexPoint, FnvBuildHasher>;
/// An ORDERED map of hex points to some `T`. Map order is significant during
/// generation (see [crate::MapState]), so every hex map is ordered.
pub type HexPointMap<T> = IndexMap<HexPoint, T, FnvBuildHasher>;
/// An ordered set of hex points
pub type HexPointIndexSet = IndexSet<HexPoint, FnvBuildHasher>;

/// A single hex position in a map. Displays (and serializes) as `"col,row"`,
/// which is also how hexes are keyed in saved maps.
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[display(fmt = "{},{}", col, row)]
pub struct HexPoint {
    col: u16,
    row: u16,
}

impl HexPoint {
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    pub fn col(&self) -> u16 {
        self.col
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    fn is_even_col(&self) -> bool {
        self.col % 2 == 0
    }
}

impl FromStr for HexPoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (col, row) = s.split_once(',').ok_or_else(|| {
            anyhow!("expected a hex key like \"3,4\", got {:?}", s)
        })?;
        let col = col
            .parse()
            .with_context(|| format!("invalid column in hex key {:?}", s))?;
        let row = row
            .parse()
            .with_context(|| format!("invalid row in hex key {:?}", s))?;
        let point = Self::new(col, row);
        // Keys are map identities, so "05,+5" must not alias "5,5"
        if point.to_string() != s {
            bail!("hex key {:?} should be written as \"{}\"", s, point);
        }
        Ok(point)
    }
}

impl Serialize for HexPoint {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        // Always a string, so points can be used as JSON object keys
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HexPoint {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexPointVisitor)
    }
}

struct HexPointVisitor;

impl<'de> Visitor<'de> for HexPointVisitor {
    type Value = HexPoint;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a hex key in the form \"col,row\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value.parse().map_err(|err| E::custom(format!("{:#}", err)))
    }
}

/// The six directions out of a hex. The declaration order here is the slot
/// order used everywhere neighbors are listed, so **don't reorder these**:
/// generation consumes random draws while walking neighbors in this order.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, EnumIter)]
pub enum HexDirection {
    #[display(fmt = "NW")]
    NorthWest,
    #[display(fmt = "N")]
    North,
    #[display(fmt = "NE")]
    NorthEast,
    #[display(fmt = "SW")]
    SouthWest,
    #[display(fmt = "S")]
    South,
    #[display(fmt = "SE")]
    SouthEast,
}

impl HexDirection {
    /// Get the direction pointing the opposite way. If hex `B` is in
    /// direction `d` from hex `A`, then `A` is in direction `d.opposite()`
    /// from `B`.
    pub fn opposite(self) -> Self {
        match self {
            Self::NorthWest => Self::SouthEast,
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::SouthWest => Self::NorthEast,
            Self::South => Self::North,
            Self::SouthEast => Self::NorthWest,
        }
    }

    /// The `(col, row)` offset of a step in this direction, from a hex in an
    /// even column (`true`) or an odd column (`false`)
    fn offset(self, even_col: bool) -> (i32, i32) {
        match (self, even_col) {
            (Self::North, _) => (0, -1),
            (Self::South, _) => (0, 1),
            (Self::NorthWest, true) => (-1, -1),
            (Self::NorthEast, true) => (1, -1),
            (Self::SouthWest, true) => (-1, 0),
            (Self::SouthEast, true) => (1, 0),
            (Self::NorthWest, false) => (-1, 0),
            (Self::NorthEast, false) => (1, 0),
            (Self::SouthWest, false) => (-1, 1),
            (Self::SouthEast, false) => (1, 1),
        }
    }
}

/// Dimensions of a map. Every map is a fixed `cols × rows` rectangle; points
/// outside it don't exist.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
#[display(fmt = "{}x{}", cols, rows)]
pub struct GridSize {
    pub cols: u16,
    pub rows: u16,
}

impl GridSize {
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Total number of hexes in the grid
    pub fn len(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Is the given point inside the grid?
    pub fn contains(self, point: HexPoint) -> bool {
        point.col < self.cols && point.row < self.rows
    }

    /// Return an error if the point is outside the grid
    pub fn ensure_contains(self, point: HexPoint) -> anyhow::Result<()> {
        if self.contains(point) {
            Ok(())
        } else {
            bail!("hex {} is outside the {} grid", point, self)
        }
    }

    /// Every point in the grid, in row-major order (left to right, then top
    /// to bottom).
    pub fn points(self) -> impl Iterator<Item = HexPoint> {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| HexPoint::new(col, row))
        })
    }

    /// Get the point one step from `point` in `direction`, or `None` if that
    /// step leaves the grid.
    pub fn step(
        self,
        point: HexPoint,
        direction: HexDirection,
    ) -> Option<HexPoint> {
        let (d_col, d_row) = direction.offset(point.is_even_col());
        let col = i32::from(point.col) + d_col;
        let row = i32::from(point.row) + d_row;
        if col >= 0
            && col < i32::from(self.cols)
            && row >= 0
            && row < i32::from(self.rows)
        {
            Some(HexPoint::new(col as u16, row as u16))
        } else {
            None
        }
    }

    /// Get all six neighbor slots of a point, in [HexDirection] order. Slots
    /// that fall outside the grid are `None`.
    pub fn neighbors(self, point: HexPoint) -> [Option<HexPoint>; 6] {
        let mut slots = [None; 6];
        for (slot, direction) in slots.iter_mut().zip(HexDirection::iter()) {
            *slot = self.step(point, direction);
        }
        slots
    }

    /// Iterate over the in-bounds neighbors of a point, in [HexDirection]
    /// order. Yields between 2 and 6 points for any grid that's at least 2x2.
    pub fn adjacents(self, point: HexPoint) -> impl Iterator<Item = HexPoint> {
        HexDirection::iter().filter_map(move |dir| self.step(point, dir))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(12, 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: GridSize = GridSize::new(12, 12);

    fn p(col: u16, row: u16) -> Option<HexPoint> {
        Some(HexPoint::new(col, row))
    }

    #[test]
    fn test_neighbors_even_col() {
        assert_eq!(
            GRID.neighbors(HexPoint::new(4, 4)),
            [p(3, 3), p(4, 3), p(5, 3), p(3, 4), p(4, 5), p(5, 4)]
        );
    }

    #[test]
    fn test_neighbors_odd_col() {
        assert_eq!(
            GRID.neighbors(HexPoint::new(5, 5)),
            [p(4, 5), p(5, 4), p(6, 5), p(4, 6), p(5, 6), p(6, 6)]
        );
    }

    #[test]
    fn test_neighbors_out_of_bounds() {
        // Top-left corner only has S and SE
        assert_eq!(
            GRID.neighbors(HexPoint::new(0, 0)),
            [None, None, None, None, p(0, 1), p(1, 0)]
        );
        // Bottom of an odd column loses everything southward
        assert_eq!(
            GRID.neighbors(HexPoint::new(11, 11)),
            [p(10, 11), p(11, 10), None, None, None, None]
        );
        assert_eq!(GRID.adjacents(HexPoint::new(0, 0)).count(), 2);
    }

    /// If N is a neighbor of P, then P is a neighbor of N in the mirrored slot
    #[test]
    fn test_adjacency_symmetry() {
        for grid in [GRID, GridSize::new(12, 8), GridSize::new(3, 7)] {
            for point in grid.points() {
                for direction in HexDirection::iter() {
                    if let Some(neighbor) = grid.step(point, direction) {
                        assert_eq!(
                            grid.step(neighbor, direction.opposite()),
                            Some(point),
                            "{} -> {} -> {}",
                            point,
                            direction,
                            neighbor
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_points_row_major() {
        let grid = GridSize::new(3, 2);
        let points: Vec<String> =
            grid.points().map(|point| point.to_string()).collect();
        assert_eq!(points, vec!["0,0", "1,0", "2,0", "0,1", "1,1", "2,1"]);
        assert_eq!(grid.len(), 6);
    }

    #[test]
    fn test_parse_hex_point() {
        assert_eq!("5,5".parse::<HexPoint>().unwrap(), HexPoint::new(5, 5));
        assert_eq!("3,11".parse::<HexPoint>().unwrap(), HexPoint::new(3, 11));
        // Only the canonical spelling of a key is accepted
        assert!(" 3, 11".parse::<HexPoint>().is_err());
        assert!("05,5".parse::<HexPoint>().is_err());
        assert!("+5,5".parse::<HexPoint>().is_err());
        assert!("5".parse::<HexPoint>().is_err());
        assert!("-1,2".parse::<HexPoint>().is_err());
        assert!("a,b".parse::<HexPoint>().is_err());
    }

    #[test]
    fn test_contains() {
        assert!(GRID.contains(HexPoint::new(11, 11)));
        assert!(!GRID.contains(HexPoint::new(12, 0)));
        assert!(GridSize::new(12, 8)
            .ensure_contains(HexPoint::new(3, 8))
            .is_err());
    }
}
