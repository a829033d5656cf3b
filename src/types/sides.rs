//! Domain edges and per-edge settings.
//!
//! The rectangular domain has four edges. [`SideBoundaries`] stores one
//! value per edge with named fields, so boundary setups read as
//! `west: inflow, east: outflow` instead of relying on array order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four edges of the rectangular domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// y = 0 (j = 0)
    South,
    /// x = Lx (i = nx - 1)
    East,
    /// y = Ly (j = ny - 1)
    North,
    /// x = 0 (i = 0)
    West,
}

impl Edge {
    /// All edges, counterclockwise from the bottom.
    pub const ALL: [Edge; 4] = [Edge::South, Edge::East, Edge::North, Edge::West];

    /// True for the edges whose outward normal is along x.
    #[inline]
    pub fn is_x_normal(self) -> bool {
        matches!(self, Edge::East | Edge::West)
    }

    /// Sign of the inward normal along its axis (+1 for south/west).
    #[inline]
    pub fn inward_sign(self) -> f64 {
        match self {
            Edge::South | Edge::West => 1.0,
            Edge::East | Edge::North => -1.0,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::South => "south",
            Edge::East => "east",
            Edge::North => "north",
            Edge::West => "west",
        };
        f.write_str(name)
    }
}

/// One value per domain edge.
///
/// # Example
///
/// ```
/// use floodplain_rs::types::{Edge, SideBoundaries};
///
/// let sides = SideBoundaries::new("wall", "outflow", "wall", "inflow");
/// assert_eq!(*sides.get(Edge::West), "inflow");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideBoundaries<T> {
    /// South edge (y = 0)
    pub south: T,
    /// East edge (x = Lx)
    pub east: T,
    /// North edge (y = Ly)
    pub north: T,
    /// West edge (x = 0)
    pub west: T,
}

impl<T> SideBoundaries<T> {
    /// Order: south, east, north, west (counterclockwise from bottom).
    pub fn new(south: T, east: T, north: T, west: T) -> Self {
        Self {
            south,
            east,
            north,
            west,
        }
    }

    /// Same value on all edges.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            south: value.clone(),
            east: value.clone(),
            north: value.clone(),
            west: value,
        }
    }

    /// Value for one edge.
    pub fn get(&self, edge: Edge) -> &T {
        match edge {
            Edge::South => &self.south,
            Edge::East => &self.east,
            Edge::North => &self.north,
            Edge::West => &self.west,
        }
    }

    /// Iterate as `(edge, value)` in order: south, east, north, west.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, &T)> {
        [
            (Edge::South, &self.south),
            (Edge::East, &self.east),
            (Edge::North, &self.north),
            (Edge::West, &self.west),
        ]
        .into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for SideBoundaries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S:{} E:{} N:{} W:{}",
            self.south, self.east, self.north, self.west
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_edge() {
        let sides = SideBoundaries::new(1, 2, 3, 4);
        assert_eq!(*sides.get(Edge::South), 1);
        assert_eq!(*sides.get(Edge::East), 2);
        assert_eq!(*sides.get(Edge::North), 3);
        assert_eq!(*sides.get(Edge::West), 4);
    }

    #[test]
    fn test_iter_order() {
        let sides = SideBoundaries::new('s', 'e', 'n', 'w');
        let edges: Vec<_> = sides.iter().map(|(edge, _)| edge).collect();
        assert_eq!(edges, Edge::ALL.to_vec());
    }

    #[test]
    fn test_inward_sign() {
        assert_eq!(Edge::West.inward_sign(), 1.0);
        assert_eq!(Edge::East.inward_sign(), -1.0);
        assert!(Edge::East.is_x_normal());
        assert!(!Edge::North.is_x_normal());
    }
}
