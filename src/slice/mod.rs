//! Player slices: the five tiles a player starts next to.
//!
//! A slice's aggregates are always recomputed from its member tiles after a
//! mutation, never patched incrementally.

pub mod placement;

use std::cmp::Ordering;

use crate::catalog::{Color, Tile};

pub use placement::{is_adjacent, PlacedSlice, HUB_SLOT, RING_SLOTS, SLOT_COUNT};

/// Number of tiles in a complete slice.
pub const SLICE_SIZE: usize = 5;
/// Red tiles dealt to each slice.
pub const RED_PER_SLICE: usize = 2;
/// Blue tiles dealt to each slice.
pub const BLUE_PER_SLICE: usize = 3;

/// A mutable group of tiles with cached aggregates.
///
/// Holds exactly [`SLICE_SIZE`] tiles outside of a rebalancing swap. A swap
/// removes a tile first and adds the replacement afterwards, so the slice
/// briefly holds one tile fewer.
#[derive(Debug, Clone)]
pub struct Slice {
    tiles: Vec<Tile>,
    resources: f64,
    influence: f64,
    technology: String,
    wormholes: String,
    absolute_value: f64,
}

impl Slice {
    /// Creates a slice owning the given tiles.
    pub fn new(tiles: Vec<Tile>) -> Self {
        let mut slice = Slice {
            tiles,
            resources: 0.0,
            influence: 0.0,
            technology: String::new(),
            wormholes: String::new(),
            absolute_value: 0.0,
        };
        slice.update_values();
        slice
    }

    /// Recomputes every aggregate from the current members.
    fn update_values(&mut self) {
        self.resources = 0.0;
        self.influence = 0.0;
        self.absolute_value = 0.0;
        self.technology.clear();
        self.wormholes.clear();

        for tile in &self.tiles {
            self.resources += tile.resources();
            self.influence += tile.influence();
            self.technology.push_str(tile.technology());
            self.wormholes.push_str(tile.wormholes());
            self.absolute_value += tile.absolute_value();
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn resources(&self) -> f64 {
        self.resources
    }

    pub fn influence(&self) -> f64 {
        self.influence
    }

    pub fn technology(&self) -> &str {
        &self.technology
    }

    pub fn wormholes(&self) -> &str {
        &self.wormholes
    }

    pub fn absolute_value(&self) -> f64 {
        self.absolute_value
    }

    /// Resources per influence. Infinite when the slice has no influence,
    /// including a slice with neither.
    pub fn resource_ratio(&self) -> f64 {
        if self.influence == 0.0 {
            f64::INFINITY
        } else {
            self.resources / self.influence
        }
    }

    /// Orders slices by absolute value only.
    pub fn cmp_value(&self, other: &Slice) -> Ordering {
        self.absolute_value.total_cmp(&other.absolute_value)
    }

    /// Whether one of resources or influence is at least double the other.
    pub fn is_skewed(&self) -> bool {
        self.resources >= 2.0 * self.influence || self.influence >= 2.0 * self.resources
    }

    /// Iterates over the member tiles of one color, in current order.
    pub fn tiles_of(&self, color: Color) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |t| t.color() == color)
    }

    /// Adds a tile and recomputes the aggregates.
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
        self.update_values();
    }

    /// Removes the highest-valued tile of the given color.
    ///
    /// Members are left sorted by descending value; among equal values the
    /// earlier tile wins.
    pub fn remove_best_tile(&mut self, color: Color) -> Option<Tile> {
        self.tiles.sort_by(|a, b| b.cmp_value(a));
        self.take_first(|t| t.color() == color)
    }

    /// Removes the lowest-valued tile of the given color.
    pub fn remove_worst_tile(&mut self, color: Color) -> Option<Tile> {
        self.tiles.sort_by(|a, b| a.cmp_value(b));
        self.take_first(|t| t.color() == color)
    }

    /// Removes the tile contributing most to the slice's dominant side:
    /// the top resource tile when resources exceed influence, otherwise the
    /// top influence tile.
    pub fn remove_excessive_tile(&mut self) -> Option<Tile> {
        if self.resources > self.influence {
            self.tiles
                .sort_by(|a, b| b.resources().total_cmp(&a.resources()));
        } else {
            self.tiles
                .sort_by(|a, b| b.influence().total_cmp(&a.influence()));
        }
        self.take_first(|_| true)
    }

    fn take_first(&mut self, pred: impl Fn(&Tile) -> bool) -> Option<Tile> {
        let idx = self.tiles.iter().position(pred)?;
        let tile = self.tiles.remove(idx);
        self.update_values();
        Some(tile)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::Planet;

    /// Builds a single-planet tile with raw resource/influence values.
    pub(crate) fn tile(id: u32, color: Color, resources: u32, influence: u32) -> Tile {
        let planets = if resources == 0 && influence == 0 {
            Vec::new()
        } else {
            vec![Planet::new(format!("P{}", id), resources, influence, "", "test")]
        };
        Tile::new(id, color, planets, Vec::new())
    }

    fn ids(slice: &Slice) -> Vec<u32> {
        slice.tiles().iter().map(|t| t.id()).collect()
    }

    fn sample() -> Slice {
        Slice::new(vec![
            tile(1, Color::Red, 0, 0),
            tile(2, Color::Red, 1, 0),
            tile(3, Color::Blue, 3, 0),
            tile(4, Color::Blue, 0, 2),
            tile(5, Color::Blue, 0, 3),
        ])
    }

    #[test]
    fn aggregates_are_sums_of_members() {
        let slice = sample();
        assert_eq!(slice.len(), SLICE_SIZE);
        assert_eq!(slice.resources(), 4.0);
        assert_eq!(slice.influence(), 5.0);
        assert_eq!(slice.absolute_value(), 9.0);
        assert!(!slice.is_skewed());
    }

    #[test]
    fn aggregates_follow_add_and_remove() {
        let mut slice = sample();
        let removed = slice.remove_best_tile(Color::Blue).unwrap();
        assert_eq!(removed.id(), 3);
        assert_eq!(slice.len(), 4);
        assert_eq!(slice.absolute_value(), 6.0);
        assert_eq!(slice.resources(), 1.0);

        slice.add(tile(6, Color::Blue, 2, 0));
        assert_eq!(slice.len(), 5);
        assert_eq!(slice.absolute_value(), 8.0);
        let total: f64 = slice.tiles().iter().map(|t| t.absolute_value()).sum();
        assert_eq!(slice.absolute_value(), total);
    }

    #[test]
    fn remove_best_prefers_earlier_tile_on_ties() {
        let mut slice = Slice::new(vec![
            tile(1, Color::Blue, 2, 0),
            tile(2, Color::Blue, 0, 2),
            tile(3, Color::Red, 5, 0),
        ]);
        let best = slice.remove_best_tile(Color::Blue).unwrap();
        assert_eq!(best.id(), 1);
        assert_eq!(ids(&slice), vec![3, 2]);
    }

    #[test]
    fn remove_worst_of_color() {
        let mut slice = sample();
        let worst = slice.remove_worst_tile(Color::Blue).unwrap();
        assert_eq!(worst.id(), 4);
        let worst_red = slice.remove_worst_tile(Color::Red).unwrap();
        assert_eq!(worst_red.id(), 1);
    }

    #[test]
    fn remove_missing_color_returns_none() {
        let mut slice = Slice::new(vec![tile(1, Color::Red, 0, 0)]);
        assert!(slice.remove_best_tile(Color::Blue).is_none());
        assert!(slice.remove_worst_tile(Color::Blue).is_none());
        assert_eq!(slice.len(), 1);
    }

    #[test]
    fn remove_excessive_takes_dominant_side() {
        let mut res_heavy = Slice::new(vec![
            tile(1, Color::Blue, 2, 0),
            tile(2, Color::Blue, 3, 0),
            tile(3, Color::Blue, 0, 1),
        ]);
        assert!(res_heavy.is_skewed());
        assert_eq!(res_heavy.remove_excessive_tile().unwrap().id(), 2);

        let mut inf_heavy = Slice::new(vec![
            tile(1, Color::Blue, 1, 0),
            tile(2, Color::Blue, 0, 4),
            tile(3, Color::Blue, 0, 3),
        ]);
        assert_eq!(inf_heavy.remove_excessive_tile().unwrap().id(), 2);
    }

    #[test]
    fn skew_detection() {
        let slice = Slice::new(vec![tile(1, Color::Blue, 4, 0), tile(2, Color::Blue, 0, 2)]);
        assert!(slice.is_skewed());
        let slice = Slice::new(vec![tile(1, Color::Blue, 3, 0), tile(2, Color::Blue, 0, 2)]);
        assert!(!slice.is_skewed());
        // A slice with nothing at all counts as skewed.
        assert!(Slice::new(vec![tile(1, Color::Red, 0, 0)]).is_skewed());
    }

    #[test]
    fn resource_ratio_edge_cases() {
        let slice = Slice::new(vec![tile(1, Color::Blue, 3, 0)]);
        assert!(slice.resource_ratio().is_infinite());
        let slice = Slice::new(vec![tile(1, Color::Red, 0, 0)]);
        assert_eq!(slice.resource_ratio(), f64::INFINITY);
        let slice = Slice::new(vec![tile(1, Color::Blue, 3, 0), tile(2, Color::Blue, 0, 2)]);
        assert_eq!(slice.resource_ratio(), 1.5);
    }
}
