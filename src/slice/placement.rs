//! Physical arrangement of a slice's tiles.
//!
//! A placed slice has seven slots: the hub (slot 0) next to the home system,
//! which touches every other slot, and a ring around it. Slots 2 and 4 are
//! left to the map layout and never receive a slice tile, so the five tiles
//! go to the hub and ring slots 1, 3, 5 and 6.

use rand::seq::SliceRandom;
use rand::Rng;

use super::Slice;
use crate::catalog::{Color, Tile};
use crate::generate::GenerateError;

/// Number of slots in a placed slice.
pub const SLOT_COUNT: usize = 7;
/// The slot adjacent to every other slot.
pub const HUB_SLOT: usize = 0;
/// Ring slots that receive tiles.
pub const RING_SLOTS: [usize; 4] = [1, 3, 5, 6];

/// Whether two slots touch: the hub touches everything, ring slots touch
/// when they are consecutive modulo six.
pub fn is_adjacent(a: usize, b: usize) -> bool {
    if a == HUB_SLOT || b == HUB_SLOT {
        return true;
    }
    let (a, b) = (a % 6, b % 6);
    (a + 1) % 6 == b || (b + 1) % 6 == a
}

/// A slice whose tiles have been assigned to slots.
#[derive(Debug, Clone)]
pub struct PlacedSlice {
    positions: [Option<Tile>; SLOT_COUNT],
    resources: f64,
    influence: f64,
    technology: String,
    wormholes: String,
    absolute_value: f64,
}

impl PlacedSlice {
    /// Slot contents, `None` for empty slots.
    pub fn positions(&self) -> &[Option<Tile>; SLOT_COUNT] {
        &self.positions
    }

    /// Filled slots with their tiles, in slot order.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, &Tile)> {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(slot, t)| t.as_ref().map(|t| (slot, t)))
    }

    pub fn hub(&self) -> Option<&Tile> {
        self.positions[HUB_SLOT].as_ref()
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

    /// Pairs of slots holding anomaly tiles that touch each other.
    ///
    /// Informational only; placement does not try to avoid these beyond the
    /// hub rule.
    pub fn adjacent_anomalies(&self) -> Vec<(usize, usize)> {
        let anomalous: Vec<usize> = self
            .tiles()
            .filter(|(_, t)| t.has_anomaly())
            .map(|(slot, _)| slot)
            .collect();

        let mut pairs = Vec::new();
        for (i, &a) in anomalous.iter().enumerate() {
            for &b in &anomalous[i + 1..] {
                if is_adjacent(a, b) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}

impl Slice {
    /// Assigns the slice's tiles to slots.
    ///
    /// Blue tiles are placed first, then red ones, each taking the next slot
    /// from a shuffled list of ring slots. The hub is spliced into that list
    /// when the first blue tile is placed: at the front when the slice holds
    /// more than one anomaly tile, so a blue tile takes the hub, otherwise at
    /// a random position.
    pub fn place_tiles(self, rng: &mut impl Rng) -> Result<PlacedSlice, GenerateError> {
        let Slice {
            mut tiles,
            resources,
            influence,
            technology,
            wormholes,
            absolute_value,
        } = self;
        let slice_tiles = tiles.len();

        tiles.shuffle(rng);
        let mut free: Vec<usize> = RING_SLOTS.to_vec();
        free.shuffle(rng);

        let multiple_anomalies = tiles.iter().filter(|t| t.has_anomaly()).count() > 1;
        let (blue, red): (Vec<Tile>, Vec<Tile>) =
            tiles.into_iter().partition(|t| t.color() == Color::Blue);

        let mut positions: [Option<Tile>; SLOT_COUNT] = Default::default();

        for (i, tile) in blue.into_iter().enumerate() {
            if i == 0 {
                let at = if multiple_anomalies {
                    0
                } else {
                    rng.gen_range(0..free.len())
                };
                free.insert(at, HUB_SLOT);
            }
            let slot = next_slot(&mut free, slice_tiles)?;
            positions[slot] = Some(tile);
        }

        for tile in red {
            let slot = next_slot(&mut free, slice_tiles)?;
            positions[slot] = Some(tile);
        }

        Ok(PlacedSlice {
            positions,
            resources,
            influence,
            technology,
            wormholes,
            absolute_value,
        })
    }
}

fn next_slot(free: &mut Vec<usize>, slice_tiles: usize) -> Result<usize, GenerateError> {
    if free.is_empty() {
        return Err(GenerateError::PlacementExhausted { slice_tiles });
    }
    Ok(free.remove(0))
}
