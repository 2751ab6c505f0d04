//! Balance checking and corrective tile swaps between slices.

use tracing::warn;

use super::GenerateError;
use crate::catalog::Color;
use crate::slice::Slice;

/// The best slice may be worth less than this multiple of the worst one.
pub const MAX_SPREAD: f64 = 1.5;
/// Resources or influence at this multiple of the other marks a skewed slice.
pub const SKEW_FACTOR: f64 = 2.0;

/// Which corrective moves a rebalancing pass performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassMoves {
    /// Best and worst slices traded blue tiles.
    pub equalized: bool,
    /// The most influence-heavy and most resource-heavy slices traded tiles.
    pub deskewed: bool,
}

/// Whether every slice is within the value spread and none is skewed.
pub fn is_balanced(slices: &[Slice]) -> bool {
    if slices.is_empty() {
        return true;
    }

    let (min, max) = value_range(slices);
    if max >= MAX_SPREAD * min {
        return false;
    }

    !slices.iter().any(Slice::is_skewed)
}

fn value_range(slices: &[Slice]) -> (f64, f64) {
    slices.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
        (lo.min(s.absolute_value()), hi.max(s.absolute_value()))
    })
}

/// Runs one rebalancing pass over the slices.
///
/// First, when the best slice is worth at least [`MAX_SPREAD`] times the
/// worst, the best slice's top blue tile is traded for the worst slice's
/// lowest tile of the same color. Then, when the most influence-heavy or the
/// most resource-heavy slice is skewed, each gives up its top tile on its
/// dominant side to the other.
///
/// The slices are left sorted by resource ratio.
pub fn rebalance_pass(slices: &mut [Slice]) -> Result<PassMoves, GenerateError> {
    let mut moves = PassMoves::default();
    if slices.len() < 2 {
        return Ok(moves);
    }
    let last = slices.len() - 1;

    slices.sort_by(|a, b| a.cmp_value(b));
    if slices[last].absolute_value() >= MAX_SPREAD * slices[0].absolute_value() {
        warn!(
            best = slices[last].absolute_value(),
            worst = slices[0].absolute_value(),
            "rebalancing between best and worst slice"
        );
        swap_best_and_worst(slices, last)?;
        moves.equalized = true;
    }

    slices.sort_by(|a, b| a.resource_ratio().total_cmp(&b.resource_ratio()));
    let influence_heavy = &slices[0];
    let resource_heavy = &slices[last];
    if influence_heavy.influence() >= SKEW_FACTOR * influence_heavy.resources()
        || resource_heavy.resources() >= SKEW_FACTOR * resource_heavy.influence()
    {
        warn!(
            influence_heavy = influence_heavy.resource_ratio(),
            resource_heavy = resource_heavy.resource_ratio(),
            "rebalancing res/inf skew"
        );
        moves.deskewed = swap_excessive(slices, last);
    }

    Ok(moves)
}

/// Trades the best slice's top blue tile for the worst slice's lowest tile
/// of that color. Both slices are left intact when either tile is missing.
fn swap_best_and_worst(slices: &mut [Slice], best: usize) -> Result<(), GenerateError> {
    let best_tile = slices[best]
        .remove_best_tile(Color::Blue)
        .ok_or(GenerateError::MissingTile { color: Color::Blue })?;
    let color = best_tile.color();

    let worst_tile = match slices[0].remove_worst_tile(color) {
        Some(tile) => tile,
        None => {
            slices[best].add(best_tile);
            return Err(GenerateError::MissingTile { color });
        }
    };

    slices[best].add(worst_tile);
    slices[0].add(best_tile);
    Ok(())
}

/// Trades the excessive tiles of the first and last slice. Returns whether a
/// trade happened.
fn swap_excessive(slices: &mut [Slice], last: usize) -> bool {
    let Some(influence_tile) = slices[0].remove_excessive_tile() else {
        return false;
    };
    let Some(resource_tile) = slices[last].remove_excessive_tile() else {
        slices[0].add(influence_tile);
        return false;
    };

    slices[last].add(influence_tile);
    slices[0].add(resource_tile);
    true
}
