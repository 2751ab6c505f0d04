//! Drawing the tile pool and dealing the initial slices.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::{GenerateError, SUPPORTED_PLAYERS};
use crate::catalog::{Color, Tile};
use crate::slice::{Slice, BLUE_PER_SLICE, RED_PER_SLICE};

/// The tiles left for dealing after one blue tile has been set aside.
#[derive(Debug, Clone)]
pub struct DrawnPool {
    pub tiles: Vec<Tile>,
    pub excluded: Tile,
}

fn check_players(players: usize) -> Result<(), GenerateError> {
    if players != SUPPORTED_PLAYERS {
        return Err(GenerateError::UnsupportedConfiguration { players });
    }
    Ok(())
}

/// Sets aside one random blue tile from the catalog.
///
/// Tiles are picked uniformly at random; a red pick goes straight back into
/// the pool and the draw repeats until a blue tile comes up.
pub fn draw_pool(
    mut tiles: Vec<Tile>,
    players: usize,
    rng: &mut impl Rng,
) -> Result<DrawnPool, GenerateError> {
    check_players(players)?;
    if !tiles.iter().any(|t| t.color() == Color::Blue) {
        return Err(GenerateError::PoolExhausted {
            color: Color::Blue,
            needed: 1,
            available: 0,
        });
    }

    loop {
        let idx = rng.gen_range(0..tiles.len());
        if tiles[idx].color() == Color::Blue {
            let excluded = tiles.remove(idx);
            debug!(tile = excluded.id(), "excluded blue tile from the pool");
            return Ok(DrawnPool { tiles, excluded });
        }
    }
}

/// Deals `slices` slices of two red and three blue tiles each.
///
/// Red and blue tiles are shuffled separately and dealt in order. Tiles left
/// over once every slice is full are dropped.
pub fn build_slices(
    pool: Vec<Tile>,
    slices: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Slice>, GenerateError> {
    check_players(slices)?;

    let (mut red, mut blue): (Vec<Tile>, Vec<Tile>) =
        pool.into_iter().partition(|t| t.color() == Color::Red);
    ensure_count(Color::Red, slices * RED_PER_SLICE, red.len())?;
    ensure_count(Color::Blue, slices * BLUE_PER_SLICE, blue.len())?;

    red.shuffle(rng);
    blue.shuffle(rng);

    let mut red = red.into_iter();
    let mut blue = blue.into_iter();
    let mut out = Vec::with_capacity(slices);
    for _ in 0..slices {
        let mut tiles = Vec::with_capacity(RED_PER_SLICE + BLUE_PER_SLICE);
        tiles.extend(red.by_ref().take(RED_PER_SLICE));
        tiles.extend(blue.by_ref().take(BLUE_PER_SLICE));
        out.push(Slice::new(tiles));
    }

    Ok(out)
}

fn ensure_count(color: Color, needed: usize, available: usize) -> Result<(), GenerateError> {
    if available < needed {
        return Err(GenerateError::PoolExhausted {
            color,
            needed,
            available,
        });
    }
    Ok(())
}
