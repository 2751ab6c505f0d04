//! Slice generation: drawing, dealing, balancing and placing.
//!
//! A run sets one blue tile aside, deals six slices from the rest, then
//! alternates balance checks with rebalancing passes. Rebalancing does not
//! converge for every deal, so each deal gets a bounded number of passes and
//! a fresh deal is drawn when they run out, up to a bounded number of
//! attempts. Once balanced, every slice's tiles are placed.

pub mod balance;
pub mod pool;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Color, Tile};
use crate::slice::{PlacedSlice, Slice};

pub use balance::{is_balanced, rebalance_pass, PassMoves, MAX_SPREAD, SKEW_FACTOR};
pub use pool::{build_slices, draw_pool, DrawnPool};

/// The only player count the slicing rules are defined for.
pub const SUPPORTED_PLAYERS: usize = 6;

/// Errors that can occur while generating slices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("unsupported player count {players}, only {} players are handled", SUPPORTED_PLAYERS)]
    UnsupportedConfiguration { players: usize },

    #[error("not enough {color} tiles: need {needed}, have {available}")]
    PoolExhausted {
        color: Color,
        needed: usize,
        available: usize,
    },

    #[error("slice has no {color} tile to trade")]
    MissingTile { color: Color },

    #[error("ran out of slots placing a slice of {slice_tiles} tiles")]
    PlacementExhausted { slice_tiles: usize },

    #[error("could not balance slices after {attempts} attempts of {passes} passes")]
    BalanceFailed { attempts: usize, passes: usize },
}

impl GenerateError {
    /// Whether the error comes from one particular deal, so that a fresh
    /// deal may succeed where this one failed.
    pub fn is_deal_specific(&self) -> bool {
        matches!(
            self,
            GenerateError::MissingTile { .. } | GenerateError::PlacementExhausted { .. }
        )
    }
}

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of players, and so of slices.
    pub players: usize,
    /// Rebalancing passes allowed per deal.
    pub max_passes: usize,
    /// Deals tried before giving up.
    pub max_attempts: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            players: SUPPORTED_PLAYERS,
            max_passes: 100,
            max_attempts: 64,
            seed: 0,
        }
    }
}

/// The outcome of a successful run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Placed slices, in the order the last rebalancing pass left them.
    pub slices: Vec<PlacedSlice>,
    /// The blue tile set aside before dealing, for the successful deal.
    pub excluded: Tile,
    /// Deals drawn, including the successful one.
    pub attempts: usize,
    /// Rebalancing passes run on the successful deal.
    pub passes: usize,
}

/// Generates balanced slices, seeding the RNG from the configuration.
pub fn generate(catalog: &Catalog, config: &GeneratorConfig) -> Result<GenerationReport, GenerateError> {
    let mut rng = if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed)
    } else {
        SmallRng::from_entropy()
    };
    generate_with_rng(catalog, config, &mut rng)
}

/// Generates balanced slices with a caller-supplied RNG.
pub fn generate_with_rng(
    catalog: &Catalog,
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Result<GenerationReport, GenerateError> {
    for attempt in 1..=config.max_attempts {
        let drawn = draw_pool(catalog.tiles.clone(), config.players, rng)?;
        let slices = build_slices(drawn.tiles, config.players, rng)?;

        match settle_deal(slices, config.max_passes, rng) {
            Ok(Some((slices, passes))) => {
                info!(attempt, passes, "slices balanced");
                return Ok(GenerationReport {
                    slices,
                    excluded: drawn.excluded,
                    attempts: attempt,
                    passes,
                });
            }
            Ok(None) => {
                warn!(
                    attempt,
                    passes = config.max_passes,
                    "slices still unbalanced, dealing again"
                );
            }
            Err(err) if err.is_deal_specific() => {
                warn!(attempt, error = %err, "deal failed, dealing again");
            }
            Err(err) => return Err(err),
        }
    }

    Err(GenerateError::BalanceFailed {
        attempts: config.max_attempts,
        passes: config.max_passes,
    })
}

/// Balances one deal and places its slices.
///
/// Returns the placed slices with the number of passes it took, or `None`
/// if the deal is still unbalanced after `max_passes` passes.
fn settle_deal(
    mut slices: Vec<Slice>,
    max_passes: usize,
    rng: &mut impl Rng,
) -> Result<Option<(Vec<PlacedSlice>, usize)>, GenerateError> {
    let Some(passes) = balance_slices(&mut slices, max_passes)? else {
        return Ok(None);
    };
    let placed = slices
        .into_iter()
        .map(|s| s.place_tiles(rng))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some((placed, passes)))
}

/// Rebalances until the slices pass the balance check.
///
/// Returns the number of passes it took, or `None` if the slices are still
/// unbalanced after `max_passes` passes.
pub fn balance_slices(slices: &mut [Slice], max_passes: usize) -> Result<Option<usize>, GenerateError> {
    for pass in 0..=max_passes {
        if is_balanced(slices) {
            return Ok(Some(pass));
        }
        if pass == max_passes {
            break;
        }
        let moves = rebalance_pass(slices)?;
        debug!(pass, ?moves, "rebalancing pass done");
    }
    Ok(None)
}
