//! Catalog loading from JSON data files.
//!
//! Tiles reference planets by name; the planet table is loaded first and each
//! tile's planet list is resolved against it before the tile is scored.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::planet::Planet;
use super::tile::{Color, Tile};

/// Errors that can occur while loading a tile catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tile {tile} references unknown planet '{planet}'")]
    UnknownPlanet { tile: u32, planet: String },

    #[error("duplicate tile id {0}")]
    DuplicateTile(u32),
}

/// A planet row as it appears in `planets.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    pub resources: u32,
    pub influence: u32,
    #[serde(default)]
    pub technology: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A tile row as it appears in `tiles.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct TileRecord {
    pub id: u32,
    pub color: Color,
    #[serde(default)]
    pub planets: Vec<String>,
    #[serde(default)]
    pub anomalies: Option<Vec<String>>,
}

/// The full set of tiles available for slicing.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub tiles: Vec<Tile>,
}

impl Catalog {
    /// Parses a catalog from the JSON contents of the tile and planet files.
    pub fn from_json_strs(tiles_json: &str, planets_json: &str) -> Result<Catalog, CatalogError> {
        let tiles: Vec<TileRecord> = serde_json::from_str(tiles_json)?;
        let planets: Vec<PlanetRecord> = serde_json::from_str(planets_json)?;
        Catalog::from_records(tiles, planets)
    }

    /// Resolves planet names and scores every tile.
    pub fn from_records(
        tiles: Vec<TileRecord>,
        planets: Vec<PlanetRecord>,
    ) -> Result<Catalog, CatalogError> {
        let planets: HashMap<String, PlanetRecord> =
            planets.into_iter().map(|p| (p.name.clone(), p)).collect();

        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(tiles.len());
        for record in tiles {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateTile(record.id));
            }
            let resolved = record
                .planets
                .iter()
                .map(|name| {
                    planets
                        .get(name)
                        .map(|p| {
                            Planet::new(
                                p.name.clone(),
                                p.resources,
                                p.influence,
                                p.technology.clone().unwrap_or_default(),
                                p.kind.clone(),
                            )
                        })
                        .ok_or_else(|| CatalogError::UnknownPlanet {
                            tile: record.id,
                            planet: name.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            out.push(Tile::new(
                record.id,
                record.color,
                resolved,
                record.anomalies.unwrap_or_default(),
            ));
        }

        Ok(Catalog { tiles: out })
    }

    /// Number of tiles of the given color.
    pub fn count(&self, color: Color) -> usize {
        self.tiles.iter().filter(|t| t.color() == color).count()
    }
}

/// Loads a catalog from a tile file and a planet file on disk.
pub fn load_catalog(tiles_path: &Path, planets_path: &Path) -> Result<Catalog, CatalogError> {
    let tiles = read(tiles_path)?;
    let planets = read(planets_path)?;
    Catalog::from_json_strs(&tiles, &planets)
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
