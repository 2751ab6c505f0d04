//! Tile and planet catalog.
//!
//! Contains the planet and tile types together with the value model that
//! scores them, and the loader that builds them from JSON data files.

pub mod load;
pub mod planet;
pub mod tile;

pub use load::{load_catalog, Catalog, CatalogError, PlanetRecord, TileRecord};
pub use planet::{effective_values, Planet};
pub use tile::{absolute_value, wormhole_types, Color, Tile};
