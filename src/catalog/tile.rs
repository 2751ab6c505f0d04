//! System tiles and their scoring.
//!
//! A tile's aggregates are computed once from its planets and anomalies when
//! it is built; nothing mutates a tile afterwards.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::planet::Planet;

/// Prefix identifying wormhole anomalies, e.g. `Wormhole A`.
const WORMHOLE_PREFIX: &str = "Wormhole";

/// Tile color class. Blue tiles carry planets, red tiles are mostly empty
/// space and anomalies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// Returns the lowercase name used in catalog files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A system tile with its derived value fields.
#[derive(Debug, Clone)]
pub struct Tile {
    id: u32,
    color: Color,
    planets: Vec<Planet>,
    anomalies: Vec<String>,
    resources: f64,
    influence: f64,
    technology: String,
    wormholes: String,
    absolute_value: f64,
}

impl Tile {
    /// Builds a tile and computes its aggregates.
    pub fn new(id: u32, color: Color, planets: Vec<Planet>, anomalies: Vec<String>) -> Self {
        let resources: f64 = planets.iter().map(|p| p.resources).sum();
        let influence: f64 = planets.iter().map(|p| p.influence).sum();
        let technology: String = planets.iter().map(|p| p.technology.as_str()).collect();
        let wormholes = wormhole_types(&anomalies);
        let absolute_value = absolute_value(resources, influence, &technology, &wormholes);

        Tile {
            id,
            color,
            planets,
            anomalies,
            resources,
            influence,
            technology,
            wormholes,
            absolute_value,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn anomalies(&self) -> &[String] {
        &self.anomalies
    }

    pub fn has_anomaly(&self) -> bool {
        !self.anomalies.is_empty()
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

    /// Orders tiles by absolute value only. Two tiles of equal value compare
    /// equal whatever their contents.
    pub fn cmp_value(&self, other: &Tile) -> Ordering {
        self.absolute_value.total_cmp(&other.absolute_value)
    }
}

/// Concatenates the trailing type character of every wormhole anomaly.
pub fn wormhole_types(anomalies: &[String]) -> String {
    anomalies
        .iter()
        .filter(|a| a.starts_with(WORMHOLE_PREFIX))
        .filter_map(|a| a.chars().last())
        .collect()
}

/// Scores a tile: resources plus influence, two points per tech skip, and a
/// point for wormholes as long as no wormhole type repeats.
pub fn absolute_value(resources: f64, influence: f64, technology: &str, wormholes: &str) -> f64 {
    let mut value = resources + influence + 2.0 * technology.chars().count() as f64;
    if !wormholes.is_empty() && !has_duplicate_char(wormholes) {
        value += 1.0;
    }
    value
}

fn has_duplicate_char(s: &str) -> bool {
    let mut seen = HashSet::new();
    s.chars().any(|c| !seen.insert(c))
}
