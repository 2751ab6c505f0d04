//! Planet records and the resource/influence dominance rule.
//!
//! A planet is spent either for resources or for influence in a given round,
//! so its raw values overstate what it contributes. The dominance rule keeps
//! only the stronger side when one value is at least double the other, and
//! splits both in half otherwise.

/// A planet after the dominance rule has been applied. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: String,
    pub resources: f64,
    pub influence: f64,
    /// Tech-skip tag, empty when the planet has none.
    pub technology: String,
    pub kind: String,
}

impl Planet {
    /// Builds a planet from raw catalog values, applying the dominance rule.
    pub fn new(
        name: impl Into<String>,
        resources: u32,
        influence: u32,
        technology: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        let (resources, influence) = effective_values(resources, influence);
        Planet {
            name: name.into(),
            resources,
            influence,
            technology: technology.into(),
            kind: kind.into(),
        }
    }
}

/// Returns the `(resources, influence)` a planet is expected to yield.
pub fn effective_values(resources: u32, influence: u32) -> (f64, f64) {
    let (r, i) = (resources as f64, influence as f64);
    if r >= 2.0 * i {
        (r, 0.0)
    } else if i >= 2.0 * r {
        (0.0, i)
    } else {
        (r / 2.0, i / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_heavy_planet_drops_influence() {
        let p = Planet::new("Abyz", 3, 0, "", "hazardous");
        assert_eq!(p.resources, 3.0);
        assert_eq!(p.influence, 0.0);

        let p = Planet::new("Lodor", 3, 1, "", "cultural");
        assert_eq!((p.resources, p.influence), (3.0, 0.0));
    }

    #[test]
    fn influence_heavy_planet_drops_resources() {
        let p = Planet::new("Meer", 0, 4, "R", "hazardous");
        assert_eq!((p.resources, p.influence), (0.0, 4.0));

        let p = Planet::new("Wellon", 1, 2, "Y", "industrial");
        assert_eq!((p.resources, p.influence), (0.0, 2.0));
        assert_eq!(p.technology, "Y");
    }

    #[test]
    fn balanced_planet_is_split_in_half() {
        let p = Planet::new("Lirta IV", 2, 3, "", "hazardous");
        assert_eq!((p.resources, p.influence), (1.0, 1.5));

        let p = Planet::new("Saudor", 2, 2, "", "industrial");
        assert_eq!((p.resources, p.influence), (1.0, 1.0));
    }

    #[test]
    fn empty_planet_keeps_zero_values() {
        // 0 >= 2 * 0 holds, so the resource branch wins.
        assert_eq!(effective_values(0, 0), (0.0, 0.0));
    }

    #[test]
    fn dominance_rule_holds_for_small_values() {
        for r in 0..8u32 {
            for i in 0..8u32 {
                let (er, ei) = effective_values(r, i);
                if r >= 2 * i {
                    assert_eq!((er, ei), (r as f64, 0.0), "r={} i={}", r, i);
                } else if i >= 2 * r {
                    assert_eq!((er, ei), (0.0, i as f64), "r={} i={}", r, i);
                } else {
                    assert_eq!((er, ei), (r as f64 / 2.0, i as f64 / 2.0), "r={} i={}", r, i);
                }
            }
        }
    }
}
