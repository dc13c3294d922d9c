use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{Error, Instance, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Optimal tour returned by a solver.
///
/// `tour` holds city ids, starts and ends at the first city's id and visits
/// every other city exactly once in between.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub cost: f64,
    pub tour: Vec<u32>,
}

impl Solution {
    /// Relative tolerance used when comparing a reported cost against the
    /// summed edges of its tour.
    pub const COST_TOLERANCE: f64 = 1e-9;

    pub fn new(cost: f64, tour: Vec<u32>) -> Self {
        Self { cost, tour }
    }

    pub fn path_string(&self) -> String {
        self.tour
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("->")
    }

    pub fn cost_matches(&self, other: f64) -> bool {
        costs_agree(self.cost, other)
    }

    /// Checks that the tour is a closed walk over every city of `instance`
    /// starting at its first city and that `cost` equals the tour length.
    pub fn verify(&self, instance: &Instance) -> Result<()> {
        let n = instance.len();
        if self.tour.len() != n + 1 {
            return Err(Error::invalid_tour(format!(
                "expected {} stops, got {}",
                n + 1,
                self.tour.len()
            )));
        }

        let start = instance.city(0).id;
        if self.tour[0] != start || self.tour[n] != start {
            return Err(Error::invalid_tour(format!(
                "tour must start and end at city {start}"
            )));
        }

        let mut seen = HashSet::with_capacity(n);
        for &id in &self.tour[..n] {
            if instance.index_of(id).is_none() {
                return Err(Error::invalid_tour(format!("unknown city {id}")));
            }
            if !seen.insert(id) {
                return Err(Error::invalid_tour(format!("city {id} visited twice")));
            }
        }

        let length = instance.tour_length(&self.tour)?;
        if !self.cost_matches(length) {
            return Err(Error::invalid_tour(format!(
                "reported cost {} differs from tour length {length}",
                self.cost
            )));
        }
        Ok(())
    }
}

pub(crate) fn costs_agree(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= Solution::COST_TOLERANCE * scale
}
