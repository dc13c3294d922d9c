use serde::{Deserialize, Serialize};

use crate::models::City;

/// Straight-line distance between two cities in the plane.
#[inline(always)]
pub fn distance(from: &City, to: &City) -> f64 {
    let dx = from.x - to.x;
    let dy = from.y - to.y;
    (dx * dx + dy * dy).sqrt()
}

/// Edge cost model used when materializing a [`DistanceMatrix`](crate::DistanceMatrix).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Euclidean,
    /// Euclidean distance rounded to the nearest integer.
    Rounded,
}

impl Metric {
    #[inline(always)]
    pub fn cost(self, from: &City, to: &City) -> f64 {
        match self {
            Metric::Euclidean => distance(from, to),
            Metric::Rounded => distance(from, to).round(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Rounded => "rounded",
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" | "euc" => Ok(Metric::Euclidean),
            "rounded" | "round" => Ok(Metric::Rounded),
            other => Err(format!("unknown metric: {other}")),
        }
    }
}
