#![deny(clippy::all)]

use napi::{Error, Result};
use napi_derive::napi;

#[napi(object)]
#[derive(Clone, Debug)]
pub struct City {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

#[napi(object)]
#[derive(Clone, Debug, Default)]
pub struct TourSolution {
    pub cost: f64,
    pub tour: Vec<u32>,
}

impl From<tsp_core::Solution> for TourSolution {
    fn from(solution: tsp_core::Solution) -> Self {
        Self {
            cost: solution.cost,
            tour: solution.tour,
        }
    }
}

fn to_core(cities: &[City]) -> Vec<tsp_core::City> {
    cities
        .iter()
        .map(|c| tsp_core::City::new(c.id, c.x, c.y))
        .collect()
}

fn to_js_error(err: tsp_core::Error) -> Error {
    Error::from_reason(err.to_string())
}

#[napi]
pub fn solve_exhaustive(cities: Vec<City>) -> Result<TourSolution> {
    tsp_exhaustive::solve_exhaustive(&to_core(&cities))
        .map(TourSolution::from)
        .map_err(to_js_error)
}

#[napi]
pub fn solve_dynamic_programming(cities: Vec<City>) -> Result<TourSolution> {
    tsp_held_karp::solve_dynamic_programming(&to_core(&cities))
        .map(TourSolution::from)
        .map_err(to_js_error)
}
