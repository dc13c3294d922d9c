use std::collections::HashMap;

use crate::models::City;
use crate::utils::Metric;
use crate::{Error, Result};

/// Symmetric pairwise cost matrix, flattened row-major.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    n: usize,
}

impl DistanceMatrix {
    pub fn new(cities: &[City], metric: Metric) -> Self {
        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.cost(&cities[i], &cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, n }
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }
}

/// A validated problem: non-empty, distinct ids, finite coordinates.
/// City 0 is the fixed start and end of every tour.
#[derive(Clone, Debug)]
pub struct Instance {
    cities: Vec<City>,
    matrix: DistanceMatrix,
    index: HashMap<u32, usize>,
    metric: Metric,
}

impl Instance {
    pub fn new(cities: Vec<City>) -> Result<Self> {
        Self::with_metric(cities, Metric::Euclidean)
    }

    pub fn with_metric(cities: Vec<City>, metric: Metric) -> Result<Self> {
        if cities.is_empty() {
            return Err(Error::invalid_instance("city list is empty"));
        }

        let mut index = HashMap::with_capacity(cities.len());
        for (idx, city) in cities.iter().enumerate() {
            if !city.is_finite() {
                return Err(Error::invalid_instance(format!(
                    "city {} has non-finite coordinates ({}, {})",
                    city.id, city.x, city.y
                )));
            }
            if index.insert(city.id, idx).is_some() {
                return Err(Error::invalid_instance(format!(
                    "duplicate city id {}",
                    city.id
                )));
            }
        }

        let matrix = DistanceMatrix::new(&cities, metric);
        Ok(Self {
            cities,
            matrix,
            index,
            metric,
        })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always false for a constructed instance.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn city(&self, idx: usize) -> &City {
        &self.cities[idx]
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    #[inline(always)]
    pub fn dist(&self, from: usize, to: usize) -> f64 {
        self.matrix.get(from, to)
    }

    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Maps a sequence of city indices to their ids.
    pub fn ids(&self, indices: &[usize]) -> Vec<u32> {
        indices.iter().map(|&i| self.cities[i].id).collect()
    }

    /// Sums the edge costs along a sequence of city ids, in order.
    pub fn tour_length(&self, ids: &[u32]) -> Result<f64> {
        let indices = ids
            .iter()
            .map(|&id| {
                self.index_of(id)
                    .ok_or_else(|| Error::invalid_tour(format!("unknown city {id}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(indices.windows(2).map(|w| self.dist(w[0], w[1])).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(
            Instance::new(Vec::new()),
            Err(Error::InvalidInstance(_))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Instance::new(vec![City::new(1, 0.0, 0.0), City::new(1, 2.0, 2.0)]).unwrap_err();
        assert!(err.to_string().contains("duplicate city id 1"));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(Instance::new(vec![City::new(1, f64::NAN, 0.0)]).is_err());
        assert!(Instance::new(vec![
            City::new(1, 0.0, 0.0),
            City::new(2, 0.0, f64::INFINITY)
        ])
        .is_err());
    }

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let instance = Instance::new(vec![
            City::new(10, 0.0, 0.0),
            City::new(20, 3.0, 4.0),
            City::new(30, -1.0, 2.5),
        ])
        .unwrap();
        for i in 0..3 {
            assert_eq!(instance.dist(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(instance.dist(i, j), instance.dist(j, i));
            }
        }
        assert_eq!(instance.dist(0, 1), 5.0);
    }

    #[test]
    fn tour_length_follows_ids() {
        let instance =
            Instance::new(vec![City::new(7, 0.0, 0.0), City::new(9, 3.0, 4.0)]).unwrap();
        assert_eq!(instance.tour_length(&[7, 9, 7]).unwrap(), 10.0);
        assert_eq!(instance.ids(&[1, 0]), vec![9, 7]);
        assert!(instance.tour_length(&[7, 8]).is_err());
    }

    #[test]
    fn rounded_metric_feeds_matrix() {
        let instance = Instance::with_metric(
            vec![City::new(1, 0.0, 0.0), City::new(2, 1.0, 1.0)],
            Metric::Rounded,
        )
        .unwrap();
        assert_eq!(instance.dist(0, 1), 1.0);
        assert_eq!(instance.metric(), Metric::Rounded);
    }
}
