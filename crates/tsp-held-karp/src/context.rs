use tsp_core::{Error, Result, VisitedSet};

/// Optimal completion cost per `(city, visited)` state.
///
/// Cells are `None` until computed, so a legitimate zero cost is never
/// mistaken for a missing entry.
pub struct MemoTable {
    cells: Vec<Option<f64>>,
    n: usize,
    filled: usize,
}

impl MemoTable {
    /// Allocates `n * 2^n` cells, or fails if that size is not representable
    /// or the allocator cannot provide it.
    pub fn new(n: usize, max_cities: usize) -> Result<Self> {
        if n > max_cities {
            return Err(Error::capacity_exceeded(n, max_cities));
        }
        let size = u32::try_from(n)
            .ok()
            .and_then(|bits| 1usize.checked_shl(bits))
            .and_then(|subsets| subsets.checked_mul(n))
            .ok_or_else(|| Error::capacity_exceeded(n, max_cities))?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| Error::capacity_exceeded(n, max_cities))?;
        cells.resize(size, None);

        Ok(Self {
            cells,
            n,
            filled: 0,
        })
    }

    #[inline(always)]
    fn index(&self, city: usize, visited: VisitedSet) -> usize {
        visited.bits() as usize * self.n + city
    }

    #[inline(always)]
    pub fn get(&self, city: usize, visited: VisitedSet) -> Option<f64> {
        self.cells[self.index(city, visited)]
    }

    /// Records the cost of a state. Each state is written once.
    pub fn insert(&mut self, city: usize, visited: VisitedSet, cost: f64) {
        let idx = self.index(city, visited);
        debug_assert!(
            self.cells[idx].is_none(),
            "state ({city}, {visited}) computed twice"
        );
        self.cells[idx] = Some(cost);
        self.filled += 1;
    }

    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.filled = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_cost_is_distinct_from_missing() {
        let mut memo = MemoTable::new(3, 31).unwrap();
        let state = VisitedSet::from_bits(0b011);
        assert_eq!(memo.get(1, state), None);
        memo.insert(1, state, 0.0);
        assert_eq!(memo.get(1, state), Some(0.0));
        assert_eq!(memo.get(2, state), None);
        assert_eq!(memo.filled(), 1);
    }

    #[test]
    fn sized_for_every_state() {
        let memo = MemoTable::new(4, 31).unwrap();
        assert_eq!(memo.capacity(), 4 * 16);
    }

    #[test]
    fn rejects_more_cities_than_limit() {
        assert!(matches!(
            MemoTable::new(12, 10),
            Err(Error::CapacityExceeded {
                cities: 12,
                capacity: 10
            })
        ));
    }

    #[test]
    fn unallocatable_table_is_an_error() {
        // 45 * 2^45 cells is far beyond any address space
        assert!(matches!(
            MemoTable::new(45, 63),
            Err(Error::CapacityExceeded {
                cities: 45,
                capacity: 63
            })
        ));
    }

    #[test]
    fn clear_forgets_states() {
        let mut memo = MemoTable::new(2, 31).unwrap();
        memo.insert(0, VisitedSet::with_start(), 1.0);
        memo.clear();
        assert_eq!(memo.get(0, VisitedSet::with_start()), None);
        assert_eq!(memo.filled(), 0);
    }

    #[test]
    #[should_panic(expected = "computed twice")]
    #[cfg(debug_assertions)]
    fn double_write_is_caught() {
        let mut memo = MemoTable::new(2, 31).unwrap();
        memo.insert(0, VisitedSet::with_start(), 1.0);
        memo.insert(0, VisitedSet::with_start(), 1.0);
    }
}
