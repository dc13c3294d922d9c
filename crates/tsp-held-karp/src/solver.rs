use tsp_core::{Instance, Result, Solution, VisitedSet};

use crate::context::MemoTable;

/// Top-down Held-Karp over `(current city, visited set)` states.
///
/// `cost(c, S)` is the cheapest way to finish the tour from city `c` having
/// visited `S` (which always holds city 0 and `c`). The optimum is
/// `cost(0, {0})`; the tour is then recovered by walking the filled table.
pub struct HeldKarpSolver<'a> {
    instance: &'a Instance,
    memo: MemoTable,
}

impl<'a> HeldKarpSolver<'a> {
    /// Largest instance solved. The table holds `n * 2^n` cells, about
    /// 6.4 GB at this size.
    pub const MAX_CITIES: usize = 24;

    /// Fails with `CapacityExceeded` before allocating the table when the
    /// instance is too large.
    pub fn new(instance: &'a Instance) -> Result<Self> {
        let n = instance.len();
        let memo = MemoTable::new(n, Self::MAX_CITIES)?;
        Ok(Self { instance, memo })
    }

    pub fn solve(&mut self) -> Solution {
        self.memo.clear();
        log::debug!(
            "held-karp: {} cities, {} table cells",
            self.instance.len(),
            self.memo.capacity()
        );

        let start = VisitedSet::with_start();
        let cost = self.cost(0, start, 1);
        log::trace!(
            "held-karp: table {}/{} cells filled",
            self.memo.filled(),
            self.memo.capacity()
        );
        let order = self.reconstruct();

        log::debug!(
            "held-karp: optimum {cost} from {} computed states",
            self.memo.filled()
        );
        Solution::new(cost, self.instance.ids(&order))
    }

    /// States filled by the last call to [`solve`](Self::solve).
    pub fn states_computed(&self) -> usize {
        self.memo.filled()
    }

    fn cost(&mut self, city: usize, visited: VisitedSet, depth: usize) -> f64 {
        debug_assert_eq!(visited.len(), depth);
        debug_assert!(visited.contains(0) && visited.contains(city));

        // Back to the start
        if visited.is_full(self.instance.len()) {
            return self.instance.dist(city, 0);
        }

        if let Some(cached) = self.memo.get(city, visited) {
            return cached;
        }

        let mut best = f64::INFINITY;
        for next in visited.missing(self.instance.len()) {
            let candidate =
                self.instance.dist(city, next) + self.cost(next, visited.with(next), depth + 1);
            if candidate < best {
                best = candidate;
            }
        }

        self.memo.insert(city, visited, best);
        best
    }

    /// Greedy walk from `(0, {0})`, taking at each step the city whose edge
    /// plus completion cost is smallest. Every state reached here was
    /// already filled by `cost`, so the lookups hit the table.
    fn reconstruct(&mut self) -> Vec<usize> {
        let n = self.instance.len();
        let mut order = Vec::with_capacity(n + 1);
        order.push(0);

        let mut current = 0;
        let mut visited = VisitedSet::with_start();
        while !visited.is_full(n) {
            let mut best: Option<(usize, f64)> = None;
            for next in visited.missing(n) {
                let candidate = self.instance.dist(current, next)
                    + self.cost(next, visited.with(next), visited.len() + 1);
                if best.is_none_or(|(_, cost)| candidate < cost) {
                    best = Some((next, candidate));
                }
            }

            let Some((next, _)) = best else {
                break;
            };
            order.push(next);
            visited.insert(next);
            current = next;
        }

        order.push(0);
        order
    }
}
