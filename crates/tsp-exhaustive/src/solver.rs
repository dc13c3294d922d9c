use tsp_core::{Error, Instance, Result, Solution, VisitedSet};

/// Depth-first search over every visiting order.
///
/// All search state lives on the solver, so separate solvers never share
/// anything and calling [`solve`](Self::solve) again starts from scratch.
pub struct ExhaustiveSolver<'a> {
    instance: &'a Instance,
    visited: VisitedSet,
    path: Vec<usize>,

    // Best tour found so far
    best_cost: f64,
    best_path: Vec<usize>,

    tours_evaluated: u64,
}

impl<'a> ExhaustiveSolver<'a> {
    /// Fails with `CapacityExceeded` when the instance has more cities than a
    /// [`VisitedSet`] can track.
    pub fn new(instance: &'a Instance) -> Result<Self> {
        let n = instance.len();
        if n > VisitedSet::CAPACITY {
            return Err(Error::capacity_exceeded(n, VisitedSet::CAPACITY));
        }
        Ok(Self {
            instance,
            visited: VisitedSet::EMPTY,
            path: Vec::with_capacity(n),
            best_cost: f64::INFINITY,
            best_path: Vec::with_capacity(n),
            tours_evaluated: 0,
        })
    }

    pub fn solve(&mut self) -> Solution {
        let n = self.instance.len();
        self.visited = VisitedSet::EMPTY;
        self.path.clear();
        self.path.push(0);
        self.best_cost = f64::INFINITY;
        self.best_path.clear();
        self.tours_evaluated = 0;

        log::debug!("exhaustive: searching {n} cities");
        self.search(0, 0.0, 1);

        let mut order = self.best_path.clone();
        order.push(0);
        log::debug!(
            "exhaustive: best cost {} after {} tours",
            self.best_cost,
            self.tours_evaluated
        );

        Solution::new(self.best_cost, self.instance.ids(&order))
    }

    /// Complete tours evaluated by the last call to [`solve`](Self::solve).
    pub fn tours_evaluated(&self) -> u64 {
        self.tours_evaluated
    }

    fn search(&mut self, current: usize, dist: f64, visited_count: usize) {
        let n = self.instance.len();

        // Base case: every city is on the path, close the tour
        if visited_count == n {
            let total = dist + self.instance.dist(current, 0);
            self.tours_evaluated += 1;
            // Strict comparison keeps the first tour found on ties
            if total < self.best_cost {
                log::trace!("exhaustive: improved {} -> {total}", self.best_cost);
                self.best_cost = total;
                self.best_path.clone_from(&self.path);
            }
            return;
        }

        self.visited.insert(current);
        for next in self.visited.missing(n) {
            self.path.push(next);
            self.search(
                next,
                dist + self.instance.dist(current, next),
                visited_count + 1,
            );
            self.path.pop();
        }
        self.visited.remove(current);
    }
}
