use crate::geometry::{distance, Point};
use crate::solver::GraphSolver;

/// A* with the straight-line distance to the goal as heuristic. Scaling the heuristic by a
/// `heuristic_factor` above 1.0 gives Weighted A*, which expands fewer nodes but may return a
/// longer path.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
    pub expansion_limit: Option<usize>,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            expansion_limit: None,
        }
    }
    pub fn with_expansion_limit(limit: usize) -> AstarSolver {
        AstarSolver {
            expansion_limit: Some(limit),
            ..AstarSolver::new()
        }
    }
}

impl GraphSolver for AstarSolver {
    /// Just the distance times a heuristic factor.
    fn heuristic(&self, point: &Point, goal: &Point) -> f64 {
        distance(point, goal) * self.heuristic_factor
    }

    fn expansion_limit(&self) -> Option<usize> {
        self.expansion_limit
    }
}
