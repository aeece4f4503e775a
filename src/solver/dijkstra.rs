use crate::geometry::Point;
use crate::solver::GraphSolver;

/// Uninformed search, which expands nodes purely by their cost from the start.
#[derive(Clone, Debug)]
pub struct DijkstraSolver;

impl GraphSolver for DijkstraSolver {
    fn heuristic(&self, _: &Point, _: &Point) -> f64 {
        0.0
    }
}
