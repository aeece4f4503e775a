use crate::astar_search::SearchContext;
use crate::geometry::{distance, Point};
use crate::visibility::VisibilityGraph;
use crate::{Cost, VertexId, N_SMALLVEC_SIZE};
use log::info;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

pub mod astar;
pub mod dijkstra;

/// A route through the visibility graph from start to goal.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Vertex ids from start to goal, both included.
    pub vertices: Vec<VertexId>,
    /// Locations of [vertices](Self::vertices), in the same order.
    pub points: Vec<Point>,
    /// Sum of the Euclidean lengths of the path segments.
    pub cost: f64,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

pub trait GraphSolver {
    /// Estimated remaining cost from `point` to `goal`.
    fn heuristic(&self, point: &Point, goal: &Point) -> f64;

    /// Maximum number of nodes a single search may expand before giving up.
    fn expansion_limit(&self) -> Option<usize> {
        None
    }

    /// Cost of moving in a straight line between two mutually visible points.
    fn cost(&self, p1: &Point, p2: &Point) -> f64 {
        distance(p1, p2)
    }

    /// The visible neighbours of `node` with their move cost, in ascending id order.
    fn successors(
        &self,
        graph: &VisibilityGraph,
        node: &VertexId,
    ) -> SmallVec<[(VertexId, Cost); N_SMALLVEC_SIZE]> {
        graph
            .visible_from(*node)
            .into_iter()
            .map(|(other, weight)| (other, OrderedFloat(weight)))
            .collect()
    }

    /// Total cost of following `path`, or [None] if it names a vertex the graph does not have.
    fn get_path_cost(&self, path: &[VertexId], graph: &VisibilityGraph) -> Option<f64> {
        let points = path
            .iter()
            .map(|&id| graph.point(id))
            .collect::<Option<Vec<Point>>>()?;
        Some(
            points
                .windows(2)
                .map(|pair| self.cost(&pair[0], &pair[1]))
                .sum(),
        )
    }

    /// Searches `graph` for the cheapest path from `start` to `goal` using `context` as scratch
    /// space. Returns [None] if no path exists, if either end is not a vertex of the graph or if
    /// the expansion limit is hit.
    fn get_path(
        &self,
        graph: &VisibilityGraph,
        context: &mut SearchContext<VertexId, Cost>,
        start: VertexId,
        goal: VertexId,
    ) -> Option<Solution> {
        graph.point(start)?;
        let goal_point = graph.point(goal)?;
        let result = context.astar(
            &start,
            |node| self.successors(graph, node),
            |node| {
                OrderedFloat(
                    graph
                        .point(*node)
                        .map_or(0.0, |p| self.heuristic(&p, &goal_point)),
                )
            },
            |node| *node == goal,
            self.expansion_limit(),
        );
        match result {
            Some((vertices, OrderedFloat(cost))) => {
                info!(
                    "Found path of {} vertices with cost {} after expanding {} nodes",
                    vertices.len(),
                    cost,
                    context.expanded()
                );
                let points = vertices.iter().filter_map(|&v| graph.point(v)).collect();
                Some(Solution {
                    vertices,
                    points,
                    cost,
                })
            }
            None => {
                info!(
                    "No path from {} to {} after expanding {} nodes",
                    start,
                    goal,
                    context.expanded()
                );
                None
            }
        }
    }
}
