use crate::astar_search::SearchContext;
use crate::error::ConfigError;
use crate::geometry::{polygon_edges, Edge, Point};
use crate::solver::{astar::AstarSolver, GraphSolver, Solution};
use crate::visibility::{build_visibility_graph, VisibilityGraph};
use crate::{Cost, VertexId};
use core::fmt;
use log::info;

/// Checks that there is something to search and that both ends are part of the vertex set.
pub(crate) fn validate(
    start: VertexId,
    goal: VertexId,
    vertices: &[Point],
) -> Result<(), ConfigError> {
    if vertices.is_empty() {
        return Err(ConfigError::EmptyVertexSet);
    }
    for (role, index) in [("start", start), ("goal", goal)] {
        if index >= vertices.len() {
            return Err(ConfigError::VertexOutOfRange {
                role,
                index,
                len: vertices.len(),
            });
        }
    }
    Ok(())
}

/// [PathProblem] owns everything a search needs: the start and goal, every vertex of interest
/// (including start and goal) and the boundary edges of all obstacles. The visibility graph and
/// solutions are derived from it and never modify it.
#[derive(Clone, Debug)]
pub struct PathProblem {
    start: VertexId,
    goal: VertexId,
    vertices: Vec<Point>,
    edges: Vec<Edge>,
    /// Logs the visibility list of every vertex once the graph is built.
    pub debug_mode: bool,
}

impl PathProblem {
    /// Creates a problem from a start, a goal and obstacle polygons, each given as its corners in
    /// order. The vertex list is the start, then the corners in the given order, then the goal.
    pub fn new(start: Point, goal: Point, obstacles: &[Vec<Point>]) -> PathProblem {
        let mut vertices = Vec::with_capacity(obstacles.iter().map(Vec::len).sum::<usize>() + 2);
        let mut edges = Vec::new();
        vertices.push(start);
        for polygon in obstacles {
            vertices.extend_from_slice(polygon);
            edges.extend(polygon_edges(polygon));
        }
        vertices.push(goal);
        PathProblem {
            start: 0,
            goal: vertices.len() - 1,
            vertices,
            edges,
            debug_mode: false,
        }
    }

    /// Creates a problem from an explicit vertex set and obstacle edges.
    pub fn from_parts(
        start: VertexId,
        goal: VertexId,
        vertices: Vec<Point>,
        edges: Vec<Edge>,
    ) -> Result<PathProblem, ConfigError> {
        validate(start, goal, &vertices)?;
        Ok(PathProblem {
            start,
            goal,
            vertices,
            edges,
            debug_mode: false,
        })
    }

    pub fn start(&self) -> VertexId {
        self.start
    }
    pub fn goal(&self) -> VertexId {
        self.goal
    }
    pub fn start_point(&self) -> Point {
        self.vertices[self.start]
    }
    pub fn goal_point(&self) -> Point {
        self.vertices[self.goal]
    }
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    /// Boundary edges of all obstacles.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn visibility_graph(&self) -> Result<VisibilityGraph, ConfigError> {
        let graph = build_visibility_graph(&self.vertices, &self.edges)?;
        if self.debug_mode {
            graph.log_visibility_lists();
        }
        Ok(graph)
    }

    /// Computes the shortest path from start to goal with A*. `Ok(None)` means that the goal
    /// cannot be reached from the start.
    pub fn solve(&self) -> Result<Option<Solution>, ConfigError> {
        self.solve_with(&AstarSolver::new(), &mut SearchContext::new())
    }

    /// Computes a path with the given solver, using `context` as scratch space for the search.
    pub fn solve_with<S: GraphSolver>(
        &self,
        solver: &S,
        context: &mut SearchContext<VertexId, Cost>,
    ) -> Result<Option<Solution>, ConfigError> {
        let graph = self.visibility_graph()?;
        info!(
            "Searching path from {} to {}",
            self.start_point(),
            self.goal_point()
        );
        Ok(solver.get_path(&graph, context, self.start, self.goal))
    }
}

impl fmt::Display for PathProblem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Start: {}", self.start_point())?;
        writeln!(f, "Goal: {}", self.goal_point())?;
        writeln!(f, "Obstacle edges:")?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}
