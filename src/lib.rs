//! # visibility_pathfinding
//!
//! Shortest paths on a plane with closed polygonal obstacles. The corners of the obstacles,
//! together with the start and goal, are connected into a
//! [visibility graph](https://en.wikipedia.org/wiki/Visibility_graph) whenever the straight
//! segment between them stays clear of every obstacle. The graph is then searched with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) using the straight-line distance to
//! the goal as heuristic, which never overestimates and therefore yields an optimal route.
//!
//! ```
//! use visibility_pathfinding::{geometry::Point, PathProblem};
//!
//! let square = vec![
//!     Point::new(4.0, -1.0),
//!     Point::new(6.0, -1.0),
//!     Point::new(6.0, 1.0),
//!     Point::new(4.0, 1.0),
//! ];
//! let problem = PathProblem::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &[square]);
//! let solution = problem.solve().unwrap().unwrap();
//! assert_eq!(solution.len(), 4);
//! ```
pub mod astar_search;
pub mod error;
pub mod geometry;
pub mod map;
pub mod problem;
pub mod solver;
pub mod visibility;

use ordered_float::OrderedFloat;

pub use error::{ConfigError, ParseMapError};
pub use problem::PathProblem;
pub use solver::Solution;
pub use visibility::{build_visibility_graph, VisibilityGraph};

use crate::astar_search::SearchContext;
use crate::geometry::{Edge, Point};
use crate::solver::{astar::AstarSolver, GraphSolver};

/// Index of a vertex in the vertex list of a problem. Coincident points with different indices
/// are different vertices.
pub type VertexId = usize;

/// Totally ordered path cost used inside the search.
pub type Cost = OrderedFloat<f64>;

/// Inline capacity of successor buffers, enough for the visibility lists of typical hand-made maps.
pub const N_SMALLVEC_SIZE: usize = 16;

/// Finds the shortest route from `vertices[start]` to `vertices[goal]` among the obstacles
/// bounded by `edges`. Returns `Ok(None)` if the goal cannot be reached.
pub fn find_shortest_path(
    start: VertexId,
    goal: VertexId,
    vertices: &[Point],
    edges: &[Edge],
) -> Result<Option<Solution>, ConfigError> {
    problem::validate(start, goal, vertices)?;
    let graph = build_visibility_graph(vertices, edges)?;
    Ok(AstarSolver::new().get_path(&graph, &mut SearchContext::new(), start, goal))
}
