use visibility_pathfinding::{
    find_shortest_path,
    geometry::{polygon_edges, Edge, Point},
    map::load_map,
    ConfigError, PathProblem,
};

fn square() -> Vec<Point> {
    vec![
        Point::new(4.0, -1.0),
        Point::new(6.0, -1.0),
        Point::new(6.0, 1.0),
        Point::new(4.0, 1.0),
    ]
}

/// A square between start and goal forces a detour along one of its sides.
#[test]
fn detour_around_square() {
    let problem = PathProblem::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &[square()]);
    let solution = problem.solve().unwrap().unwrap();
    let bottom = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, -1.0),
        Point::new(6.0, -1.0),
        Point::new(10.0, 0.0),
    ];
    let top = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 1.0),
        Point::new(6.0, 1.0),
        Point::new(10.0, 0.0),
    ];
    assert!(solution.points == bottom || solution.points == top);
    assert!((solution.cost - (2.0 * 17f64.sqrt() + 2.0)).abs() < 1e-9);
}

/// The search must be reproducible for identical input.
#[test]
fn tie_break_is_deterministic() {
    let problem = PathProblem::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &[square()]);
    let first = problem.solve().unwrap().unwrap();
    for _ in 0..10 {
        assert_eq!(problem.solve().unwrap().unwrap().vertices, first.vertices);
    }
}

#[test]
fn direct_path_when_unobstructed() {
    let problem = PathProblem::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0), &[square()]);
    let solution = problem.solve().unwrap().unwrap();
    assert_eq!(solution.vertices, vec![problem.start(), problem.goal()]);
    assert_eq!(solution.cost, 10.0);
}

/// Only the waypoint above the wall connects start and goal.
#[test]
fn single_available_path() {
    let vertices = [
        Point::new(0.0, 0.0),
        Point::new(5.0, 7.0),
        Point::new(10.0, 0.0),
    ];
    let wall = polygon_edges(&[Point::new(5.0, -5.0), Point::new(5.0, 5.0)]);
    let solution = find_shortest_path(0, 2, &vertices, &wall).unwrap().unwrap();
    assert_eq!(solution.vertices, vec![0, 1, 2]);
    let expected = vertices[0].distance(&vertices[1]) + vertices[1].distance(&vertices[2]);
    assert!((solution.cost - expected).abs() < 1e-9);
}

/// The corners of the enclosing square are vertices too, but none of them leads inside.
#[test]
fn enclosed_goal_has_no_path() {
    let problem = PathProblem::new(Point::new(0.0, 0.0), Point::new(5.0, 0.0), &[square()]);
    let graph = problem.visibility_graph().unwrap();
    assert!(graph.visible_from(problem.goal()).is_empty());
    assert!(problem.solve().unwrap().is_none());

    let problem = PathProblem::new(Point::new(5.0, 0.0), Point::new(10.0, 0.0), &[square()]);
    assert!(problem.solve().unwrap().is_none());
}

/// Two long walls offset from each other: the shortest route hops from a corner of the first
/// straight to a corner of the second.
#[test]
fn hops_between_offset_walls() {
    let walls = [
        vec![
            Point::new(4.0, -100.0),
            Point::new(5.0, -100.0),
            Point::new(5.0, 1.0),
            Point::new(4.0, 1.0),
        ],
        vec![
            Point::new(15.0, -1.0),
            Point::new(16.0, -1.0),
            Point::new(16.0, 100.0),
            Point::new(15.0, 100.0),
        ],
    ];
    let problem = PathProblem::new(Point::new(0.0, 0.0), Point::new(20.0, 0.0), &walls);
    let solution = problem.solve().unwrap().unwrap();
    let expected_points = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 1.0),
        Point::new(5.0, 1.0),
        Point::new(15.0, -1.0),
        Point::new(16.0, -1.0),
        Point::new(20.0, 0.0),
    ];
    assert_eq!(solution.points, expected_points);
    let expected = 2.0 * 17f64.sqrt() + 2.0 + 104f64.sqrt();
    assert!((solution.cost - expected).abs() < 1e-9);
    assert!(solution.cost < 21.0);
}

#[test]
fn configuration_errors_are_reported_before_search() {
    assert_eq!(
        find_shortest_path(0, 0, &[], &[]),
        Err(ConfigError::EmptyVertexSet)
    );
    assert!(matches!(
        find_shortest_path(3, 0, &[Point::new(0.0, 0.0)], &[]),
        Err(ConfigError::VertexOutOfRange { role: "start", .. })
    ));
    let goal = Point::new(2.0, 2.0);
    let dot = Edge::new(goal, goal);
    assert!(matches!(
        find_shortest_path(0, 1, &[Point::new(0.0, 0.0), goal], &[dot]),
        Err(ConfigError::DegenerateObstacleEdge { .. })
    ));
}

#[test]
fn loads_and_solves_map_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/maps/two_squares.map");
    let problem = load_map(path).unwrap();
    assert_eq!(problem.edges().len(), 8);
    let solution = problem.solve().unwrap().unwrap();
    assert_eq!(solution.points.first(), Some(&problem.start_point()));
    assert_eq!(solution.points.last(), Some(&problem.goal_point()));
    assert!(solution.cost >= problem.start_point().distance(&problem.goal_point()));
}
