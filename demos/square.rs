use visibility_pathfinding::geometry::Point;
use visibility_pathfinding::PathProblem;

// In this example a path is found around a single square obstacle
//
//        +--+
//  S     |  |     G
//        +--+
//
// S marks the start
// G marks the goal
fn main() {
    let square = vec![
        Point::new(4.0, -1.0),
        Point::new(6.0, -1.0),
        Point::new(6.0, 1.0),
        Point::new(4.0, 1.0),
    ];
    let problem = PathProblem::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &[square]);
    println!("{}", problem);
    match problem.solve() {
        Ok(Some(solution)) => {
            println!("A path of length {} has been found:", solution.cost);
            for p in solution.points {
                println!("{}", p);
            }
        }
        Ok(None) => println!("The goal cannot be reached"),
        Err(e) => println!("Invalid problem: {}", e),
    }
}
