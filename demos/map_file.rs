use std::env;
use visibility_pathfinding::map::load_map;

// Loads a map file (by default maps/square.map) and prints which vertices see each other as well
// as the shortest path from start to goal.
fn main() {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/maps/square.map").to_owned());
    let problem = match load_map(&path) {
        Ok(problem) => problem,
        Err(e) => {
            println!("Could not load {}: {}", path, e);
            return;
        }
    };
    let graph = match problem.visibility_graph() {
        Ok(graph) => graph,
        Err(e) => {
            println!("Invalid map {}: {}", path, e);
            return;
        }
    };
    for (id, point) in problem.vertices().iter().enumerate() {
        let visible = graph
            .visible_from(id)
            .iter()
            .map(|(other, _)| other.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} {} sees [{}]", id, point, visible);
    }
    match problem.solve() {
        Ok(Some(solution)) => println!("Path {:?} with length {}", solution.vertices, solution.cost),
        Ok(None) => println!("No path from start to goal"),
        Err(e) => println!("Invalid map {}: {}", path, e),
    }
}
