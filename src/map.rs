//! Loader for the plain-text map format.
//!
//! The first line holds the start as `x,y`, the second line the goal. Every following line is one
//! obstacle polygon, its corners separated by semicolons: `x,y;x,y;x,y`. Blank lines are skipped.
use crate::error::ParseMapError;
use crate::geometry::Point;
use crate::problem::PathProblem;
use log::info;
use std::fs;
use std::path::Path;
use std::str::FromStr;

fn parse_coordinate(line: usize, text: &str) -> Result<Point, ParseMapError> {
    let invalid = || ParseMapError::InvalidCoordinate {
        line,
        text: text.to_owned(),
    };
    let (x, y) = text.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<f64>().map_err(|_| invalid())?;
    let y = y.trim().parse::<f64>().map_err(|_| invalid())?;
    if x.is_finite() && y.is_finite() {
        Ok(Point::new(x, y))
    } else {
        Err(invalid())
    }
}

fn parse_polygon(line: usize, text: &str) -> Result<Vec<Point>, ParseMapError> {
    text.split(';')
        .map(str::trim)
        .filter(|corner| !corner.is_empty())
        .map(|corner| parse_coordinate(line, corner))
        .collect()
}

impl FromStr for PathProblem {
    type Err = ParseMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Line numbers are one-based for error messages
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(ix, line)| (ix + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());
        let start = match lines.next() {
            Some((line, text)) => parse_coordinate(line, text)?,
            None => return Err(ParseMapError::MissingStart),
        };
        let goal = match lines.next() {
            Some((line, text)) => parse_coordinate(line, text)?,
            None => return Err(ParseMapError::MissingGoal),
        };
        let obstacles = lines
            .map(|(line, text)| parse_polygon(line, text))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PathProblem::new(start, goal, &obstacles))
    }
}

/// Reads and parses a map file.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<PathProblem, ParseMapError> {
    let path = path.as_ref();
    let problem = fs::read_to_string(path)?.parse::<PathProblem>()?;
    info!(
        "Loaded map {} with {} vertices and {} obstacle edges",
        path.display(),
        problem.vertices().len(),
        problem.edges().len()
    );
    Ok(problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE_MAP: &str = "0,0\n10,0\n4,-1;6,-1;6,1;4,1\n";

    #[test]
    fn parses_square_map() {
        let problem: PathProblem = SQUARE_MAP.parse().unwrap();
        assert_eq!(problem.start_point(), Point::new(0.0, 0.0));
        assert_eq!(problem.goal_point(), Point::new(10.0, 0.0));
        assert_eq!(problem.vertices().len(), 6);
        assert_eq!(problem.vertices()[1], Point::new(4.0, -1.0));
        assert_eq!(problem.edges().len(), 4);
    }

    #[test]
    fn tolerates_whitespace_and_blank_lines() {
        let text = " 0 , 0 \n\n1.5,2\n 1,1 ; 2,1 ; 2,2 ;\n\n";
        let problem: PathProblem = text.parse().unwrap();
        assert_eq!(problem.goal_point(), Point::new(1.5, 2.0));
        assert_eq!(problem.vertices().len(), 5);
        assert_eq!(problem.edges().len(), 3);
    }

    #[test]
    fn map_without_obstacles() {
        let problem: PathProblem = "0,0\n3,4".parse().unwrap();
        assert_eq!(problem.vertices().len(), 2);
        assert!(problem.edges().is_empty());
        assert_eq!(problem.solve().unwrap().unwrap().cost, 5.0);
    }

    #[test]
    fn missing_lines_are_reported() {
        assert!(matches!(
            "".parse::<PathProblem>(),
            Err(ParseMapError::MissingStart)
        ));
        assert!(matches!(
            "1,1".parse::<PathProblem>(),
            Err(ParseMapError::MissingGoal)
        ));
    }

    #[test]
    fn invalid_coordinates_are_reported() {
        match "0,0\n1,1\n2,2;3;4,4".parse::<PathProblem>() {
            Err(ParseMapError::InvalidCoordinate { line, text }) => {
                assert_eq!(line, 3);
                assert_eq!(text, "3");
            }
            other => panic!("Unexpected result {:?}", other),
        }
        assert!("0,x\n1,1".parse::<PathProblem>().is_err());
        assert!("inf,0\n1,1".parse::<PathProblem>().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_map("does/not/exist.map"),
            Err(ParseMapError::Io(_))
        ));
    }
}
