use crate::geometry::Edge;
use thiserror::Error;

/// Malformed problem input. Fatal to the requested operation: no partial result is returned.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("the vertex set is empty")]
    EmptyVertexSet,
    #[error("{role} vertex index {index} is out of range for {len} vertices")]
    VertexOutOfRange {
        role: &'static str,
        index: usize,
        len: usize,
    },
    /// A zero-length obstacle edge sits on an endpoint of a candidate path, so the
    /// line-of-sight test cannot classify the contact.
    #[error("obstacle edge {edge} collapses onto an endpoint of a candidate path")]
    DegenerateObstacleEdge { edge: Edge },
}

/// Errors raised while reading a map description. These never reach the search core.
#[derive(Debug, Error)]
pub enum ParseMapError {
    #[error("could not read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("map description has no start coordinate")]
    MissingStart,
    #[error("map description has no goal coordinate")]
    MissingGoal,
    #[error("invalid coordinate pair {text:?} on line {line}")]
    InvalidCoordinate { line: usize, text: String },
}
