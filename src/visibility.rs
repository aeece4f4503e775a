//! Line-of-sight classification and construction of the visibility graph.
//!
//! Two vertices see each other when the straight segment between them does not pass through any
//! obstacle. Every obstacle edge the segment touches is classified as a benign contact (running
//! along the edge, or touching it at one of the segment's own endpoints) or as a crossing. A
//! segment whose only contacts are benign lies either entirely inside or entirely outside each
//! obstacle, which its midpoint decides.
use crate::error::ConfigError;
use crate::geometry::{distance, is_strictly_inside, Edge, Point};
use crate::{VertexId, N_SMALLVEC_SIZE};
use itertools::Itertools;
use log::{debug, info};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use smallvec::SmallVec;

/// More than this many obstacle edges meeting at one endpoint of a segment means the endpoint is
/// wedged between obstacles sharing a corner.
const MAX_TOUCHES_PER_ENDPOINT: usize = 2;

/// How a candidate path relates to an obstacle edge it intersects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// The path runs exactly along the edge.
    Skim,
    /// The path touches the edge at one of its own endpoints only: the source if `at_source`,
    /// the destination otherwise.
    PassBy { at_source: bool },
    /// The path passes through the edge.
    Crossing,
    /// Zero-length edge away from the path's endpoints, which never blocks.
    Ignored,
}

/// Classifies the contact between the path `source -> destination` and an obstacle edge that is
/// known to intersect it.
pub fn classify_contact(
    source: &Point,
    destination: &Point,
    edge: &Edge,
) -> Result<Contact, ConfigError> {
    let destination_is_p1 = *destination == edge.p1;
    let destination_is_p2 = *destination == edge.p2;
    let source_is_p1 = *source == edge.p1;
    let source_is_p2 = *source == edge.p2;

    if (destination_is_p1 && destination_is_p2) || (source_is_p1 && source_is_p2) {
        return Err(ConfigError::DegenerateObstacleEdge { edge: *edge });
    }
    if edge.is_degenerate() {
        return Ok(Contact::Ignored);
    }
    if (destination_is_p1 && source_is_p2) ^ (destination_is_p2 && source_is_p1) {
        return Ok(Contact::Skim);
    }
    // With the degenerate cases excluded, an odd number of coincidences means exactly one
    if (destination_is_p1 ^ source_is_p2) ^ (destination_is_p2 ^ source_is_p1) {
        return Ok(Contact::PassBy {
            at_source: source_is_p1 || source_is_p2,
        });
    }
    Ok(Contact::Crossing)
}

/// Checks whether `destination` can be seen from `source` given the boundary edges of all
/// obstacles. Every edge is scanned even after a crossing is found so that malformed edges are
/// always reported.
pub fn is_within_line_of_sight(
    source: &Point,
    destination: &Point,
    edges: &[Edge],
) -> Result<bool, ConfigError> {
    let path = Edge::new(*source, *destination);
    let mut within_line_of_sight = true;
    let mut source_touches = 0;
    let mut destination_touches = 0;
    for edge in edges.iter().filter(|edge| path.intersects(edge)) {
        match classify_contact(source, destination, edge)? {
            Contact::Skim | Contact::Ignored => {}
            Contact::PassBy { at_source: true } => source_touches += 1,
            Contact::PassBy { at_source: false } => destination_touches += 1,
            Contact::Crossing => within_line_of_sight = false,
        }
    }
    Ok(within_line_of_sight
        && source_touches <= MAX_TOUCHES_PER_ENDPOINT
        && destination_touches <= MAX_TOUCHES_PER_ENDPOINT
        && !is_strictly_inside(&path.midpoint(), edges))
}

/// Undirected graph connecting mutually visible vertices, weighted by their distance. Node
/// indices coincide with the [VertexId]s of the vertex slice it was built from.
#[derive(Clone, Debug, Default)]
pub struct VisibilityGraph {
    graph: UnGraph<Point, f64>,
}

impl VisibilityGraph {
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }
    /// Number of visible pairs.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
    pub fn point(&self, id: VertexId) -> Option<Point> {
        self.graph.node_weight(NodeIndex::new(id)).copied()
    }
    /// Checks whether two vertices see each other. Symmetric in its arguments.
    pub fn sees(&self, a: VertexId, b: VertexId) -> bool {
        a < self.vertex_count()
            && b < self.vertex_count()
            && self
                .graph
                .find_edge(NodeIndex::new(a), NodeIndex::new(b))
                .is_some()
    }
    /// The vertices visible from `id` together with their distance, in ascending id order.
    pub fn visible_from(&self, id: VertexId) -> SmallVec<[(VertexId, f64); N_SMALLVEC_SIZE]> {
        if id >= self.vertex_count() {
            return SmallVec::new();
        }
        let node = NodeIndex::new(id);
        let mut visible = self
            .graph
            .edges(node)
            .map(|e| {
                let other = if e.source() == node { e.target() } else { e.source() };
                (other.index(), *e.weight())
            })
            .collect::<SmallVec<[_; N_SMALLVEC_SIZE]>>();
        visible.sort_unstable_by_key(|(other, _)| *other);
        visible
    }
    /// Every visible pair once, as `(a, b, distance)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, f64)> + '_ {
        self.graph.edge_references().map(|e| {
            let (a, b) = (e.source().index(), e.target().index());
            (a.min(b), a.max(b), *e.weight())
        })
    }
    /// The underlying [petgraph] graph, for callers that want to run their own graph algorithms.
    pub fn graph(&self) -> &UnGraph<Point, f64> {
        &self.graph
    }
    /// Logs the visibility list of every vertex at debug level.
    pub fn log_visibility_lists(&self) {
        for node in self.graph.node_indices() {
            let id = node.index();
            let visible = self
                .visible_from(id)
                .iter()
                .map(|(other, _)| other)
                .join(", ");
            debug!("Vertex {} at {} sees [{}]", id, self.graph[node], visible);
        }
    }
}

/// Builds the visibility graph of `vertices` among the obstacles bounded by `edges`. The
/// line-of-sight test does not depend on direction, so each unordered pair is tested once and
/// linked both ways.
pub fn build_visibility_graph(
    vertices: &[Point],
    edges: &[Edge],
) -> Result<VisibilityGraph, ConfigError> {
    let mut graph = UnGraph::with_capacity(vertices.len(), vertices.len());
    for &vertex in vertices {
        graph.add_node(vertex);
    }
    for (i, j) in (0..vertices.len()).tuple_combinations() {
        if is_within_line_of_sight(&vertices[i], &vertices[j], edges)? {
            graph.add_edge(
                NodeIndex::new(i),
                NodeIndex::new(j),
                distance(&vertices[i], &vertices[j]),
            );
        }
    }
    info!(
        "Built visibility graph over {} vertices and {} obstacle edges: {} visible pairs",
        vertices.len(),
        edges.len(),
        graph.edge_count()
    );
    Ok(VisibilityGraph { graph })
}
