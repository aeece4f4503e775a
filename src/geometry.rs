use core::fmt;
use std::cmp::Ordering;

/// A location on the plane in double precision.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        distance(self, other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Euclidean distance between two points. Serves both as edge weight and as A* heuristic.
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// A line segment between two points, weighted by its length. Used for obstacle boundaries and
/// for the candidate path during a line-of-sight test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub p1: Point,
    pub p2: Point,
    weight: f64,
}

impl Edge {
    pub fn new(p1: Point, p2: Point) -> Edge {
        Edge {
            p1,
            p2,
            weight: distance(&p1, &p2),
        }
    }
    pub fn weight(&self) -> f64 {
        self.weight
    }
    /// True if both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }
    pub fn intersects(&self, other: &Edge) -> bool {
        segments_intersect(self, other)
    }
    pub fn midpoint(&self) -> Point {
        Point::new((self.p1.x + self.p2.x) / 2.0, (self.p1.y + self.p2.y) / 2.0)
    }
    /// True if `point` lies on the segment, endpoints included.
    pub fn contains(&self, point: &Point) -> bool {
        orientation(&self.p1, &self.p2, point) == Ordering::Equal
            && on_segment(&self.p1, point, &self.p2)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.p1, self.p2)
    }
}

/// Sign of the cross product of `a -> b` and `a -> c`: [Ordering::Greater] for a counter-clockwise
/// turn, [Ordering::Less] for clockwise and [Ordering::Equal] when collinear.
fn orientation(a: &Point, b: &Point, c: &Point) -> Ordering {
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    cross.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

/// Assumes `p`, `q` and `r` are collinear and checks whether `q` lies within the bounding box of `p r`.
fn on_segment(p: &Point, q: &Point, r: &Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Inclusive segment intersection test. Touching at an endpoint and collinear overlap both count as
/// intersecting, which lets the visibility classifier tell benign contacts from crossings.
pub fn segments_intersect(e1: &Edge, e2: &Edge) -> bool {
    let o1 = orientation(&e1.p1, &e1.p2, &e2.p1);
    let o2 = orientation(&e1.p1, &e1.p2, &e2.p2);
    let o3 = orientation(&e2.p1, &e2.p2, &e1.p1);
    let o4 = orientation(&e2.p1, &e2.p2, &e1.p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    (o1 == Ordering::Equal && on_segment(&e1.p1, &e2.p1, &e1.p2))
        || (o2 == Ordering::Equal && on_segment(&e1.p1, &e2.p2, &e1.p2))
        || (o3 == Ordering::Equal && on_segment(&e2.p1, &e1.p1, &e2.p2))
        || (o4 == Ordering::Equal && on_segment(&e2.p1, &e1.p2, &e2.p2))
}

/// Even-odd test of `point` against the closed obstacles bounded by `edges`. Points on an edge
/// are on the boundary and not inside. Every edge of a closed polygon takes part in the crossing
/// count, so no grouping of the edges into polygons is needed as long as obstacles do not overlap.
pub fn is_strictly_inside(point: &Point, edges: &[Edge]) -> bool {
    if edges.iter().any(|edge| edge.contains(point)) {
        return false;
    }
    // Casts a ray towards positive x and counts the edges it crosses
    edges
        .iter()
        .filter(|edge| (edge.p1.y > point.y) != (edge.p2.y > point.y))
        .filter(|edge| {
            let intersect_x = (edge.p2.x - edge.p1.x) * (point.y - edge.p1.y)
                / (edge.p2.y - edge.p1.y)
                + edge.p1.x;
            point.x < intersect_x
        })
        .count()
        % 2
        == 1
}

/// Boundary edges of a closed polygon: every consecutive pair plus the edge from the last vertex
/// back to the first.
pub fn polygon_edges(polygon: &[Point]) -> Vec<Edge> {
    if polygon.len() < 2 {
        return Vec::new();
    }
    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(&p1, &p2)| Edge::new(p1, p2))
        .collect()
}
