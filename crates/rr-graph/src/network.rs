//! Road network representation.
//!
//! # Data layout
//!
//! The network is an adjacency list keyed by intersection name:
//!
//! ```text
//! vertices: [ Vertex { name: "A", edges: [A->B, A->C] },
//!             Vertex { name: "B", edges: [B->C] },
//!             Vertex { name: "C", edges: [] } ]
//! ```
//!
//! `vertices` is sorted by name with no duplicates.  That ordering is what
//! makes [`RoadNetwork::index_of`] a binary search, so the table is built in
//! one shot by [`RoadNetwork::set_vertices`] from a list the caller already
//! sorted and deduplicated, and is never reordered afterwards.
//!
//! Edges name their destination rather than pointing at it, so there are no
//! back-references between vertices.  An individual stored edge is addressed
//! by an [`EdgeRef`] (origin vertex plus slot in that vertex's list).

use rr_core::VertexId;

use crate::error::{NetworkError, NetworkResult};

/// Largest per-edge cost a search will relax on, in miles or hours.
///
/// A simple path has fewer than `u32::MAX` edges, so any sum of costs at or
/// below this bound stays finite.
pub const MAX_EDGE_COST: f64 = 1e290;

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed road segment, owned by the vertex it leaves from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Name of the destination intersection.
    pub to: String,
    pub street_name: String,
    /// Free-form heading label, e.g. `"N"` or `"Eastbound"`.
    pub direction: String,
    /// Segment length in miles.  Never negative.
    pub distance: f64,
    /// Posted speed in miles per hour.
    pub speed: f64,
}

impl Edge {
    pub fn new(
        to: impl Into<String>,
        street_name: impl Into<String>,
        direction: impl Into<String>,
        distance: f64,
        speed: f64,
    ) -> Self {
        Self {
            to: to.into(),
            street_name: street_name.into(),
            direction: direction.into(),
            distance,
            speed,
        }
    }

    /// Time to drive this segment at its posted speed, in hours.
    ///
    /// `None` when the segment has no usable travel time: `speed` is zero or
    /// negative, or so small that the quotient exceeds [`MAX_EDGE_COST`].
    #[inline]
    pub fn travel_hours(&self) -> Option<f64> {
        if self.speed <= 0.0 {
            return None;
        }
        Some(self.distance / self.speed).filter(|h| *h <= MAX_EDGE_COST)
    }
}

/// Address of one stored edge: the vertex it leaves from and its position in
/// that vertex's edge list.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRef {
    pub from: VertexId,
    pub slot: u32,
}

impl std::fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.from, self.slot)
    }
}

// ── Vertex ────────────────────────────────────────────────────────────────────

/// A named intersection and its outgoing edges, in insertion order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    name:  String,
    edges: Vec<Edge>,
}

impl Vertex {
    fn new(name: String) -> Self {
        Self { name, edges: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph: the sorted vertex table plus every vertex's edges.
///
/// Built once (vertices, then edges) and read-only afterwards, so a single
/// instance can be shared by concurrent searches.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadNetwork {
    vertices: Vec<Vertex>,
}

impl RoadNetwork {
    /// Construct an empty network with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `new()` followed by [`set_vertices`](Self::set_vertices).
    pub fn with_vertices<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut net = Self::new();
        net.set_vertices(names);
        net
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Replace the vertex table with one edge-less vertex per name, in the
    /// order supplied.
    ///
    /// The names must already be sorted ascending with duplicates removed.
    /// The network does not re-sort: lookups on an unsorted table return
    /// arbitrary results.
    pub fn set_vertices<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vertices = names
            .into_iter()
            .map(|n| Vertex::new(n.into()))
            .collect();

        let sorted = self
            .vertices
            .windows(2)
            .all(|w| w[0].name < w[1].name);
        if !sorted {
            log::warn!("vertex names are not sorted and unique; name lookups will be unreliable");
        }

        log::debug!("vertex table initialised with {} vertices", self.vertices.len());
    }

    /// Append `edge` to the outgoing list of the vertex named `from`.
    ///
    /// Returns the new edge's [`EdgeRef`].  Fails without touching the
    /// network when `from` is not in the vertex table, the distance is
    /// negative, NaN or above [`MAX_EDGE_COST`], or the speed is NaN,
    /// infinite or negative.
    ///
    /// A speed with no usable travel time (zero, or small enough that
    /// `distance / speed` exceeds [`MAX_EDGE_COST`]) is accepted, since the
    /// edge still serves distance queries, but logged, and time searches
    /// skip the edge.  A destination
    /// missing from the vertex table is likewise logged and stored; searches
    /// never traverse it.
    pub fn add_edge(&mut self, from: &str, edge: Edge) -> NetworkResult<EdgeRef> {
        let Some(id) = self.index_of(from) else {
            return Err(NetworkError::UnresolvedEdgeEndpoint { name: from.to_owned() });
        };

        if !(0.0..=MAX_EDGE_COST).contains(&edge.distance) {
            return Err(NetworkError::InvalidWeight {
                from:  from.to_owned(),
                to:    edge.to,
                field: "distance",
                value: edge.distance,
            });
        }
        if edge.speed.is_nan() || edge.speed.is_infinite() || edge.speed < 0.0 {
            return Err(NetworkError::InvalidWeight {
                from:  from.to_owned(),
                to:    edge.to,
                field: "speed",
                value: edge.speed,
            });
        }

        if edge.travel_hours().is_none() {
            log::warn!(
                "edge {from} -> {} ({}) has no usable speed ({}); it will be ignored by time searches",
                edge.to,
                edge.street_name,
                edge.speed
            );
        }
        if self.index_of(&edge.to).is_none() {
            log::warn!(
                "edge {from} -> {} ({}) leads to an unknown vertex; it will never be traversed",
                edge.to,
                edge.street_name
            );
        }

        let vertex = &mut self.vertices[id.index()];
        let slot = vertex.edges.len() as u32;
        vertex.edges.push(edge);
        Ok(EdgeRef { from: id, slot })
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Binary search for `name` in the sorted vertex table.
    pub fn index_of(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .binary_search_by(|v| v.name.as_str().cmp(name))
            .ok()
            .map(|i| VertexId(i as u32))
    }

    /// `true` if `name` is an intersection in this network.  Callers should
    /// check both endpoints with this before routing.
    pub fn is_valid_point(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// All vertices in table (name) order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// `None` if `id` is out of range.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Name of vertex `id`.
    ///
    /// # Panics
    ///
    /// If `id` was not produced by this network.
    pub fn name(&self, id: VertexId) -> &str {
        &self.vertices[id.index()].name
    }

    /// Outgoing edges of `id` in insertion order; empty for an unknown id.
    pub fn edges(&self, id: VertexId) -> &[Edge] {
        self.vertex(id).map(Vertex::edges).unwrap_or(&[])
    }

    /// Outgoing edges of `id` paired with their [`EdgeRef`]s.
    #[inline]
    pub fn out_edges(&self, id: VertexId) -> impl Iterator<Item = (EdgeRef, &Edge)> + '_ {
        self.edges(id)
            .iter()
            .enumerate()
            .map(move |(slot, e)| (EdgeRef { from: id, slot: slot as u32 }, e))
    }

    /// The edge stored at `r`.
    ///
    /// # Panics
    ///
    /// If `r` was not produced by this network.
    pub fn edge(&self, r: EdgeRef) -> &Edge {
        &self.vertices[r.from.index()].edges[r.slot as usize]
    }
}
