//! Routing trait, default Dijkstra implementation, and the dual-objective
//! front end.
//!
//! # Pluggability
//!
//! [`DualRouter`] drives any [`Router`], so a different single-objective
//! engine (A*, contraction hierarchies) can be dropped in without touching
//! the callers.  The default [`DijkstraRouter`] is a textbook lazy-deletion
//! Dijkstra over `f64` costs.
//!
//! # Cost units
//!
//! | Objective  | Edge cost          | `Route::total_cost` |
//! |------------|--------------------|---------------------|
//! | `Distance` | `distance`         | miles               |
//! | `Time`     | `distance / speed` | hours               |
//!
//! # Independence
//!
//! The two objectives never share labels, frontiers, or predecessor arrays;
//! each search allocates its own.  They only share `&RoadNetwork`, which is
//! why the `parallel` feature can run them on two Rayon tasks.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rr_core::{Objective, SearchConfig, VertexId};

use crate::error::{RouteError, RouteResult};
use crate::network::{Edge, EdgeRef, RoadNetwork};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of one single-objective query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub objective: Objective,
    /// Edges to traverse in order, from start to finish.
    pub edges: Vec<EdgeRef>,
    /// Sum of the objective's edge costs along `edges`.  Zero when the
    /// finish was not reached.
    pub total_cost: f64,
    /// `false` if no path leads from start to finish.  Distinguishes an
    /// unreachable finish from `start == finish`, which also has no edges.
    pub reached: bool,
    /// Edges the search declined to relax because they have no defined cost
    /// under this objective (zero speed in a time search).
    pub skipped_edges: Vec<EdgeRef>,
}

impl Route {
    fn trivial(objective: Objective) -> Self {
        Self {
            objective,
            edges: Vec::new(),
            total_cost: 0.0,
            reached: true,
            skipped_edges: Vec::new(),
        }
    }

    fn unreached(objective: Objective, skipped_edges: Vec<EdgeRef>) -> Self {
        Self {
            objective,
            edges: Vec::new(),
            total_cost: 0.0,
            reached: false,
            skipped_edges,
        }
    }

    /// `true` if the start and finish are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.reached && self.edges.is_empty()
    }

    /// Number of road segments on the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Resolve the path's edges against the network that produced them.
    pub fn edges_in<'a>(&'a self, network: &'a RoadNetwork) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().map(move |&r| network.edge(r))
    }
}

/// Minimum-distance and minimum-time routes for the same start/finish pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualRoute {
    pub distance: Route,
    pub time: Route,
}

impl DualRoute {
    /// `true` when both objectives picked the same sequence of edges.
    pub fn agree(&self) -> bool {
        self.distance.edges == self.time.edges
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable single-objective routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so [`DualRouter`] can run the two
/// objectives on separate Rayon tasks.
pub trait Router: Send + Sync {
    /// Compute the cheapest route from `from` to `to` under `objective`.
    ///
    /// An unreachable `to` is not an error: it yields a route with
    /// `reached == false`.  Ids outside the network are rejected with
    /// [`RouteError::VertexNotFound`].
    fn route(
        &self,
        network: &RoadNetwork,
        from: VertexId,
        to: VertexId,
        objective: Objective,
    ) -> RouteResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm with lazy deletion of stale frontier
/// entries.
///
/// By default the search drains the whole component reachable from the
/// start; set [`SearchConfig::stop_at_finish`] to return as soon as the
/// finish is settled.  Both report the same cost and path.
#[derive(Debug, Clone, Default)]
pub struct DijkstraRouter {
    pub config: SearchConfig,
}

impl DijkstraRouter {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Router for DijkstraRouter {
    fn route(
        &self,
        network: &RoadNetwork,
        from: VertexId,
        to: VertexId,
        objective: Objective,
    ) -> RouteResult<Route> {
        dijkstra(network, from, to, objective, self.config.stop_at_finish)
    }
}

// ── DualRouter ────────────────────────────────────────────────────────────────

/// Runs one search per [`Objective`] and pairs the results.
///
/// ```
/// use rr_core::SearchConfig;
/// use rr_graph::{DualRouter, Edge, RoadNetwork};
///
/// let mut net = RoadNetwork::with_vertices(["A", "B"]);
/// net.add_edge("A", Edge::new("B", "Main St", "E", 2.0, 30.0)).unwrap();
///
/// let dual = DualRouter::new(SearchConfig::default())
///     .find_paths(&net, "A", "B")
///     .unwrap();
/// assert_eq!(dual.distance.total_cost, 2.0);
/// assert!(dual.agree());
/// ```
#[derive(Debug, Clone)]
pub struct DualRouter<R: Router = DijkstraRouter> {
    router:   R,
    parallel: bool,
}

impl DualRouter<DijkstraRouter> {
    pub fn new(config: SearchConfig) -> Self {
        let parallel = config.parallel;
        Self { router: DijkstraRouter::new(config), parallel }
    }
}

impl Default for DualRouter<DijkstraRouter> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<R: Router> DualRouter<R> {
    pub fn with_router(router: R, parallel: bool) -> Self {
        Self { router, parallel }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Look up both endpoints by name, then route.
    ///
    /// Fails with [`RouteError::InvalidEndpoint`] before any search runs if
    /// either name is not in the vertex table.
    pub fn find_paths(
        &self,
        network: &RoadNetwork,
        start: &str,
        finish: &str,
    ) -> RouteResult<DualRoute> {
        let from = network
            .index_of(start)
            .ok_or_else(|| RouteError::InvalidEndpoint { name: start.to_owned() })?;
        let to = network
            .index_of(finish)
            .ok_or_else(|| RouteError::InvalidEndpoint { name: finish.to_owned() })?;
        self.find_paths_by_id(network, from, to)
    }

    pub fn find_paths_by_id(
        &self,
        network: &RoadNetwork,
        from: VertexId,
        to: VertexId,
    ) -> RouteResult<DualRoute> {
        let (distance, time) = self.run_both(network, from, to);
        Ok(DualRoute { distance: distance?, time: time? })
    }

    #[cfg(feature = "parallel")]
    fn run_both(
        &self,
        network: &RoadNetwork,
        from: VertexId,
        to: VertexId,
    ) -> (RouteResult<Route>, RouteResult<Route>) {
        if self.parallel {
            rayon::join(
                || self.router.route(network, from, to, Objective::Distance),
                || self.router.route(network, from, to, Objective::Time),
            )
        } else {
            (
                self.router.route(network, from, to, Objective::Distance),
                self.router.route(network, from, to, Objective::Time),
            )
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run_both(
        &self,
        network: &RoadNetwork,
        from: VertexId,
        to: VertexId,
    ) -> (RouteResult<Route>, RouteResult<Route>) {
        if self.parallel {
            log::debug!("parallel search requested but the `parallel` feature is off; running sequentially");
        }
        (
            self.router.route(network, from, to, Objective::Distance),
            self.router.route(network, from, to, Objective::Time),
        )
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Frontier entry.  Ordered so that `BinaryHeap` (a max-heap) pops the
/// lowest cost first, and the lowest `VertexId` among equal costs.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    cost:   f64,
    vertex: VertexId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Edge cost under `objective`; `None` if undefined (non-positive speed).
#[inline]
fn edge_cost(edge: &Edge, objective: Objective) -> Option<f64> {
    match objective {
        Objective::Distance => Some(edge.distance),
        Objective::Time     => edge.travel_hours(),
    }
}

fn dijkstra(
    network: &RoadNetwork,
    from: VertexId,
    to: VertexId,
    objective: Objective,
    stop_at_finish: bool,
) -> RouteResult<Route> {
    let n = network.vertex_count();
    for id in [from, to] {
        if id.index() >= n {
            return Err(RouteError::VertexNotFound(id));
        }
    }

    if from == to {
        return Ok(Route::trivial(objective));
    }

    // best[v] = best known cost to reach v.
    let mut best = vec![f64::INFINITY; n];
    // prev_edge[v] = the edge whose relaxation set best[v].
    let mut prev_edge: Vec<Option<EdgeRef>> = vec![None; n];
    let mut skipped = Vec::new();

    best[from.index()] = 0.0;

    let mut frontier = BinaryHeap::new();
    frontier.push(Frontier { cost: 0.0, vertex: from });

    let mut settled = 0usize;
    let mut stale   = 0usize;

    while let Some(Frontier { cost, vertex }) = frontier.pop() {
        if cost > best[vertex.index()] {
            stale += 1;
            continue;
        }
        settled += 1;

        if stop_at_finish && vertex == to {
            break;
        }

        for (edge_ref, edge) in network.out_edges(vertex) {
            // Destinations missing from the table were reported at insert time.
            let Some(neighbor) = network.index_of(&edge.to) else {
                continue;
            };
            let Some(weight) = edge_cost(edge, objective) else {
                skipped.push(edge_ref);
                continue;
            };

            // Finite: every weight is at most MAX_EDGE_COST.
            let candidate = cost + weight;
            if candidate < best[neighbor.index()] {
                best[neighbor.index()] = candidate;
                prev_edge[neighbor.index()] = Some(edge_ref);
                frontier.push(Frontier { cost: candidate, vertex: neighbor });
            }
        }
    }

    log::debug!(
        "{objective} search {} -> {}: settled {settled}, discarded {stale} stale entries",
        network.name(from),
        network.name(to),
    );
    if !skipped.is_empty() {
        log::warn!(
            "{objective} search skipped {} edge(s) with no defined cost",
            skipped.len()
        );
    }

    Ok(reconstruct(&prev_edge, &best, from, to, objective, skipped))
}

fn reconstruct(
    prev_edge: &[Option<EdgeRef>],
    best: &[f64],
    from: VertexId,
    to: VertexId,
    objective: Objective,
    skipped: Vec<EdgeRef>,
) -> Route {
    if prev_edge[to.index()].is_none() {
        return Route::unreached(objective, skipped);
    }

    let mut edges = Vec::new();
    let mut cur = to;
    while let Some(e) = prev_edge[cur.index()] {
        edges.push(e);
        cur = e.from;
    }
    debug_assert_eq!(cur, from);
    edges.reverse();

    Route {
        objective,
        edges,
        total_cost: best[to.index()],
        reached: true,
        skipped_edges: skipped,
    }
}
