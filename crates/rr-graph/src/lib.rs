//! `rr-graph`: road network vertex table and dual-objective routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Edge`, `EdgeRef`, `Vertex`, `RoadNetwork`                  |
//! | [`router`]  | `Router` trait, `Route`, `DualRoute`, `DijkstraRouter`, `DualRouter` |
//! | [`error`]   | `NetworkError`, `RouteError` and their result aliases       |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `DualRouter` may run both searches on Rayon tasks.        |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |
//!
//! The concurrent branch of `DualRouter` only exists with `parallel` on, so
//! test both configurations:
//!
//! ```text
//! cargo test -p rr-graph
//! cargo test -p rr-graph --features parallel
//! ```
//!
//! This crate does no file or console I/O.  Loading lives in `rr-loader`,
//! rendering in `rr-output`.

pub mod error;
pub mod network;
pub mod router;


pub use error::{NetworkError, NetworkResult, RouteError, RouteResult};
pub use network::{Edge, EdgeRef, RoadNetwork, Vertex, MAX_EDGE_COST};
pub use router::{DijkstraRouter, DualRoute, DualRouter, Route, Router};
