//! Graph-subsystem error types.

use thiserror::Error;

use rr_core::VertexId;

/// Errors produced while populating a [`RoadNetwork`](crate::RoadNetwork).
///
/// All of them reject a single edge; the network is left as it was, so the
/// caller can report the problem and keep ingesting.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NetworkError {
    #[error("vertex {name:?} not found in vertex table")]
    UnresolvedEdgeEndpoint { name: String },

    #[error("edge {from:?} -> {to:?} has invalid {field} {value}")]
    InvalidWeight {
        from:  String,
        to:    String,
        field: &'static str,
        value: f64,
    },
}

/// Errors produced by a routing query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("{name:?} is not a known intersection")]
    InvalidEndpoint { name: String },

    #[error("vertex {0} not found in network")]
    VertexNotFound(VertexId),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
pub type RouteResult<T> = Result<T, RouteError>;
