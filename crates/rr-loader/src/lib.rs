//! `rr-loader`: build a [`RoadNetwork`](rr_graph::RoadNetwork) from CSV.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`loader`]  | `EdgeRecord`, `LoadOptions`, `IngestReport`, loading entry points |
//! | [`error`]   | `LoaderError`, `LoaderResult<T>`                             |
//!
//! # Pipeline
//!
//! ```text
//! CSV rows ──read_edge_records──▶ Vec<EdgeRecord>
//!          ──collect_vertex_names──▶ sorted, unique names ──set_vertices
//!          ──populate_network──▶ add_edge per row (bad rows reported, skipped)
//! ```

pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{LoaderError, LoaderResult};
pub use loader::{
    EdgeRecord, IngestReport, LoadOptions, SkippedEdge, build_network, collect_vertex_names,
    load_network_csv, load_network_reader, populate_network, read_edge_records,
};
