//! `rr-core`: foundational types for the `roadroute` workspace.
//!
//! This crate is a dependency of every other `rr-*` crate.  It has no
//! `rr-*` dependencies and no required external ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VertexId`                                            |
//! | [`objective`]   | `Objective` enum (distance / time)                    |
//! | [`config`]      | `SearchConfig`                                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod ids;
pub mod objective;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SearchConfig;
pub use ids::VertexId;
pub use objective::Objective;
