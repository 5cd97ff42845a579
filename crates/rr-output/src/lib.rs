//! `rr-output`: presentation of routing results.
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`report`]  | turn-by-turn text for a `DualRoute`, adjacency-list dump      |
//! | [`csv`]     | `RouteCsvWriter`: one CSV row per path step                   |
//! | [`error`]   | `OutputError`, `OutputResult<T>`                              |
//!
//! # Usage
//!
//! ```rust,ignore
//! use rr_output::write_route_report;
//!
//! let dual = router.find_paths(&network, "A", "C")?;
//! write_route_report(&mut std::io::stdout().lock(), &network, "A", "C", &dual)?;
//! ```

pub mod csv;
pub mod error;
pub mod report;


pub use self::csv::RouteCsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::{write_adjacency_list, write_route_report};
