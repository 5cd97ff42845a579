//! CSV export of routes.
//!
//! One row per path step:
//!
//! ```csv
//! objective,step,from,street_name,to,direction,distance,speed,minutes
//! distance,1,A,First Ave,B,E,10,50,12
//! ```
//!
//! `minutes` is empty for a segment with no usable speed.  Unreached routes
//! contribute no rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use rr_graph::{RoadNetwork, Route};

use crate::OutputResult;

const HEADER: [&str; 9] = [
    "objective",
    "step",
    "from",
    "street_name",
    "to",
    "direction",
    "distance",
    "speed",
    "minutes",
];

/// Writes route steps to a CSV sink.
pub struct RouteCsvWriter<W: Write = File> {
    inner:    Writer<W>,
    finished: bool,
}

impl RouteCsvWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> RouteCsvWriter<W> {
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(sink);
        inner.write_record(HEADER)?;
        Ok(Self { inner, finished: false })
    }

    /// Append every step of `route`.  Returns the number of rows written.
    pub fn write_route(&mut self, network: &RoadNetwork, route: &Route) -> OutputResult<usize> {
        for (step, (&r, edge)) in route.edges.iter().zip(route.edges_in(network)).enumerate() {
            let minutes = edge
                .travel_hours()
                .map(|h| (h * 60.0).to_string())
                .unwrap_or_default();
            self.inner.write_record(&[
                route.objective.as_str().to_owned(),
                (step + 1).to_string(),
                network.name(r.from).to_owned(),
                edge.street_name.clone(),
                edge.to.clone(),
                edge.direction.clone(),
                edge.distance.to_string(),
                edge.speed.to_string(),
                minutes,
            ])?;
        }
        Ok(route.edges.len())
    }

    /// Flush the underlying sink.
    ///
    /// Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and return the sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        self.inner
            .into_inner()
            .map_err(|e| crate::OutputError::Io(e.into_error()))
    }
}
