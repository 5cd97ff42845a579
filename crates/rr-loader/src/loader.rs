//! CSV road-network loader.
//!
//! # CSV format
//!
//! One row per directed road segment, six columns, no header row by default:
//!
//! ```csv
//! from,street_name,to,direction,distance,speed
//! Elm_1st,1st Ave,Elm_2nd,N,0.5,25
//! Elm_2nd,Elm St,Oak_2nd,E,0.8,35
//! ```
//!
//! | Column        | Type   | Meaning                                 |
//! |---------------|--------|-----------------------------------------|
//! | `from`        | string | origin intersection                     |
//! | `street_name` | string | road name shown in directions           |
//! | `to`          | string | destination intersection                |
//! | `direction`   | string | heading label                           |
//! | `distance`    | f64    | miles, `≥ 0`                            |
//! | `speed`       | f64    | miles per hour, `> 0` for time routing  |
//!
//! Fields are trimmed.  With [`LoadOptions::has_headers`] the first row is
//! treated as a header and must use the column names above.
//!
//! # Partial success
//!
//! A row that cannot be parsed aborts the load with
//! [`LoaderError::Parse`](crate::LoaderError::Parse).  A row that parses but
//! is rejected by the network (unknown origin, negative distance, …) is
//! logged, recorded in [`IngestReport::skipped`], and ingestion continues.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rr_graph::{Edge, NetworkError, RoadNetwork};

use crate::LoaderResult;

// ── CSV record ────────────────────────────────────────────────────────────────

/// One parsed CSV row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EdgeRecord {
    pub from:        String,
    pub street_name: String,
    pub to:          String,
    pub direction:   String,
    pub distance:    f64,
    pub speed:       f64,
    /// 1-based line number in the source, filled in by the reader.
    #[serde(skip)]
    pub line:        u64,
}

impl EdgeRecord {
    pub fn to_edge(&self) -> Edge {
        Edge::new(
            self.to.clone(),
            self.street_name.clone(),
            self.direction.clone(),
            self.distance,
            self.speed,
        )
    }
}

// ── Options & report ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Treat the first row as a header.
    pub has_headers: bool,
    pub delimiter: u8,
    /// Create vertices for names that only ever appear in the `to` column.
    ///
    /// When `false`, only `from` names become vertices; edges into a
    /// destination-only name are kept but can never be traversed.
    pub include_destinations: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_headers: false,
            delimiter: b',',
            include_destinations: true,
        }
    }
}

/// A row the network refused.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEdge {
    pub line:   u64,
    pub from:   String,
    pub street: String,
    pub reason: NetworkError,
}

/// Outcome of populating a network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    pub added:   usize,
    pub skipped: Vec<SkippedEdge>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RoadNetwork`] from a CSV file.
pub fn load_network_csv(
    path: &Path,
    opts: &LoadOptions,
) -> LoaderResult<(RoadNetwork, IngestReport)> {
    let file = std::fs::File::open(path)?;
    log::info!("loading road network from {}", path.display());
    load_network_reader(file, opts)
}

/// Like [`load_network_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded data.
pub fn load_network_reader<R: Read>(
    reader: R,
    opts: &LoadOptions,
) -> LoaderResult<(RoadNetwork, IngestReport)> {
    let records = read_edge_records(reader, opts)?;
    Ok(build_network(&records, opts))
}

/// Parse every row of `reader` into an [`EdgeRecord`].
pub fn read_edge_records<R: Read>(reader: R, opts: &LoadOptions) -> LoaderResult<Vec<EdgeRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(opts.has_headers)
        .delimiter(opts.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = if opts.has_headers {
        Some(csv_reader.headers()?.clone())
    } else {
        None
    };

    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();
    while csv_reader.read_record(&mut row)? {
        let mut record: EdgeRecord = row.deserialize(headers.as_ref())?;
        record.line = row.position().map_or(0, |p| p.line());
        records.push(record);
    }

    log::debug!("parsed {} edge records", records.len());
    Ok(records)
}

/// Sorted, duplicate-free intersection names referenced by `records`.
///
/// This is the ordering [`RoadNetwork::set_vertices`] requires.
pub fn collect_vertex_names(records: &[EdgeRecord], include_destinations: bool) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|r| r.from.clone()).collect();
    if include_destinations {
        names.extend(records.iter().map(|r| r.to.clone()));
    }
    names.sort_unstable();
    names.dedup();
    names
}

/// Build the vertex table from `records`, then attach every edge.
pub fn build_network(records: &[EdgeRecord], opts: &LoadOptions) -> (RoadNetwork, IngestReport) {
    let names = collect_vertex_names(records, opts.include_destinations);
    let mut network = RoadNetwork::with_vertices(names);
    let report = populate_network(&mut network, records);

    log::info!(
        "road network: {} vertices, {} edges ({} rows skipped)",
        network.vertex_count(),
        network.edge_count(),
        report.skipped.len()
    );
    (network, report)
}

/// Attach `records` to an existing vertex table, one `add_edge` per row.
///
/// Rejected rows never abort the pass.
pub fn populate_network(network: &mut RoadNetwork, records: &[EdgeRecord]) -> IngestReport {
    let mut report = IngestReport::default();

    for record in records {
        match network.add_edge(&record.from, record.to_edge()) {
            Ok(_) => report.added += 1,
            Err(reason) => {
                log::warn!("line {}: skipping edge on {}: {reason}", record.line, record.street_name);
                report.skipped.push(SkippedEdge {
                    line:   record.line,
                    from:   record.from.clone(),
                    street: record.street_name.clone(),
                    reason,
                });
            }
        }
    }

    report
}
