//! Turn-by-turn text rendering.
//!
//! ```text
//! Shortest path:
//! From A
//! Take First Ave. Distance: 10.00 miles
//! Take Second Ave. Distance: 5.00 miles
//! Arrive at C
//! Total distance (shortest path): 15.00 miles
//!
//! Quickest path:
//! From A
//! Take Expressway. Time: 12.00 minutes
//! Arrive at C
//! Total time (quickest path): 12.00 minutes
//! ```

use std::io::Write;

use rr_core::Objective;
use rr_graph::{DualRoute, Edge, RoadNetwork, Route};

use crate::OutputResult;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Render both routes of `dual`, distance first.
pub fn write_route_report<W: Write>(
    w: &mut W,
    network: &RoadNetwork,
    start: &str,
    finish: &str,
    dual: &DualRoute,
) -> OutputResult<()> {
    write_section(w, network, start, finish, &dual.distance)?;
    writeln!(w)?;
    write_section(w, network, start, finish, &dual.time)?;
    Ok(())
}

fn write_section<W: Write>(
    w: &mut W,
    network: &RoadNetwork,
    start: &str,
    finish: &str,
    route: &Route,
) -> OutputResult<()> {
    let (heading, total_label) = match route.objective {
        Objective::Distance => ("Shortest path", "Total distance (shortest path)"),
        Objective::Time     => ("Quickest path", "Total time (quickest path)"),
    };

    writeln!(w, "{heading}:")?;
    writeln!(w, "From {start}")?;

    if !route.reached {
        writeln!(w, "No route from {start} to {finish}.")?;
    } else {
        for edge in route.edges_in(network) {
            writeln!(w, "Take {}. {}", edge.street_name, step_cost(edge, route.objective))?;
        }
        writeln!(w, "Arrive at {finish}")?;
        writeln!(w, "{total_label}: {}", total_cost(route))?;
    }

    if !route.skipped_edges.is_empty() {
        writeln!(
            w,
            "Note: {} road segment(s) without a usable speed were ignored.",
            route.skipped_edges.len()
        )?;
    }
    Ok(())
}

fn step_cost(edge: &Edge, objective: Objective) -> String {
    match objective {
        Objective::Distance => format!("Distance: {:.2} miles", edge.distance),
        Objective::Time => {
            let minutes = edge.travel_hours().unwrap_or(0.0) * MINUTES_PER_HOUR;
            format!("Time: {minutes:.2} minutes")
        }
    }
}

fn total_cost(route: &Route) -> String {
    match route.objective {
        Objective::Distance => format!("{:.2} miles", route.total_cost),
        Objective::Time     => format!("{:.2} minutes", route.total_cost * MINUTES_PER_HOUR),
    }
}

/// Dump every vertex and its outgoing edges, for troubleshooting input data.
pub fn write_adjacency_list<W: Write>(w: &mut W, network: &RoadNetwork) -> OutputResult<()> {
    writeln!(w, "Adjacency List:")?;
    for vertex in network.vertices() {
        writeln!(w, "Vertex {}:", vertex.name())?;
        for e in vertex.edges() {
            writeln!(
                w,
                "  To: {}, Street: {}, Direction: {}, Distance: {}, Speed: {}",
                e.to, e.street_name, e.direction, e.distance, e.speed
            )?;
        }
        writeln!(w)?;
    }
    Ok(())
}
