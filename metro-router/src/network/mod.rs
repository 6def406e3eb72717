//! The live metro network topology.
//!
//! Three lines sharing interchange stations: Red (Miyapur ↔ LB Nagar),
//! Blue (Nagole ↔ Raidurg) and Green (Parade Ground ↔ MG Bus Station).
//! Ameerpet joins Red and Blue, Parade Ground joins Blue and Green, and
//! MG Bus Station joins Red and Green.
//!
//! The tables here are the fixed input data for the planner. Whoever
//! assembles the process builds the graph and line lookup once at startup
//! and shares them with every [`RouteFinder`](crate::planner::RouteFinder);
//! nothing in this crate holds a hidden global instance.

use tracing::debug;

use crate::domain::{Line, LineMap};
use crate::graph::StationGraph;

/// Red line edges, Miyapur to LB Nagar. Weights are meters and minutes.
const RED_EDGES: &[(&str, &str, u32, u32)] = &[
    ("Miyapur", "JNTU College", 1800, 3),
    ("JNTU College", "KPHB Colony", 1500, 2),
    ("KPHB Colony", "Kukatpally", 1400, 2),
    ("Kukatpally", "Balanagar", 1600, 3),
    ("Balanagar", "Moosapet", 1100, 2),
    ("Moosapet", "Bharat Nagar", 1000, 2),
    ("Bharat Nagar", "Erragadda", 1200, 2),
    ("Erragadda", "ESI Hospital", 1100, 2),
    ("ESI Hospital", "S.R. Nagar", 1000, 2),
    ("S.R. Nagar", "Ameerpet", 900, 2),
    ("Ameerpet", "Punjagutta", 1400, 2),
    ("Punjagutta", "Irrum Manzil", 1000, 2),
    ("Irrum Manzil", "Khairatabad", 1100, 2),
    ("Khairatabad", "Lakdi-ka-pul", 1300, 2),
    ("Lakdi-ka-pul", "Assembly", 1000, 2),
    ("Assembly", "Nampally", 900, 2),
    ("Nampally", "Gandhi Bhavan", 900, 2),
    ("Gandhi Bhavan", "Osmania Medical College", 800, 2),
    ("Osmania Medical College", "MG Bus Station", 900, 2),
    ("MG Bus Station", "Malakpet", 1300, 2),
    ("Malakpet", "New Market", 1100, 2),
    ("New Market", "Musarambagh", 1000, 2),
    ("Musarambagh", "Dilsukhnagar", 1300, 2),
    ("Dilsukhnagar", "Chaitanyapuri", 1100, 2),
    ("Chaitanyapuri", "Victoria Memorial", 1300, 2),
    ("Victoria Memorial", "LB Nagar", 1400, 3),
];

/// Blue line edges, Nagole to Raidurg.
const BLUE_EDGES: &[(&str, &str, u32, u32)] = &[
    ("Nagole", "Uppal", 1300, 2),
    ("Uppal", "Stadium", 1300, 2),
    ("Stadium", "NGRI", 1300, 2),
    ("NGRI", "Habsiguda", 1100, 2),
    ("Habsiguda", "Tarnaka", 1200, 2),
    ("Tarnaka", "Mettuguda", 1300, 2),
    ("Mettuguda", "Secunderabad East", 1100, 2),
    ("Secunderabad East", "Parade Ground", 1500, 3),
    ("Parade Ground", "Paradise", 1000, 2),
    ("Paradise", "Rasoolpura", 1200, 2),
    ("Rasoolpura", "Prakash Nagar", 1100, 2),
    ("Prakash Nagar", "Begumpet", 1100, 2),
    ("Begumpet", "Ameerpet", 1700, 3),
    ("Ameerpet", "Madhura Nagar", 1000, 2),
    ("Madhura Nagar", "Yusufguda", 1100, 2),
    ("Yusufguda", "Road No. 5 Jubilee Hills", 1200, 2),
    ("Road No. 5 Jubilee Hills", "Jubilee Hills Check Post", 1100, 2),
    ("Jubilee Hills Check Post", "Peddamma Gudi", 1000, 2),
    ("Peddamma Gudi", "Madhapur", 1200, 2),
    ("Madhapur", "Durgam Cheruvu", 1300, 2),
    ("Durgam Cheruvu", "Hitec City", 1500, 3),
    ("Hitec City", "Raidurg", 1600, 3),
];

/// Green line edges, Parade Ground to MG Bus Station.
const GREEN_EDGES: &[(&str, &str, u32, u32)] = &[
    ("Parade Ground", "Secunderabad West", 1400, 3),
    ("Secunderabad West", "Gandhi Hospital", 1300, 2),
    ("Gandhi Hospital", "Musheerabad", 1100, 2),
    ("Musheerabad", "RTC X Roads", 1200, 2),
    ("RTC X Roads", "Chikkadpally", 1000, 2),
    ("Chikkadpally", "Narayanguda", 1100, 2),
    ("Narayanguda", "Sultan Bazar", 1300, 2),
    ("Sultan Bazar", "MG Bus Station", 1100, 2),
];

/// Build the metro network graph from the static edge tables.
pub fn hyderabad() -> StationGraph {
    let mut graph = StationGraph::new();

    for &(from, to, distance_m, time_min) in RED_EDGES
        .iter()
        .chain(BLUE_EDGES.iter())
        .chain(GREEN_EDGES.iter())
    {
        graph.add_edge(from, to, distance_m, time_min);
    }

    debug!(stations = graph.len(), "built metro network graph");
    graph
}

/// Build the canonical station → line lookup.
///
/// Interchange stations resolve to one line: later inserts win, so the
/// table order below fixes Parade Ground to Blue, and Ameerpet and
/// MG Bus Station to Red.
pub fn lines() -> LineMap {
    let mut lines = LineMap::new();

    for (table, line) in [
        (GREEN_EDGES, Line::Green),
        (BLUE_EDGES, Line::Blue),
        (RED_EDGES, Line::Red),
    ] {
        for &(from, to, _, _) in table {
            lines.insert(from, line);
            lines.insert(to, line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_count() {
        let graph = hyderabad();
        // 27 Red + 23 Blue + 9 Green, minus the 3 shared interchanges.
        assert_eq!(graph.len(), 56);
    }

    #[test]
    fn termini_are_present() {
        let graph = hyderabad();
        for terminus in [
            "Miyapur",
            "LB Nagar",
            "Nagole",
            "Raidurg",
            "Parade Ground",
            "MG Bus Station",
        ] {
            assert!(graph.has_station(terminus), "missing {terminus}");
        }
    }

    #[test]
    fn every_station_has_a_neighbor() {
        let graph = hyderabad();
        for station in graph.stations() {
            assert!(
                !graph.neighbors(station).is_empty(),
                "{station} is isolated"
            );
        }
    }

    #[test]
    fn interchanges_connect_lines() {
        let graph = hyderabad();

        let ameerpet: Vec<&str> = graph
            .neighbors("Ameerpet")
            .iter()
            .map(|e| e.to.as_str())
            .collect();
        // Red neighbors plus Blue neighbors.
        assert!(ameerpet.contains(&"S.R. Nagar"));
        assert!(ameerpet.contains(&"Punjagutta"));
        assert!(ameerpet.contains(&"Begumpet"));
        assert!(ameerpet.contains(&"Madhura Nagar"));
    }

    #[test]
    fn line_lookup_is_total_over_the_graph() {
        let graph = hyderabad();
        let lines = lines();

        for station in graph.stations() {
            assert!(lines.get(station).is_some(), "{station} has no line");
        }
    }

    #[test]
    fn interchange_canonical_lines() {
        let lines = lines();
        assert_eq!(lines.get("Ameerpet"), Some(Line::Red));
        assert_eq!(lines.get("MG Bus Station"), Some(Line::Red));
        assert_eq!(lines.get("Parade Ground"), Some(Line::Blue));
    }

    #[test]
    fn non_interchange_lines() {
        let lines = lines();
        assert_eq!(lines.get("Miyapur"), Some(Line::Red));
        assert_eq!(lines.get("Hitec City"), Some(Line::Blue));
        assert_eq!(lines.get("Sultan Bazar"), Some(Line::Green));
    }
}
