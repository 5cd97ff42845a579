//! Unit tests for rr-loader.

#[cfg(test)]
mod helpers {
    /// The A/B/C network in the loader's headerless format.
    pub const ABC_CSV: &str = "\
A,First Ave,B,E,10,50\n\
B,Second Ave,C,S,5,25\n\
A,Expressway,C,SE,20,100\n\
";
}

#[cfg(test)]
mod records {
    use std::io::Cursor;

    use crate::{LoadOptions, LoaderError, collect_vertex_names, read_edge_records};

    #[test]
    fn parse_headerless_rows() {
        let recs = read_edge_records(Cursor::new(super::helpers::ABC_CSV), &LoadOptions::default()).unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].from, "A");
        assert_eq!(recs[0].street_name, "First Ave");
        assert_eq!(recs[0].to, "B");
        assert_eq!(recs[0].direction, "E");
        assert_eq!(recs[0].distance, 10.0);
        assert_eq!(recs[0].speed, 50.0);
        assert_eq!(recs[0].line, 1);
        assert_eq!(recs[2].line, 3);
    }

    #[test]
    fn fields_are_trimmed() {
        let csv = " A , Main St , B , N , 1.5 , 30 \n";
        let recs = read_edge_records(Cursor::new(csv), &LoadOptions::default()).unwrap();
        assert_eq!(recs[0].from, "A");
        assert_eq!(recs[0].street_name, "Main St");
        assert_eq!(recs[0].distance, 1.5);
    }

    #[test]
    fn header_row_and_custom_delimiter() {
        let csv = "from;street_name;to;direction;distance;speed\nA;x;B;E;1;10\n";
        let opts = LoadOptions { has_headers: true, delimiter: b';', ..LoadOptions::default() };
        let recs = read_edge_records(Cursor::new(csv), &opts).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].to, "B");
        assert_eq!(recs[0].line, 2);
    }

    #[test]
    fn bad_number_is_parse_error() {
        let csv = "A,x,B,E,far,10\n";
        let err = read_edge_records(Cursor::new(csv), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoaderError::Parse(_)), "{err}");
    }

    #[test]
    fn missing_column_is_parse_error() {
        let csv = "A,x,B,E,1,10\nA,x,B,E,1\n";
        let err = read_edge_records(Cursor::new(csv), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoaderError::Parse(_)), "{err}");
    }

    #[test]
    fn vertex_names_sorted_unique() {
        let csv = "C,x,A,E,1,10\nB,y,C,E,1,10\nC,z,D,E,1,10\n";
        let recs = read_edge_records(Cursor::new(csv), &LoadOptions::default()).unwrap();
        assert_eq!(collect_vertex_names(&recs, true), ["A", "B", "C", "D"]);
        assert_eq!(collect_vertex_names(&recs, false), ["B", "C"]);
    }

    #[test]
    fn empty_input() {
        let recs = read_edge_records(Cursor::new(""), &LoadOptions::default()).unwrap();
        assert!(recs.is_empty());
        assert!(collect_vertex_names(&recs, true).is_empty());
    }
}

#[cfg(test)]
mod network {
    use std::io::Cursor;

    use rr_core::SearchConfig;
    use rr_graph::{DualRouter, NetworkError, RoadNetwork};

    use crate::{EdgeRecord, LoadOptions, load_network_csv, load_network_reader, populate_network};

    fn record(from: &str, to: &str, distance: f64) -> EdgeRecord {
        EdgeRecord {
            from:        from.into(),
            street_name: format!("{from}-{to}"),
            to:          to.into(),
            direction:   "N".into(),
            distance,
            speed:       30.0,
            line:        0,
        }
    }

    #[test]
    fn loads_and_routes() {
        let (net, report) =
            load_network_reader(Cursor::new(super::helpers::ABC_CSV), &LoadOptions::default()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.added, 3);
        assert_eq!(net.vertex_count(), 3);
        assert_eq!(net.edge_count(), 3);

        let dual = DualRouter::new(SearchConfig::default()).find_paths(&net, "A", "C").unwrap();
        assert_eq!(dual.distance.len(), 2);
        assert_eq!(dual.time.len(), 1);
    }

    #[test]
    fn destination_only_names_are_routable() {
        let csv = "A,x,B,E,1,10\n";
        let (net, _) = load_network_reader(Cursor::new(csv), &LoadOptions::default()).unwrap();
        assert!(net.is_valid_point("B"));

        let opts = LoadOptions { include_destinations: false, ..LoadOptions::default() };
        let (net, report) = load_network_reader(Cursor::new(csv), &opts).unwrap();
        assert!(!net.is_valid_point("B"));
        // The edge is stored; it just leads nowhere known.
        assert_eq!(report.added, 1);
        assert_eq!(net.edge_count(), 1);
    }

    #[test]
    fn unknown_origin_skipped_rest_ingested() {
        let mut net = RoadNetwork::with_vertices(["A", "B", "C"]);
        let mut bad = record("Z", "A", 1.0);
        bad.line = 2;
        let records = vec![record("A", "B", 1.0), bad, record("B", "C", 1.0)];

        let report = populate_network(&mut net, &records);

        assert_eq!(report.added, 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
        assert_eq!(report.skipped[0].from, "Z");
        assert_eq!(
            report.skipped[0].reason,
            NetworkError::UnresolvedEdgeEndpoint { name: "Z".into() }
        );
        assert_eq!(net.vertex_count(), 3);
        assert_eq!(net.edge_count(), 2);
    }

    #[test]
    fn negative_distance_row_skipped() {
        let csv = "A,x,B,E,-3,10\nA,y,B,E,3,10\n";
        let (net, report) = load_network_reader(Cursor::new(csv), &LoadOptions::default()).unwrap();
        assert_eq!(report.added, 1);
        assert_eq!(report.skipped[0].line, 1);
        assert_eq!(report.skipped[0].street, "x");
        assert_eq!(net.edge_count(), 1);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("data.csv");
        std::fs::write(&path, super::helpers::ABC_CSV).unwrap();

        let (net, report) = load_network_csv(&path, &LoadOptions::default()).unwrap();
        assert!(report.is_clean());
        assert_eq!(net.edge_count(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_network_csv(&dir.path().join("absent.csv"), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, crate::LoaderError::Io(_)));
    }
}
