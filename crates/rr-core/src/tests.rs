//! Unit tests for rr-core primitives.

#[cfg(test)]
mod ids {
    use crate::VertexId;

    #[test]
    fn index() {
        let id = VertexId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn ordering() {
        assert!(VertexId(0) < VertexId(1));
        assert!(VertexId(100) > VertexId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(VertexId::INVALID.0, u32::MAX);
        assert_eq!(VertexId::default(), VertexId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(VertexId(7).to_string(), "VertexId(7)");
    }
}

#[cfg(test)]
mod objective {
    use crate::Objective;

    #[test]
    fn labels() {
        assert_eq!(Objective::Distance.as_str(), "distance");
        assert_eq!(Objective::Time.to_string(), "time");
    }
}

#[cfg(test)]
mod config {
    use crate::SearchConfig;

    #[test]
    fn default_is_sequential_full_exploration() {
        let c = SearchConfig::default();
        assert!(!c.parallel);
        assert!(!c.stop_at_finish);
        assert_eq!(c, SearchConfig::sequential());
    }

    #[test]
    fn builders() {
        let c = SearchConfig::sequential()
            .with_parallel(true)
            .with_stop_at_finish(true);
        assert!(c.parallel);
        assert!(c.stop_at_finish);
    }
}
