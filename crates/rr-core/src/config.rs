//! Search configuration.

/// Knobs for a routing query.  Both default to `false`, which reproduces the
/// plain sequential, full-exploration search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Run the distance and time searches on two Rayon tasks.
    ///
    /// Only honoured when `rr-graph` is built with the `parallel` feature;
    /// otherwise the searches run one after the other.
    pub parallel: bool,

    /// Stop a search as soon as the finish vertex is popped from the
    /// frontier instead of draining the whole reachable component.
    ///
    /// Both modes report the same optimal cost.  Full exploration is the
    /// default.
    pub stop_at_finish: bool,
}

impl SearchConfig {
    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_stop_at_finish(mut self, stop: bool) -> Self {
        self.stop_at_finish = stop;
        self
    }
}
