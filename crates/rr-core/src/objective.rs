//! The quantity a shortest-path search minimizes.

/// Which edge weight a search relaxes on.
///
/// | Variant    | Edge cost             | Unit of `Route::total_cost` |
/// |------------|-----------------------|-----------------------------|
/// | `Distance` | `distance`            | miles                       |
/// | `Time`     | `distance / speed`    | hours                       |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Minimize total road length.
    Distance,
    /// Minimize total travel time at each segment's posted speed.
    Time,
}

impl Objective {
    /// Lower-case label, used as a CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            Objective::Distance => "distance",
            Objective::Time     => "time",
        }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
