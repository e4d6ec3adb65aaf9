use std::fmt;

/// Which best-first search to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Uniform-cost search, ordered by accumulated cost.
    #[default]
    Ucs,
    /// A*, ordered by accumulated cost plus the Chebyshev estimate.
    AStar,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Ucs => "ucs",
            Algorithm::AStar => "astar",
        }
    }
}

impl From<&str> for Algorithm {
    /// Unknown names fall back to [`Algorithm::Ucs`]. The serde
    /// representation is stricter and rejects them.
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Algorithm::AStar,
            _ => Algorithm::Ucs,
        }
    }
}

impl From<String> for Algorithm {
    fn from(s: String) -> Self {
        Algorithm::from(s.as_str())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
