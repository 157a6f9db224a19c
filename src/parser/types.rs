/// Outcome of classifying a single directory basename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A season container such as "Show Name Season 3"
    MainFolder {
        /// Lowercased, trimmed directory name
        key: String,
    },
    /// A folder carrying a season/episode code
    Episode {
        /// Trimmed name truncated at the end of the season/episode match
        matched: String,
    },
    /// Anything else, left untouched
    NoMatch,
}

impl Classification {
    pub fn kind(&self) -> &'static str {
        match self {
            Classification::MainFolder { .. } => "main folder",
            Classification::Episode { .. } => "episode",
            Classification::NoMatch => "no match",
        }
    }

    pub fn is_main_folder(&self) -> bool {
        matches!(self, Classification::MainFolder { .. })
    }

    pub fn is_episode(&self) -> bool {
        matches!(self, Classification::Episode { .. })
    }
}
