mod types;

pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;

// Main folder format: <prefix> Season <N>
// Only counts when the match spans the whole name.
static MAIN_FOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.*) Season [0-9]{1,2}").unwrap());

// Episode format: <prefix>S01E02 or <prefix>Season 1 Episode 2
// Anything after the match is dropped from the new name.
static EPISODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(.*)(((S|s)[0-9]{1,2}(E|e)[0-9]{1,2})|(Season(.+)[0-9]{1,2}(.+)Episode(.+)[0-9]{1,2}))",
    )
    .unwrap()
});

/// Classify a directory basename as a main folder, an episode folder or neither
pub fn classify(dir_name: &str) -> Classification {
    let name = dir_name.trim();

    // Main folder wins even when the episode pattern would also match
    if let Some(m) = MAIN_FOLDER_REGEX.find(name) {
        if m.end() - m.start() == name.len() {
            return Classification::MainFolder {
                key: name.to_lowercase(),
            };
        }
    }

    match EPISODE_REGEX.find(name) {
        Some(m) => Classification::Episode {
            matched: name[m.start()..m.end()].to_string(),
        },
        None => Classification::NoMatch,
    }
}

/// Hidden directories start with a period
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
