use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

// Tokens are separated by single periods or ASCII whitespace characters
static TOKEN_SPLIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\.|[\t\n\f\r ])").unwrap());

// Compact season/episode code anywhere in a token: S04E15, s1e2
static SEASON_EPISODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(S|s)[0-9]{1,2}(E|e)[0-9]{1,2}").unwrap());

// Numeric runs of at most two digits
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{1,2}").unwrap());

/// Result of building a normalized name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltName {
    pub name: String,
    /// Name of the season folder this episode belongs to, before lowercasing.
    /// Only known when a compact code such as S04E15 was expanded.
    pub main_folder: Option<String>,
}

/// Split a directory name on periods and whitespace
pub fn split_tokens(name: &str) -> Vec<&str> {
    TOKEN_SPLIT_REGEX.split(name).collect()
}

/// Build the normalized name from a token stream.
///
/// Runs of single-character tokens are joined into acronyms ("S.H.I.E.L.D."),
/// a lone letter stays bare, and a compact season/episode token is expanded
/// to "Season N Episode M". Returns `None` when there is nothing to rename or
/// the season/episode token cannot be parsed.
pub fn build_name(tokens: &[&str]) -> Option<BuiltName> {
    let mut acronym = String::new();
    let mut output = String::new();
    let mut main_folder = None;

    for &token in tokens {
        if token.is_empty() || token == " " {
            continue;
        }

        if token.chars().count() == 1 {
            acronym.push_str(token);
            acronym.push('.');
            continue;
        }

        if !acronym.is_empty() {
            flush_acronym(&mut acronym, &mut output);
        }

        let expanded;
        let word = if SEASON_EPISODE_REGEX.is_match(token) {
            let (season, episode) = parse_season_episode(token)?;
            main_folder = Some(format!("{}Season {}", output, season));
            expanded = format!("Season {} Episode {}", season, episode);
            expanded.as_str()
        } else {
            token
        };

        trace!(token = %word, "Split");
        output.push_str(word);
        output.push(' ');
    }

    // Name ends with an acronym
    if !acronym.is_empty() {
        flush_acronym(&mut acronym, &mut output);
    }

    output.pop();

    if output.is_empty() {
        return None;
    }

    Some(BuiltName {
        name: output,
        main_folder,
    })
}

/// Append the pending acronym to the output and reset it.
/// A single letter is not an acronym and loses its period.
fn flush_acronym(acronym: &mut String, output: &mut String) {
    if acronym.chars().count() == 2 && acronym.ends_with('.') {
        acronym.pop();
    }

    trace!(acronym = %acronym, "Split");
    output.push_str(acronym);
    output.push(' ');
    acronym.clear();
}

/// Extract the season and episode numbers from a token like "S04E15".
///
/// The token must hold exactly two numeric runs; multi-episode codes such as
/// "S01E02E03" or suffixed ones such as "S01E02x264" are rejected.
pub fn parse_season_episode(token: &str) -> Option<(String, String)> {
    let numbers: Vec<&str> = NUMBER_REGEX.find_iter(token).map(|m| m.as_str()).collect();

    match numbers.as_slice() {
        [season, episode] => Some((
            strip_zero(season).to_string(),
            strip_zero(episode).to_string(),
        )),
        _ => None,
    }
}

/// Drop a single leading zero: "04" -> "4", "00" -> "0", "10" -> "10"
pub fn strip_zero(number: &str) -> &str {
    if number.len() > 1 && number.starts_with('0') {
        &number[1..]
    } else {
        number
    }
}
