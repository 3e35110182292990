//! Classification of raw search-box input into a typed lookup intent.
//!
//! One input box serves three backend query parameters: the user can type a
//! point name, a point ID fragment, or an `x,y` coordinate pair, and the
//! classifier decides which one was meant without an explicit mode switch.

/// What a non-blank search string is asking for.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchIntent {
    /// An `x,y` coordinate pair, both halves parsed as floats.
    Coordinates { x: f64, y: f64 },
    /// A fragment of a point name.
    Name(String),
    /// A fragment of a point ID.
    Id(String),
}

/// Classify a raw search string into a [`SearchIntent`].
///
/// Returns `None` for blank or whitespace-only input. Any other input maps to
/// exactly one variant:
///
/// - digits and a comma but no letters → try to read it as `x,y` coordinates
///   (exactly two comma-separated parts, both valid floats);
/// - letters but no digits → name fragment;
/// - letters and digits → ID fragment (a comma is irrelevant once a letter
///   is present, so `"12,AB"` is an ID fragment);
/// - anything else, including a failed coordinate parse like `"12.5,"` or
///   `"1,2,3"` → name fragment.
///
/// Coordinate detection runs first because digits plus a comma with no
/// letters is the most specific signal; the remaining rules disambiguate by
/// letter/digit presence.
pub fn classify(raw: &str) -> Option<SearchIntent> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let has_letters = trimmed.chars().any(|c| c.is_ascii_alphabetic());
    let has_digits = trimmed.chars().any(|c| c.is_ascii_digit());
    let has_comma = trimmed.contains(',');

    if !has_letters && has_digits && has_comma {
        if let Some(intent) = parse_coordinates(trimmed) {
            return Some(intent);
        }
    }

    if has_letters && !has_digits {
        return Some(SearchIntent::Name(trimmed.to_string()));
    }

    if has_letters && has_digits {
        return Some(SearchIntent::Id(trimmed.to_string()));
    }

    // Unclear input (bare commas, stray punctuation, failed coordinate
    // parses) defaults to a name search.
    Some(SearchIntent::Name(trimmed.to_string()))
}

/// Try to read `trimmed` as exactly two comma-separated floats.
fn parse_coordinates(trimmed: &str) -> Option<SearchIntent> {
    let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return None;
    }
    let x: f64 = parts[0].parse().ok()?;
    let y: f64 = parts[1].parse().ok()?;
    Some(SearchIntent::Coordinates { x, y })
}
