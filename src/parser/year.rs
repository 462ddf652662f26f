//! Release-year matcher.

/// Scan tokens right to left for the first plausible year.
///
/// Right-to-left scanning prefers a trailing release year over a year
/// embedded in the title, so "2036 Origin Unknown 2018" yields 2018.
pub fn find_year(tokens: &[&str]) -> Option<(i32, usize)> {
    tokens
        .iter()
        .enumerate()
        .rev()
        .find_map(|(index, token)| try_parse_year(token).map(|year| (year, index)))
}

/// A year token is exactly four bytes, starts with '1' or '2', and parses
/// fully as an integer. Anything else is skipped, never an error.
fn try_parse_year(token: &str) -> Option<i32> {
    if token.len() != 4 || !matches!(token.as_bytes()[0], b'1' | b'2') {
        return None;
    }
    token.parse().ok()
}
