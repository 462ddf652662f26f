//! Size-annotation parser.

/// Parse a `"<number> <unit>"` size annotation into a byte count.
///
/// Unknown units and malformed numbers degrade to 0 with a diagnostic;
/// the annotation is uncontrolled input and must never fail the parse.
/// Fractional values are supported and the result truncates to whole
/// bytes. Whitespace parts beyond the first two are ignored.
pub fn parse_size(text: &str) -> u64 {
    let mut parts = text.trim().split_whitespace();
    let (Some(number), Some(unit)) = (parts.next(), parts.next()) else {
        return 0;
    };

    let value: f64 = match number.parse() {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!("failed to parse size number {:?}: {}", number, error);
            return 0;
        }
    };

    match unit.to_ascii_lowercase().as_str() {
        "gb" => (value * 1e9) as u64,
        "mb" => (value * 1e6) as u64,
        _ => {
            tracing::warn!("unrecognized size unit {:?} in {:?}", unit, text);
            0
        }
    }
}
