use crate::error::ParseError;

/// Unit suffixes understood in profiling output, with their factor to
/// microseconds. `us` and `ms` come before `s` since both end in it.
const UNITS: [(&str, u64); 3] = [("us", 1), ("ms", 1_000), ("s", 1_000_000)];

/// parse_micros
///
/// Converts a literal such as `200us`, `5ms` or `2s` into microseconds.
pub fn parse_micros(literal: &str) -> Result<u64, ParseError> {
    let unexpected = || ParseError::UnexpectedFormat(literal.to_string());

    let (value, factor) = UNITS
        .iter()
        .find_map(|(suffix, factor)| literal.strip_suffix(suffix).map(|value| (value, *factor)))
        .ok_or_else(unexpected)?;

    // u64::from_str accepts a leading '+'
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unexpected());
    }

    value
        .parse::<u64>()
        .ok()
        .and_then(|value| value.checked_mul(factor))
        .ok_or_else(unexpected)
}
