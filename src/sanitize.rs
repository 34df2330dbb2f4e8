/// Bullet that prefixes the entries of a profile listing.
const BULLET: &str = "- ";

/// sanitize_lines
///
/// Splits raw process output into trimmed, non-empty lines and removes the
/// leading bullet from each of them.
pub fn sanitize_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix(BULLET).unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_lines() {
        let raw = ["  - foo  ", "", "   ", "bar"].join("\n");
        assert_eq!(sanitize_lines(&raw), vec!["foo", "bar"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sanitize_lines("").is_empty());
        assert!(sanitize_lines("\n \r\n\t\n").is_empty());
    }

    #[test]
    fn test_keeps_order_and_inner_dashes() {
        let raw = "- a - b\r\n-c\n  - - d\n";
        assert_eq!(sanitize_lines(raw), vec!["a - b", "-c", "- d"]);
    }
}
