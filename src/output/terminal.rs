//! Terminal output utilities.

/// Format one classification result as `<address>\t<true|false>`.
///
/// The address is echoed exactly as given, malformed or not.
pub fn format_classification(raw: &str, is_relay: bool) -> String {
    format!("{raw}\t{is_relay}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_classification() {
        assert_eq!(
            format_classification("203.0.113.17", true),
            "203.0.113.17\ttrue"
        );
        assert_eq!(format_classification("not-an-ip", false), "not-an-ip\tfalse");
    }
}
