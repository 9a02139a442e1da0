//! Shared text helpers used by every template renderer.
//!
//! All optional-field handling funnels through these so the
//! default-substitution policy (absent == empty string) lives in one place
//! instead of being re-spelled inline in every section rule.

/// Trailing whitespace marker emitted on its own line before
/// `\end{document}`. Cosmetic, but downstream golden outputs depend on it
/// byte-for-byte.
pub const WHITESPACE: &str = "\\ ";

/// Treats `None` and `""` identically: both are absent.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Default-to-empty for positional macro arguments that must keep their slot.
pub fn or_empty(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

/// Section heading with its per-template default. An empty heading falls
/// back to the default just like a missing one.
pub fn heading_or<'a>(heading: Option<&'a str>, default: &'a str) -> &'a str {
    non_empty(heading).unwrap_or(default)
}

/// Joins the non-empty values in order with `sep`. Skips, never reorders,
/// never produces doubled separators.
pub fn join_non_empty(parts: &[Option<&str>], sep: &str) -> String {
    parts
        .iter()
        .filter_map(|part| non_empty(*part))
        .collect::<Vec<_>>()
        .join(sep)
}

/// The three-way date range rule shared by education, work and award rows.
///
/// Both dates → `"<start> <sep> <end>"`; start only → `"<start> <sep>
/// Present"`; end only → the end date alone; neither → empty.
pub fn date_range(start: Option<&str>, end: Option<&str>, sep: &str) -> String {
    match (non_empty(start), non_empty(end)) {
        (Some(start), Some(end)) => format!("{start} {sep} {end}"),
        (Some(start), None) => format!("{start} {sep} Present"),
        (None, Some(end)) => end.to_string(),
        (None, None) => String::new(),
    }
}

/// Splits a full name on the first single space into a first token and the
/// remainder. A one-token name yields an empty remainder; any extra interior
/// spaces stay in the remainder untouched.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.split_once(' ') {
        Some((first, rest)) => (first, rest),
        None => (name, ""),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── date_range ──────────────────────────────────────────────────────────

    #[test]
    fn test_date_range_both_dates() {
        assert_eq!(date_range(Some("2020"), Some("2022"), "-"), "2020 - 2022");
        assert_eq!(date_range(Some("2020"), Some("2022"), "–"), "2020 – 2022");
    }

    #[test]
    fn test_date_range_start_only_is_present() {
        assert_eq!(date_range(Some("2020"), None, "-"), "2020 - Present");
        assert_eq!(date_range(Some("2020"), Some(""), "-"), "2020 - Present");
    }

    #[test]
    fn test_date_range_end_only_stands_alone() {
        assert_eq!(date_range(None, Some("2022"), "-"), "2022");
    }

    #[test]
    fn test_date_range_neither_is_empty() {
        assert_eq!(date_range(None, None, "-"), "");
        assert_eq!(date_range(Some(""), Some(""), "-"), "");
    }

    // ── split_name ──────────────────────────────────────────────────────────

    #[test]
    fn test_split_name_two_tokens() {
        assert_eq!(split_name("Ada Lovelace"), ("Ada", "Lovelace"));
    }

    #[test]
    fn test_split_name_single_token() {
        assert_eq!(split_name("Prince"), ("Prince", ""));
    }

    #[test]
    fn test_split_name_keeps_extra_tokens_in_remainder() {
        assert_eq!(split_name("Ada King Lovelace"), ("Ada", "King Lovelace"));
    }

    // ── join_non_empty ──────────────────────────────────────────────────────

    #[test]
    fn test_join_skips_falsy_and_preserves_order() {
        let joined = join_non_empty(
            &[Some("a@b.com"), Some(""), None, Some("x.com")],
            " | ",
        );
        assert_eq!(joined, "a@b.com | x.com");
    }

    #[test]
    fn test_join_all_absent_is_empty() {
        assert_eq!(join_non_empty(&[None, Some("")], " | "), "");
    }

    // ── heading_or ──────────────────────────────────────────────────────────

    #[test]
    fn test_heading_defaults_on_missing_or_empty() {
        assert_eq!(heading_or(None, "Education"), "Education");
        assert_eq!(heading_or(Some(""), "Education"), "Education");
        assert_eq!(heading_or(Some("Studies"), "Education"), "Studies");
    }
}
