use regex::Regex;
use std::sync::LazyLock;

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_\s-]").expect("NON_SLUG_CHARS is a valid regex literal")
});

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUNS is a valid regex literal"));

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static HYPHEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("HYPHEN_RUNS is a valid regex literal"));

/// Derive a URL slug from a title.
///
/// Lowercases, drops anything that is not an ASCII word character,
/// whitespace or a hyphen, turns whitespace runs into single hyphens,
/// collapses hyphen runs and trims hyphens from both ends.
#[must_use]
pub fn slugify(input: &str) -> String {
    let lower = input.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lower, "");
    let hyphenated = WHITESPACE_RUNS.replace_all(stripped.trim(), "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    collapsed
        .trim_matches(|c: char| c == '-' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("Getting Started Guide"), "getting-started-guide");
        assert_eq!(slugify("API v2"), "api-v2");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("multiple---hyphens"), "multiple-hyphens");
        assert_eq!(slugify("- dash - wrapped -"), "dash-wrapped");
    }

    #[test]
    fn test_slugify_keeps_underscores() {
        assert_eq!(slugify("snake_case title"), "snake_case-title");
    }

    #[test]
    fn test_slugify_strips_non_ascii_and_symbols() {
        assert_eq!(slugify("Café & Co."), "caf-co");
        assert_eq!(slugify("100% Growth!"), "100-growth");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let once = slugify("Why We Build With Rust, Mostly");
        assert_eq!(slugify(&once), once);
    }
}
