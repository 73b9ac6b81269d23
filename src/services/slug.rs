use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-z0-9äöüß]+").expect("NON_SLUG_CHARS is a valid regex pattern")
});

/// Lowercases the title and collapses every run of characters outside
/// `[a-z0-9äöüß]` into a single hyphen. An empty result falls back to "quiz".
pub fn slugify(title: &str) -> String {
    let lower = title.trim().to_lowercase();
    let slug = NON_SLUG_CHARS.replace_all(&lower, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        "quiz".to_string()
    } else {
        slug.to_string()
    }
}

/// Slug plus creation time in epoch milliseconds. Titles may repeat; the
/// timestamp suffix keeps ids distinct without a collision retry loop.
pub fn generate_quiz_id(title: &str) -> String {
    format!("{}-{}", slugify(title), Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic_title() {
        assert_eq!(slugify("Math Basics"), "math-basics");
    }

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("What?! -- A   Quiz"), "what-a-quiz");
    }

    #[test]
    fn test_slugify_keeps_german_letters() {
        assert_eq!(slugify("Größen & Maße"), "größen-maße");
    }

    #[test]
    fn test_slugify_trims_leading_and_trailing_hyphens() {
        assert_eq!(slugify("--hello--"), "hello");
    }

    #[test]
    fn test_slugify_empty_falls_back_to_default() {
        assert_eq!(slugify(""), "quiz");
        assert_eq!(slugify("!!!"), "quiz");
    }

    #[test]
    fn test_generate_quiz_id_has_slug_prefix_and_numeric_suffix() {
        let id = generate_quiz_id("Math Basics");
        let (prefix, suffix) = id.rsplit_once('-').expect("id should contain a hyphen");
        assert_eq!(prefix, "math-basics");
        assert!(suffix.parse::<i64>().is_ok());
    }
}
