//! URL slug derivation from resource titles.

use regex::Regex;
use std::sync::LazyLock;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// Derives a URL slug from a title.
///
/// Lower-cases the title, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen and strips leading/trailing hyphens.
/// Titles without ASCII letters or digits produce an empty slug.
///
/// # Examples
///
/// ```
/// use civic_directory::utils::slug::slugify;
///
/// assert_eq!(slugify("Food Bank / NGO"), "food-bank-ngo");
/// assert_eq!(slugify("  M.J. Library  "), "m-j-library");
/// ```
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Library"), "library");
        assert_eq!(slugify("Park & Library"), "park-library");
        assert_eq!(slugify("Free Clinic / OPD"), "free-clinic-opd");
    }

    #[test]
    fn test_slugify_trims_hyphens() {
        assert_eq!(slugify("--St. Xavier's Society!"), "st-xavier-s-society");
    }

    #[test]
    fn test_slugify_non_ascii() {
        assert_eq!(slugify("અમદાવાદ"), "");
        assert_eq!(slugify("Café 24"), "caf-24");
    }
}
