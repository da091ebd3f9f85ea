//! Filter engine reducing the resource collection to the visible subset.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Resource;

/// Current filter selections of a listing view.
///
/// An empty string means "no constraint" for every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub category_slug: String,
    #[serde(default)]
    pub region_id: String,
}

impl FilterCriteria {
    pub fn new(
        search_text: impl Into<String>,
        category_slug: impl Into<String>,
        region_id: impl Into<String>,
    ) -> Self {
        Self {
            search_text: search_text.into(),
            category_slug: category_slug.into(),
            region_id: region_id.into(),
        }
    }

    /// Criteria pre-populated from the hosting page's query parameters.
    pub fn from_initial(search: Option<&str>, category: Option<&str>) -> Self {
        Self::new(search.unwrap_or_default(), category.unwrap_or_default(), "")
    }

    /// Returns true if any filter field is set.
    ///
    /// Drives the visibility of the "Clear filters" action, so a search made
    /// only of whitespace still counts.
    pub fn has_filters(&self) -> bool {
        !self.search_text.is_empty() || !self.category_slug.is_empty() || !self.region_id.is_empty()
    }

    /// Resets every field to "no constraint".
    pub fn clear(&mut self) {
        self.search_text.clear();
        self.category_slug.clear();
        self.region_id.clear();
    }

    /// Tests a single record against all three filters.
    pub fn matches(&self, resource: &Resource) -> bool {
        if !self.category_slug.is_empty()
            && resource.category_slug() != Some(self.category_slug.as_str())
        {
            return false;
        }

        if !self.region_id.is_empty() && resource.region_id() != Some(self.region_id.as_str()) {
            return false;
        }

        if self.search_text.trim().is_empty() {
            return true;
        }

        let needle = self.search_text.to_lowercase();
        let contains = |field: Option<&str>| {
            field.is_some_and(|value| value.to_lowercase().contains(&needle))
        };

        contains(Some(resource.title.as_str()))
            || contains(resource.address.as_deref())
            || contains(resource.region_title())
            || contains(resource.category_title())
    }
}

/// Returns the resources matching `criteria`, in input order.
///
/// The input slice is never modified; an empty input yields an empty result.
pub fn filter_resources(resources: &[Resource], criteria: &FilterCriteria) -> Vec<Resource> {
    resources
        .iter()
        .filter(|resource| criteria.matches(resource))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CategoryRef, RegionRef};

    fn resource(
        id: &str,
        title: &str,
        category: Option<(&str, &str)>,
        region: Option<(&str, &str)>,
    ) -> Resource {
        let mut r = Resource::new(id, title, id);
        r.category = category.map(|(slug, title)| CategoryRef {
            id: format!("category-{slug}"),
            title: title.to_string(),
            slug: slug.to_string(),
        });
        r.region = region.map(|(id, title)| RegionRef {
            id: id.to_string(),
            title: title.to_string(),
            pincode: None,
        });
        r
    }

    fn sample() -> Vec<Resource> {
        let mut library = resource(
            "r1",
            "M.J. Library",
            Some(("library", "Library")),
            Some(("region-ellisbridge", "Ellisbridge")),
        );
        library.address = Some("Ellisbridge, Ahmedabad".to_string());

        vec![
            library,
            resource(
                "r2",
                "Civil Hospital OPD",
                Some(("clinic", "Free Clinic / OPD")),
                Some(("region-asarwa", "Asarwa")),
            ),
            resource("r3", "St. Xavier's Society", None, None),
            resource(
                "r4",
                "Akshaya Patra Kitchen",
                Some(("food-bank", "Food Bank & NGO")),
                Some(("region-ellisbridge", "Ellisbridge")),
            ),
        ]
    }

    fn ids(resources: &[Resource]) -> Vec<&str> {
        resources.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_everything() {
        let all = sample();
        let filtered = filter_resources(&all, &FilterCriteria::default());
        assert_eq!(filtered, all);
    }

    #[test]
    fn test_category_filter_is_exact_and_case_sensitive() {
        let all = sample();

        let filtered = filter_resources(&all, &FilterCriteria::new("", "clinic", ""));
        assert_eq!(ids(&filtered), vec!["r2"]);

        let filtered = filter_resources(&all, &FilterCriteria::new("", "Clinic", ""));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_category_filter_excludes_uncategorized() {
        let all = sample();
        let filtered = filter_resources(&all, &FilterCriteria::new("", "library", ""));
        assert_eq!(ids(&filtered), vec!["r1"]);
    }

    #[test]
    fn test_region_filter() {
        let all = sample();
        let filtered = filter_resources(&all, &FilterCriteria::new("", "", "region-ellisbridge"));
        assert_eq!(ids(&filtered), vec!["r1", "r4"]);
    }

    #[test]
    fn test_search_matches_any_field_case_insensitively() {
        let all = sample();

        let search = |text: &str| filter_resources(&all, &FilterCriteria::new(text, "", ""));

        // title
        assert_eq!(ids(&search("LIBRARY")), vec!["r1"]);
        // region title
        assert_eq!(ids(&search("asarwa")), vec!["r2"]);
        // category title
        assert_eq!(ids(&search("ngo")), vec!["r4"]);
        // address
        assert_eq!(ids(&search("ahmedabad")), vec!["r1"]);
    }

    #[test]
    fn test_whitespace_search_is_ignored() {
        let all = sample();
        let criteria = FilterCriteria::new("   ", "", "");

        assert_eq!(filter_resources(&all, &criteria).len(), all.len());
        assert!(criteria.has_filters());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let all = sample();
        let criteria = FilterCriteria::new("kitchen", "food-bank", "region-asarwa");
        assert!(filter_resources(&all, &criteria).is_empty());

        let criteria = FilterCriteria::new("kitchen", "food-bank", "region-ellisbridge");
        assert_eq!(ids(&filter_resources(&all, &criteria)), vec!["r4"]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(filter_resources(&[], &FilterCriteria::new("x", "y", "z")).is_empty());
    }

    #[test]
    fn test_from_initial_and_clear() {
        let mut criteria = FilterCriteria::from_initial(Some("clinic"), Some("free-clinic"));
        assert_eq!(criteria.search_text, "clinic");
        assert_eq!(criteria.category_slug, "free-clinic");
        assert!(criteria.region_id.is_empty());

        criteria.clear();
        assert!(!criteria.has_filters());
    }
}
