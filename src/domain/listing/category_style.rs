//! Presentation style for a resource category.
//!
//! Styles are picked by an ordered rule table evaluated top to bottom: exact
//! slug, then slug keywords, then title keywords, with a fixed fallback. The
//! keyword lists are a starting vocabulary; categories are free-form in the
//! store.

use serde::Serialize;

/// Icon and accent colour of a category card or pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub key: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

const fn style(key: &'static str, icon: &'static str, accent: &'static str) -> CategoryStyle {
    CategoryStyle { key, icon, accent }
}

const FOOD: CategoryStyle = style("food-bank", "🍱", "#fb923c");
const CLINIC: CategoryStyle = style("clinic", "🏥", "#f87171");
const GYM: CategoryStyle = style("gym", "💪", "#3b82f6");
const PRINT: CategoryStyle = style("xerox-shop", "🖨️", "#a855f7");
const PLAYGROUND: CategoryStyle = style("playground", "🌳", "#22c55e");
const LIBRARY: CategoryStyle = style("library", "📚", "#0d9488");
const MENTAL_HEALTH: CategoryStyle = style("mental-health", "🧠", "#f472b6");
const SHELTER: CategoryStyle = style("shelter", "🏠", "#facc15");
const LEGAL: CategoryStyle = style("legal", "⚖️", "#64748b");
const EDUCATION: CategoryStyle = style("education", "🎓", "#6366f1");

/// Fallback when no rule matches.
pub const DEFAULT_STYLE: CategoryStyle = style("default", "📍", "#14b8a6");

#[derive(Debug, Clone, Copy)]
enum Matcher {
    SlugEquals(&'static [&'static str]),
    SlugContains(&'static [&'static str]),
    TitleContains(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, slug: &str, title_lower: &str) -> bool {
        match self {
            Self::SlugEquals(slugs) => !slug.is_empty() && slugs.contains(&slug),
            Self::SlugContains(words) => !slug.is_empty() && words.iter().any(|w| slug.contains(w)),
            Self::TitleContains(words) => {
                !title_lower.is_empty() && words.iter().any(|w| title_lower.contains(w))
            }
        }
    }
}

const RULES: &[(Matcher, CategoryStyle)] = &[
    (Matcher::SlugEquals(&["food-bank", "food-bank-ngo"]), FOOD),
    (Matcher::SlugEquals(&["clinic", "free-clinic"]), CLINIC),
    (Matcher::SlugEquals(&["gym", "community-gym"]), GYM),
    (Matcher::SlugEquals(&["xerox-shop"]), PRINT),
    (Matcher::SlugEquals(&["playground"]), PLAYGROUND),
    (Matcher::SlugEquals(&["library"]), LIBRARY),
    (Matcher::SlugEquals(&["mental-health"]), MENTAL_HEALTH),
    (Matcher::SlugEquals(&["shelter"]), SHELTER),
    (Matcher::SlugEquals(&["legal"]), LEGAL),
    (Matcher::SlugEquals(&["education"]), EDUCATION),
    (Matcher::SlugContains(&["food", "bank", "ration"]), FOOD),
    (Matcher::SlugContains(&["clinic", "medical", "opd"]), CLINIC),
    (Matcher::SlugContains(&["gym", "fitness", "sport"]), GYM),
    (Matcher::SlugContains(&["xerox", "print", "copy"]), PRINT),
    (Matcher::SlugContains(&["park", "play", "garden"]), PLAYGROUND),
    (Matcher::SlugContains(&["library", "book"]), LIBRARY),
    (Matcher::SlugContains(&["mental", "counsel"]), MENTAL_HEALTH),
    (Matcher::SlugContains(&["shelter", "housing"]), SHELTER),
    (Matcher::SlugContains(&["legal", "law"]), LEGAL),
    (Matcher::SlugContains(&["edu", "school"]), EDUCATION),
    (Matcher::TitleContains(&["food", "bank", "ration", "kitchen"]), FOOD),
    (Matcher::TitleContains(&["clinic", "medical", "hospital", "opd"]), CLINIC),
    (Matcher::TitleContains(&["gym", "fitness", "sport", "yoga"]), GYM),
    (Matcher::TitleContains(&["xerox", "print", "copy"]), PRINT),
    (Matcher::TitleContains(&["park", "playground", "garden"]), PLAYGROUND),
    (Matcher::TitleContains(&["library", "book", "reading"]), LIBRARY),
    (Matcher::TitleContains(&["mental", "counsel", "therapy"]), MENTAL_HEALTH),
    (Matcher::TitleContains(&["shelter", "housing"]), SHELTER),
    (Matcher::TitleContains(&["legal", "law"]), LEGAL),
    (Matcher::TitleContains(&["school", "education", "tutor"]), EDUCATION),
];

/// Picks the style for a category slug and title; either may be absent.
pub fn style_for(slug: Option<&str>, title: Option<&str>) -> CategoryStyle {
    let slug = slug.unwrap_or_default();
    let title = title.unwrap_or_default().to_lowercase();

    RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(slug, &title))
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}
