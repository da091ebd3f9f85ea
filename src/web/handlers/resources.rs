//! Server-rendered listing page.
//!
//! The page is rendered from one [`ListingView`]: query parameters become
//! filter criteria, `selected` replays a marker click and `view=map` flips the
//! narrow-screen toggle. The clicked id is written back into the filter form,
//! the clear link and the toggle form, so it survives until a filter change
//! hides it. Everything that needs JavaScript (the map itself, hover
//! highlighting) is driven from the embedded marker JSON.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::json;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::api::dto::listing::NO_LOCATION_NOTICE;
use crate::domain::listing::{
    FilterCriteria, ListingEvent, ListingView, MapViewport, ViewEffect, style_for,
};
use crate::error::AppError;
use crate::state::AppState;

/// Query parameters of `GET /resources`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ResourcesPageQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub search: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub region: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub selected: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub view: Option<String>,
}

pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub struct ResourceCard {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category_title: Option<String>,
    pub region_title: Option<String>,
    pub address: Option<String>,
    pub icon: &'static str,
    pub accent: &'static str,
    pub highlighted: bool,
}

pub struct MarkerButton {
    pub id: String,
    pub title: String,
    pub selected: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "resources.html")]
pub struct ResourcesTemplate {
    pub search: String,
    pub category: String,
    pub region: String,
    pub categories: Vec<SelectOption>,
    pub regions: Vec<SelectOption>,
    pub result_label: String,
    pub has_filters: bool,
    pub notice: Option<&'static str>,
    pub cards: Vec<ResourceCard>,
    pub markers: Vec<MarkerButton>,
    pub markers_json: String,
    pub viewport: MapViewport,
    pub show_map: bool,
    pub scroll_target: Option<String>,
    /// Clicked marker carried into every follow-up navigation.
    pub clicked_id: Option<String>,
}

/// Renders the split list/map page.
///
/// # Endpoint
///
/// `GET /resources?search=&category=&region=&selected=&view=`
///
/// # Errors
///
/// Returns 500 if the directory cannot be loaded.
pub async fn resources_page_handler(
    State(state): State<AppState>,
    Query(params): Query<ResourcesPageQuery>,
) -> Result<ResourcesTemplate, AppError> {
    let mut criteria =
        FilterCriteria::from_initial(params.search.as_deref(), params.category.as_deref());
    criteria.region_id = params.region.clone().unwrap_or_default();

    let mut view = ListingView::new(criteria);
    let ticket = view.begin_load();
    let snapshot = state.directory.snapshot().await?;
    view.apply_load(ticket, snapshot);

    let mut effects = Vec::new();
    if let Some(id) = params.selected {
        effects = view.dispatch(ListingEvent::MarkerClicked(id));
    }
    if params.view.as_deref() == Some("map") {
        view.dispatch(ListingEvent::ToggleMap);
    }

    render(&view, &effects, state.directory.viewport())
}

fn render(
    view: &ListingView,
    effects: &[ViewEffect],
    viewport: MapViewport,
) -> Result<ResourcesTemplate, AppError> {
    let criteria = view.criteria();

    let categories = view
        .categories()
        .iter()
        .map(|c| SelectOption {
            value: c.slug.clone(),
            label: c.title.clone(),
            selected: c.slug == criteria.category_slug,
        })
        .collect();
    let regions = view
        .regions()
        .iter()
        .map(|r| SelectOption {
            value: r.id.clone(),
            label: r.label(),
            selected: r.id == criteria.region_id,
        })
        .collect();

    let cards = view
        .filtered()
        .iter()
        .map(|r| {
            let style = style_for(r.category_slug(), r.category_title());
            ResourceCard {
                id: r.id.clone(),
                slug: r.slug.clone(),
                title: r.title.clone(),
                category_title: r.category_title().map(str::to_owned),
                region_title: r.region_title().map(str::to_owned),
                address: r.address.clone(),
                icon: style.icon,
                accent: style.accent,
                highlighted: view.is_highlighted(&r.id),
            }
        })
        .collect();

    let highlight = view.effective_highlight_id();
    let markers = view
        .markers()
        .iter()
        .map(|m| MarkerButton {
            id: m.id.clone(),
            title: m.title.clone(),
            selected: highlight == Some(m.id.as_str()),
        })
        .collect();

    let scroll_target = effects.iter().find_map(|effect| match effect {
        ViewEffect::ScrollIntoView { id, .. } => Some(id.clone()),
    });

    Ok(ResourcesTemplate {
        search: criteria.search_text.clone(),
        category: criteria.category_slug.clone(),
        region: criteria.region_id.clone(),
        categories,
        regions,
        result_label: view.result_label(),
        has_filters: view.has_filters(),
        notice: view.lacks_location_data().then_some(NO_LOCATION_NOTICE),
        cards,
        markers,
        markers_json: embed_json(view.markers())?,
        viewport,
        show_map: view.show_map(),
        scroll_target,
        clicked_id: view.selection().clicked_id().map(str::to_owned),
    })
}

/// Serializes `value` for a `<script type="application/json">` block.
fn embed_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    let raw = serde_json::to_string(value).map_err(|e| {
        AppError::internal("Failed to encode markers", json!({ "reason": e.to_string() }))
    })?;
    Ok(raw.replace('<', "\\u003c"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::MapMarker;

    #[test]
    fn test_embed_json_escapes_script_close() {
        let markers = vec![MapMarker {
            id: "r1".to_string(),
            title: "</script><b>".to_string(),
            latitude: 23.0,
            longitude: 72.5,
            category_title: None,
        }];

        let json = embed_json(markers.as_slice()).unwrap();
        assert!(!json.contains('<'));
        assert!(json.contains("\\u003c/script>"));
    }
}
