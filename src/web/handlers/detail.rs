//! Resource detail page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::domain::entities::Resource;
use crate::domain::listing::style_for;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "resource_detail.html")]
pub struct ResourceDetailTemplate {
    pub title: String,
    pub icon: &'static str,
    pub accent: &'static str,
    pub category_title: Option<String>,
    pub region_label: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub socials: Option<String>,
    pub services: Vec<String>,
    pub eligibility: Option<String>,
    pub featured_image_url: Option<String>,
    pub coordinates: Option<String>,
    pub map_url: Option<String>,
}

impl From<Resource> for ResourceDetailTemplate {
    fn from(resource: Resource) -> Self {
        let style = style_for(resource.category_slug(), resource.category_title());
        let point = resource.coordinates();
        let category_title = resource.category_title().map(str::to_owned);
        let region_label = resource.region.as_ref().map(|r| match &r.pincode {
            Some(pincode) if !pincode.is_empty() => format!("{} ({})", r.title, pincode),
            _ => r.title.clone(),
        });
        let contact = resource.contact.unwrap_or_default();

        Self {
            title: resource.title,
            icon: style.icon,
            accent: style.accent,
            category_title,
            region_label,
            address: resource.address,
            description: resource.description,
            phone: contact.phone,
            email: contact.email,
            website: contact.website,
            socials: contact.socials,
            services: resource.services,
            eligibility: resource.eligibility,
            featured_image_url: resource.featured_image_url,
            coordinates: point.map(|(lat, lng)| format!("{lat:.5}, {lng:.5}")),
            map_url: point.map(|(lat, lng)| {
                format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=17/{lat}/{lng}")
            }),
        }
    }
}

/// Renders one approved resource.
///
/// # Endpoint
///
/// `GET /resources/{slug}`
///
/// # Errors
///
/// Returns 404 if no approved resource has this slug.
pub async fn resource_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ResourceDetailTemplate, AppError> {
    let resource = state.directory.resource_by_slug(&slug).await?;
    Ok(resource.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CategoryRef, GeoPoint, RegionRef};

    #[test]
    fn test_detail_view_from_resource() {
        let mut resource = Resource::new("resource-mj", "M.J. Library", "m-j-library");
        resource.category = Some(CategoryRef {
            id: "category-library".to_string(),
            title: "Library".to_string(),
            slug: "library".to_string(),
        });
        resource.region = Some(RegionRef {
            id: "region-ellisbridge".to_string(),
            title: "Ellisbridge".to_string(),
            pincode: Some("380006".to_string()),
        });
        resource.location = Some(GeoPoint::new(23.02, 72.57));

        let page = ResourceDetailTemplate::from(resource);
        assert_eq!(page.icon, "📚");
        assert_eq!(page.region_label.as_deref(), Some("Ellisbridge (380006)"));
        assert_eq!(page.coordinates.as_deref(), Some("23.02000, 72.57000"));
        assert!(page.phone.is_none());
    }
}
