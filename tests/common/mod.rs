#![allow(dead_code)]

use axum_test::TestServer;
use civic_directory::domain::entities::{
    Category, ContactInfo, DirectorySeed, GeoPoint, Region, ResourceDocument,
};
use civic_directory::domain::listing::MapViewport;
use civic_directory::infrastructure::cache::NullCache;
use civic_directory::infrastructure::persistence::MemoryResourceRepository;
use civic_directory::routes::router;
use civic_directory::state::AppState;
use std::sync::Arc;

pub fn document(
    id: &str,
    title: &str,
    category_id: &str,
    region_id: &str,
    location: Option<(f64, f64)>,
) -> ResourceDocument {
    ResourceDocument {
        id: id.to_string(),
        title: title.to_string(),
        slug: None,
        category_id: Some(category_id.to_string()),
        region_id: Some(region_id.to_string()),
        description: None,
        address: None,
        location: location.map(|(lat, lng)| GeoPoint::new(lat, lng)),
        contact: None,
        services: Vec::new(),
        eligibility: None,
        featured_image_url: None,
        approved: true,
        created_at: None,
    }
}

/// Six approved resources and one pending submission.
///
/// Titles sort as: Akshaya Patra Kitchen, Kalupur Night Shelter,
/// L.G. Hospital Free OPD, M.J. Library, Sewa Clinic, St. Xavier's Society.
pub fn fixture_seed() -> DirectorySeed {
    let mut library = document(
        "resource-mj-library",
        "M.J. Library",
        "category-library",
        "region-ellisbridge",
        Some((23.0226, 72.5715)),
    );
    library.address = Some("Ellisbridge, near Town Hall".to_string());
    library.contact = Some(ContactInfo {
        phone: Some("+91 79 2657 8400".to_string()),
        ..Default::default()
    });
    library.services = vec!["Reading hall".to_string()];

    let mut pending = document(
        "resource-pending-pantry",
        "Pending Pantry",
        "category-food-bank",
        "region-vastrapur",
        None,
    );
    pending.approved = false;

    DirectorySeed {
        categories: vec![
            Category::new("category-library", "Library", "library"),
            Category::new("category-clinic", "Free Clinic / OPD", "clinic"),
            Category::new("category-food-bank", "Food Bank & NGO", "food-bank"),
            Category::new("category-shelter", "Night Shelter", "night-shelter"),
            Category::new("category-education", "Education", "education"),
        ],
        regions: vec![
            Region::new("region-ellisbridge", "Ellisbridge", Some("380006".to_string())),
            Region::new("region-maninagar", "Maninagar", Some("380008".to_string())),
            Region::new("region-vastrapur", "Vastrapur", None),
            Region::new("region-kalupur", "Kalupur", None),
        ],
        resources: vec![
            library,
            document(
                "resource-akshaya-patra",
                "Akshaya Patra Kitchen",
                "category-food-bank",
                "region-vastrapur",
                Some((23.0395, 72.5301)),
            ),
            document(
                "resource-lg-opd",
                "L.G. Hospital Free OPD",
                "category-clinic",
                "region-maninagar",
                Some((22.9977, 72.6024)),
            ),
            document(
                "resource-sewa-clinic",
                "Sewa Clinic",
                "category-clinic",
                "region-maninagar",
                None,
            ),
            document(
                "resource-kalupur-shelter",
                "Kalupur Night Shelter",
                "category-shelter",
                "region-kalupur",
                None,
            ),
            document(
                "resource-st-xaviers",
                "St. Xavier's Society",
                "category-education",
                "region-ellisbridge",
                Some((23.0330, 72.5500)),
            ),
            pending,
        ],
    }
}

pub fn create_test_state(seed: DirectorySeed) -> AppState {
    let repository = Arc::new(MemoryResourceRepository::from_seed(seed));
    AppState::new(
        repository,
        Arc::new(NullCache::new()),
        MapViewport::default(),
        60,
    )
}

/// Full router without rate limits over the fixture seed.
pub fn make_server() -> TestServer {
    make_server_with(fixture_seed())
}

pub fn make_server_with(seed: DirectorySeed) -> TestServer {
    let app = router(create_test_state(seed), false);
    TestServer::new(app).unwrap()
}
