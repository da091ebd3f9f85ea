//! PostgreSQL implementation of the resource repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::sync::Arc;

use crate::domain::entities::{
    Category, CategoryRef, ContactInfo, DirectorySeed, DirectoryStats, GeoPoint, ImportSummary,
    NewResource, Region, RegionRef, Resource, ResourceDocument,
};
use crate::domain::repositories::{ResourceQuery, ResourceRepository};
use crate::error::AppError;
use crate::utils::slug::slugify;

const RESOURCE_SELECT: &str = r#"
    SELECT
        r.id, r.title, r.slug, r.description, r.address,
        r.latitude, r.longitude,
        r.phone, r.email, r.website, r.socials,
        r.services, r.eligibility, r.featured_image_url, r.approved, r.created_at,
        c.id AS category_id, c.title AS category_title, c.slug AS category_slug,
        g.id AS region_id, g.title AS region_title, g.pincode AS region_pincode
    FROM resources r
    LEFT JOIN categories c ON c.id = r.category_id
    LEFT JOIN regions g ON g.id = r.region_id
"#;

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: String,
    title: String,
    slug: String,
    icon_url: Option<String>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            icon_url: row.icon_url,
        }
    }
}

#[derive(Debug, FromRow)]
struct RegionRow {
    id: String,
    title: String,
    pincode: Option<String>,
}

impl From<RegionRow> for Region {
    fn from(row: RegionRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            pincode: row.pincode,
        }
    }
}

#[derive(Debug, FromRow)]
struct ResourceRow {
    id: String,
    title: String,
    slug: String,
    description: Option<String>,
    address: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    phone: Option<String>,
    email: Option<String>,
    website: Option<String>,
    socials: Option<String>,
    services: Vec<String>,
    eligibility: Option<String>,
    featured_image_url: Option<String>,
    approved: bool,
    created_at: DateTime<Utc>,
    category_id: Option<String>,
    category_title: Option<String>,
    category_slug: Option<String>,
    region_id: Option<String>,
    region_title: Option<String>,
    region_pincode: Option<String>,
}

impl From<ResourceRow> for Resource {
    fn from(row: ResourceRow) -> Self {
        let category = match (row.category_id, row.category_title, row.category_slug) {
            (Some(id), Some(title), Some(slug)) => Some(CategoryRef { id, title, slug }),
            _ => None,
        };
        let region = match (row.region_id, row.region_title) {
            (Some(id), Some(title)) => Some(RegionRef {
                id,
                title,
                pincode: row.region_pincode,
            }),
            _ => None,
        };
        let location = (row.latitude.is_some() || row.longitude.is_some()).then_some(GeoPoint {
            lat: row.latitude,
            lng: row.longitude,
        });
        let contact = ContactInfo {
            phone: row.phone,
            email: row.email,
            website: row.website,
            socials: row.socials,
        };

        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            category,
            region,
            description: row.description,
            address: row.address,
            location,
            contact: (!contact.is_empty()).then_some(contact),
            services: row.services,
            eligibility: row.eligibility,
            featured_image_url: row.featured_image_url,
            approved: row.approved,
            created_at: Some(row.created_at),
        }
    }
}

/// PostgreSQL repository for the resource directory.
///
/// All queries are bound parameters; category and region references are
/// resolved with left joins so a dangling id reads as "no category".
pub struct PgResourceRepository {
    pool: Arc<PgPool>,
}

impl PgResourceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn upsert_document(
        tx: &mut Transaction<'_, Postgres>,
        doc: &ResourceDocument,
    ) -> Result<(), sqlx::Error> {
        let slug = doc.slug.clone().unwrap_or_else(|| slugify(&doc.title));
        let location = doc.location.unwrap_or_default();
        let contact = doc.contact.clone().unwrap_or_default();

        sqlx::query(
            r#"
            INSERT INTO resources (
                id, title, slug, category_id, region_id, description, address,
                latitude, longitude, phone, email, website, socials,
                services, eligibility, featured_image_url, approved
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                slug = EXCLUDED.slug,
                category_id = EXCLUDED.category_id,
                region_id = EXCLUDED.region_id,
                description = EXCLUDED.description,
                address = EXCLUDED.address,
                latitude = EXCLUDED.latitude,
                longitude = EXCLUDED.longitude,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                website = EXCLUDED.website,
                socials = EXCLUDED.socials,
                services = EXCLUDED.services,
                eligibility = EXCLUDED.eligibility,
                featured_image_url = EXCLUDED.featured_image_url,
                approved = EXCLUDED.approved
            "#,
        )
        .bind(&doc.id)
        .bind(&doc.title)
        .bind(slug)
        .bind(&doc.category_id)
        .bind(&doc.region_id)
        .bind(&doc.description)
        .bind(&doc.address)
        .bind(location.lat)
        .bind(location.lng)
        .bind(contact.phone)
        .bind(contact.email)
        .bind(contact.website)
        .bind(contact.socials)
        .bind(&doc.services)
        .bind(&doc.eligibility)
        .bind(&doc.featured_image_url)
        .bind(doc.approved)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ResourceRepository for PgResourceRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, title, slug, icon_url FROM categories ORDER BY title",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn list_regions(&self) -> Result<Vec<Region>, AppError> {
        let rows =
            sqlx::query_as::<_, RegionRow>("SELECT id, title, pincode FROM regions ORDER BY title")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Region::from).collect())
    }

    async fn find_category(&self, id: &str) -> Result<Option<Category>, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, title, slug, icon_url FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Category::from))
    }

    async fn find_region(&self, id: &str) -> Result<Option<Region>, AppError> {
        let row =
            sqlx::query_as::<_, RegionRow>("SELECT id, title, pincode FROM regions WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Region::from))
    }

    async fn list_resources(&self, query: ResourceQuery) -> Result<Vec<Resource>, AppError> {
        let sql = format!(
            "{RESOURCE_SELECT}
            WHERE r.approved
              AND ($1::TEXT IS NULL OR c.slug = $1)
              AND ($2::TEXT IS NULL OR g.id = $2)
            ORDER BY r.title"
        );

        let rows = sqlx::query_as::<_, ResourceRow>(&sql)
            .bind(query.category_slug)
            .bind(query.region_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Resource::from).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Resource>, AppError> {
        let sql = format!("{RESOURCE_SELECT} WHERE r.approved AND r.slug = $1");

        let row = sqlx::query_as::<_, ResourceRow>(&sql)
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Resource::from))
    }

    async fn create_submission(&self, new_resource: NewResource) -> Result<Resource, AppError> {
        let slug = new_resource.slug.clone();

        let result = sqlx::query(
            r#"
            INSERT INTO resources (
                id, title, slug, category_id, region_id, address, description,
                phone, email, approved
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, FALSE)
            "#,
        )
        .bind(&new_resource.id)
        .bind(&new_resource.title)
        .bind(&new_resource.slug)
        .bind(&new_resource.category_id)
        .bind(&new_resource.region_id)
        .bind(&new_resource.address)
        .bind(&new_resource.description)
        .bind(&new_resource.phone)
        .bind(&new_resource.email)
        .execute(self.pool.as_ref())
        .await;

        match result {
            Ok(_) => {}
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                return Err(AppError::conflict(
                    "A resource with this name already exists",
                    json!({ "slug": slug }),
                ));
            }
            Err(e) => return Err(e.into()),
        }

        let sql = format!("{RESOURCE_SELECT} WHERE r.id = $1");
        let row = sqlx::query_as::<_, ResourceRow>(&sql)
            .bind(&new_resource.id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn list_pending(&self) -> Result<Vec<Resource>, AppError> {
        let sql = format!("{RESOURCE_SELECT} WHERE NOT r.approved ORDER BY r.created_at");

        let rows = sqlx::query_as::<_, ResourceRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Resource::from).collect())
    }

    async fn approve(&self, slug: &str) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE resources SET approved = TRUE WHERE slug = $1 AND NOT approved")
                .bind(slug)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn merge_category(&self, from_id: &str, into_id: &str) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        for id in [from_id, into_id] {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)")
                    .bind(id)
                    .fetch_one(&mut *tx)
                    .await?;
            if !exists {
                return Err(AppError::not_found(
                    "Category not found",
                    json!({ "id": id }),
                ));
            }
        }

        let moved = sqlx::query("UPDATE resources SET category_id = $2 WHERE category_id = $1")
            .bind(from_id)
            .bind(into_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(from_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(moved)
    }

    async fn import_seed(&self, seed: DirectorySeed) -> Result<ImportSummary, AppError> {
        let mut tx = self.pool.begin().await?;

        for category in &seed.categories {
            sqlx::query(
                r#"
                INSERT INTO categories (id, title, slug, icon_url)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO UPDATE SET
                    title = EXCLUDED.title,
                    slug = EXCLUDED.slug,
                    icon_url = EXCLUDED.icon_url
                "#,
            )
            .bind(&category.id)
            .bind(&category.title)
            .bind(&category.slug)
            .bind(&category.icon_url)
            .execute(&mut *tx)
            .await?;
        }

        for region in &seed.regions {
            sqlx::query(
                r#"
                INSERT INTO regions (id, title, pincode)
                VALUES ($1, $2, $3)
                ON CONFLICT (id) DO UPDATE SET
                    title = EXCLUDED.title,
                    pincode = EXCLUDED.pincode
                "#,
            )
            .bind(&region.id)
            .bind(&region.title)
            .bind(&region.pincode)
            .execute(&mut *tx)
            .await?;
        }

        for doc in &seed.resources {
            Self::upsert_document(&mut tx, doc).await?;
        }

        tx.commit().await?;

        Ok(ImportSummary {
            categories: seed.categories.len(),
            regions: seed.regions.len(),
            resources: seed.resources.len(),
        })
    }

    async fn stats(&self) -> Result<DirectoryStats, AppError> {
        let (categories, regions, approved_resources, pending_resources): (i64, i64, i64, i64) =
            sqlx::query_as(
                r#"
                SELECT
                    (SELECT COUNT(*) FROM categories),
                    (SELECT COUNT(*) FROM regions),
                    (SELECT COUNT(*) FROM resources WHERE approved),
                    (SELECT COUNT(*) FROM resources WHERE NOT approved)
                "#,
            )
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(DirectoryStats {
            categories,
            regions,
            approved_resources,
            pending_resources,
        })
    }
}
