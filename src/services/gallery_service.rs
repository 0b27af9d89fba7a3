use query_cache::QueryKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::data::{entity, remote, DataLayer};
use crate::error::AppError;
use crate::models::{GalleryCategory, GalleryItem, NewGalleryItem};

#[derive(Debug, Serialize, Deserialize)]
struct CategoryId {
    id: Uuid,
}

/// Gallery items with their category embedded, ordered by explicit sort
/// order and then recency. `None` or `"all"` skips the category filter; an
/// unknown slug also skips it rather than failing the whole page.
pub async fn list_items(
    data: &DataLayer,
    category_slug: Option<&str>,
) -> Result<Vec<GalleryItem>, AppError> {
    let slug = category_slug.unwrap_or("all").to_string();
    let key = QueryKey::new(entity::GALLERY, slug.clone());
    let store = data.store.clone();

    let items = data
        .cache
        .get_or_fetch(key, move || async move {
            let mut query = store
                .table("gallery_items")
                .select("*,category:gallery_categories(*)")
                .order_asc("sort_order")
                .order_desc("created_at");
            if slug != "all" {
                let category: Option<CategoryId> = store
                    .table("gallery_categories")
                    .select("id")
                    .eq("slug", &slug)
                    .maybe_single()
                    .await
                    .map_err(remote)?;
                if let Some(category) = category {
                    query = query.eq("category_id", category.id);
                }
            }
            query.rows::<GalleryItem>().await.map_err(remote)
        })
        .await?;
    Ok(items)
}

/// Items uploaded by one staff member, newest first.
pub async fn my_uploads(data: &DataLayer, profile_id: Uuid) -> Result<Vec<GalleryItem>, AppError> {
    let key = QueryKey::new(entity::GALLERY, format!("mine:{}", profile_id));
    let store = data.store.clone();

    let items = data
        .cache
        .get_or_fetch(key, move || async move {
            store
                .table("gallery_items")
                .select("*,category:gallery_categories(*)")
                .eq("uploaded_by", profile_id)
                .order_desc("created_at")
                .rows::<GalleryItem>()
                .await
                .map_err(remote)
        })
        .await?;
    Ok(items)
}

/// Active categories in display order.
pub async fn list_categories(data: &DataLayer) -> Result<Vec<GalleryCategory>, AppError> {
    let key = QueryKey::new(entity::GALLERY_CATEGORIES, "active");
    let store = data.store.clone();

    let categories = data
        .cache
        .get_or_fetch(key, move || async move {
            store
                .table("gallery_categories")
                .eq("is_active", true)
                .order_asc("sort_order")
                .rows::<GalleryCategory>()
                .await
                .map_err(remote)
        })
        .await?;
    Ok(categories)
}

pub async fn add_item(data: &DataLayer, item: &NewGalleryItem) -> Result<GalleryItem, AppError> {
    item.validate()?;
    let created = data
        .store
        .table("gallery_items")
        .insert::<GalleryItem>(item)
        .await?;
    data.cache.invalidate(&[entity::GALLERY]);
    Ok(created)
}

/// Partial update (featured flag, sort order, category, copy).
pub async fn update_item(
    data: &DataLayer,
    id: Uuid,
    patch: serde_json::Value,
) -> Result<GalleryItem, AppError> {
    let updated = data
        .store
        .table("gallery_items")
        .update::<GalleryItem>(&id.to_string(), &patch)
        .await?;
    data.cache.invalidate(&[entity::GALLERY]);
    Ok(updated)
}

/// Deletes the row, then best-effort removes the stored media behind it.
/// A failed storage cleanup only orphans a file; it must not fail the
/// delete the user asked for.
pub async fn delete_item(data: &DataLayer, item: &GalleryItem) -> Result<(), AppError> {
    data.store
        .table("gallery_items")
        .delete(&item.id.to_string())
        .await?;
    data.cache.invalidate(&[entity::GALLERY]);

    let mut orphans: Vec<String> = Vec::new();
    orphans.extend(remote_store::path_from_public_url(&item.url));
    if let Some(thumbnail) = &item.thumbnail_url {
        orphans.extend(remote_store::path_from_public_url(thumbnail));
    }
    if !orphans.is_empty() {
        if let Err(e) = data
            .store
            .storage()
            .remove(super::upload_service::GALLERY_BUCKET, &orphans)
            .await
        {
            log::warn!("stored media for deleted item {} not removed: {}", item.id, e);
        }
    }
    Ok(())
}
