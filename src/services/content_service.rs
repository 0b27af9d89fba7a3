use chrono::Utc;
use query_cache::QueryKey;
use serde_json::json;
use uuid::Uuid;

use super::data::{entity, remote, DataLayer};
use crate::error::AppError;
use crate::models::{EventType, SiteContent};

/// Active event types in display order.
pub async fn event_types(data: &DataLayer) -> Result<Vec<EventType>, AppError> {
    let key = QueryKey::new(entity::EVENT_TYPES, "active");
    let store = data.store.clone();

    let rows = data
        .cache
        .get_or_fetch(key, move || async move {
            store
                .table("event_types")
                .eq("is_active", true)
                .order_asc("sort_order")
                .rows::<EventType>()
                .await
                .map_err(remote)
        })
        .await?;
    Ok(rows)
}

/// Every event type, including inactive ones, for the admin manager.
pub async fn all_event_types(data: &DataLayer) -> Result<Vec<EventType>, AppError> {
    let key = QueryKey::new(entity::EVENT_TYPES, "all");
    let store = data.store.clone();

    let rows = data
        .cache
        .get_or_fetch(key, move || async move {
            store
                .table("event_types")
                .order_asc("sort_order")
                .rows::<EventType>()
                .await
                .map_err(remote)
        })
        .await?;
    Ok(rows)
}

pub async fn update_event_type(
    data: &DataLayer,
    id: Uuid,
    patch: serde_json::Value,
) -> Result<EventType, AppError> {
    let updated = data
        .store
        .table("event_types")
        .update::<EventType>(&id.to_string(), &patch)
        .await?;
    data.cache.invalidate(&[entity::EVENT_TYPES]);
    Ok(updated)
}

pub async fn delete_event_type(data: &DataLayer, id: Uuid) -> Result<(), AppError> {
    data.store
        .table("event_types")
        .delete(&id.to_string())
        .await?;
    data.cache.invalidate(&[entity::EVENT_TYPES]);
    Ok(())
}

/// Site copy, optionally narrowed to one section.
pub async fn site_content(
    data: &DataLayer,
    section: Option<&str>,
) -> Result<Vec<SiteContent>, AppError> {
    let section = section.map(str::to_string);
    let key = QueryKey::new(
        entity::SITE_CONTENT,
        section.clone().unwrap_or_else(|| "all".to_string()),
    );
    let store = data.store.clone();

    let rows = data
        .cache
        .get_or_fetch(key, move || async move {
            let mut query = store.table("site_content");
            if let Some(section) = &section {
                query = query.eq("section", section);
            }
            query.rows::<SiteContent>().await.map_err(remote)
        })
        .await?;
    Ok(rows)
}

/// Rewrites one piece of copy, stamping who touched it and when.
pub async fn update_content(
    data: &DataLayer,
    id: Uuid,
    value: &str,
    updated_by: Option<Uuid>,
) -> Result<SiteContent, AppError> {
    let patch = json!({
        "value": value,
        "updated_by": updated_by,
        "updated_at": Utc::now(),
    });
    let updated = data
        .store
        .table("site_content")
        .update::<SiteContent>(&id.to_string(), &patch)
        .await?;
    data.cache.invalidate(&[entity::SITE_CONTENT]);
    Ok(updated)
}
