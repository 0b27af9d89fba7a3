use query_cache::QueryKey;
use uuid::Uuid;

use super::data::{entity, remote, DataLayer};
use crate::error::AppError;
use crate::models::{NewTestimonial, Testimonial};

/// Testimonials, newest first. Public pages pass `approved_only = true`;
/// the moderation screen reads everything.
pub async fn list(data: &DataLayer, approved_only: bool) -> Result<Vec<Testimonial>, AppError> {
    let key = QueryKey::new(
        entity::TESTIMONIALS,
        if approved_only { "approved" } else { "all" },
    );
    let store = data.store.clone();

    let rows = data
        .cache
        .get_or_fetch(key, move || async move {
            let mut query = store.table("testimonials").order_desc("created_at");
            if approved_only {
                query = query.eq("approved", true);
            }
            query.rows::<Testimonial>().await.map_err(remote)
        })
        .await?;
    Ok(rows)
}

/// The home-page highlight reel: approved and featured, capped at six.
pub async fn featured(data: &DataLayer) -> Result<Vec<Testimonial>, AppError> {
    let key = QueryKey::new(entity::TESTIMONIALS, "featured");
    let store = data.store.clone();

    let rows = data
        .cache
        .get_or_fetch(key, move || async move {
            store
                .table("testimonials")
                .eq("approved", true)
                .eq("featured", true)
                .order_desc("created_at")
                .limit(6)
                .rows::<Testimonial>()
                .await
                .map_err(remote)
        })
        .await?;
    Ok(rows)
}

/// Public submission. The insert body forces `approved = false`, so the
/// new row cannot appear in any approved-only read; no invalidation is
/// needed until a moderator acts on it.
pub async fn submit(data: &DataLayer, testimonial: &NewTestimonial) -> Result<Testimonial, AppError> {
    testimonial.validate()?;
    let created = data
        .store
        .table("testimonials")
        .insert::<Testimonial>(&testimonial.insert_body())
        .await?;
    Ok(created)
}

/// Moderation update: approve, reject, toggle featured.
pub async fn update(
    data: &DataLayer,
    id: Uuid,
    patch: serde_json::Value,
) -> Result<Testimonial, AppError> {
    let updated = data
        .store
        .table("testimonials")
        .update::<Testimonial>(&id.to_string(), &patch)
        .await?;
    data.cache.invalidate(&[entity::TESTIMONIALS]);
    Ok(updated)
}

pub async fn delete(data: &DataLayer, id: Uuid) -> Result<(), AppError> {
    data.store
        .table("testimonials")
        .delete(&id.to_string())
        .await?;
    data.cache.invalidate(&[entity::TESTIMONIALS]);
    Ok(())
}
