use query_cache::QueryKey;
use uuid::Uuid;

use super::data::{entity, remote, DataLayer};
use crate::error::AppError;
use crate::models::{Inquiry, InquiryStatus, NewInquiry};

/// Inquiries, newest first, optionally narrowed to one pipeline status.
pub async fn list(
    data: &DataLayer,
    status: Option<InquiryStatus>,
) -> Result<Vec<Inquiry>, AppError> {
    let key = QueryKey::new(
        entity::INQUIRIES,
        status.map(|s| s.as_str().to_string()).unwrap_or_else(|| "all".to_string()),
    );
    let store = data.store.clone();

    let rows = data
        .cache
        .get_or_fetch(key, move || async move {
            let mut query = store.table("inquiries").order_desc("created_at");
            if let Some(status) = status {
                query = query.eq("status", status.as_str());
            }
            query.rows::<Inquiry>().await.map_err(remote)
        })
        .await?;
    Ok(rows)
}

/// Public contact-form submission; always enters the pipeline at `new`.
pub async fn submit(data: &DataLayer, inquiry: &NewInquiry) -> Result<Inquiry, AppError> {
    inquiry.validate()?;
    let created = data
        .store
        .table("inquiries")
        .insert::<Inquiry>(&inquiry.insert_body())
        .await?;
    data.cache.invalidate(&[entity::INQUIRIES]);
    Ok(created)
}

/// Staff update: advance the status or edit the notes.
pub async fn update(
    data: &DataLayer,
    id: Uuid,
    patch: serde_json::Value,
) -> Result<Inquiry, AppError> {
    let updated = data
        .store
        .table("inquiries")
        .update::<Inquiry>(&id.to_string(), &patch)
        .await?;
    data.cache.invalidate(&[entity::INQUIRIES]);
    Ok(updated)
}
