use query_cache::QueryKey;

use super::data::{entity, remote, DataLayer};
use crate::error::AppError;
use crate::models::Profile;

/// All staff profiles, newest first, for the admin user manager.
pub async fn list(data: &DataLayer) -> Result<Vec<Profile>, AppError> {
    let key = QueryKey::new(entity::PROFILES, "all");
    let store = data.store.clone();

    let rows = data
        .cache
        .get_or_fetch(key, move || async move {
            store
                .table("profiles")
                .order_desc("created_at")
                .rows::<Profile>()
                .await
                .map_err(remote)
        })
        .await?;
    Ok(rows)
}

/// Profile lookup for a signed-in account. Deliberately uncached: the
/// session store must see the row as it is right now, and a missing row
/// must read as missing, not as a stale hit.
pub async fn by_id(data: &DataLayer, user_id: &str) -> Result<Option<Profile>, AppError> {
    let profile = data
        .store
        .table("profiles")
        .eq("id", user_id)
        .maybe_single::<Profile>()
        .await?;
    Ok(profile)
}
