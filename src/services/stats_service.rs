use query_cache::QueryKey;
use remote_store::StoreError;
use serde::{Deserialize, Serialize};

use super::data::{entity, DataLayer};
use crate::error::AppError;

/// Admin dashboard summary. Each count is `None` when its probe failed, so
/// a broken query is distinguishable from a genuinely empty table; the
/// dashboard renders failed counts as a dash instead of a misleading zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_gallery: Option<u64>,
    pub total_testimonials: Option<u64>,
    pub total_inquiries: Option<u64>,
    pub pending_testimonials: Option<u64>,
    pub new_inquiries: Option<u64>,
}

impl DashboardStats {
    fn from_counts(
        gallery: Result<u64, StoreError>,
        testimonials: Result<u64, StoreError>,
        inquiries: Result<u64, StoreError>,
        pending: Result<u64, StoreError>,
        fresh: Result<u64, StoreError>,
    ) -> Self {
        Self {
            total_gallery: keep("gallery", gallery),
            total_testimonials: keep("testimonials", testimonials),
            total_inquiries: keep("inquiries", inquiries),
            pending_testimonials: keep("pending testimonials", pending),
            new_inquiries: keep("new inquiries", fresh),
        }
    }
}

fn keep(label: &str, count: Result<u64, StoreError>) -> Option<u64> {
    match count {
        Ok(n) => Some(n),
        Err(e) => {
            log::warn!("{} count failed: {}", label, e);
            None
        }
    }
}

/// Five independent count queries, issued concurrently and joined. One
/// failing probe never corrupts the others.
pub async fn dashboard_stats(data: &DataLayer) -> Result<DashboardStats, AppError> {
    let key = QueryKey::new(entity::STATS, "dashboard");
    let store = data.store.clone();

    let stats = data
        .cache
        .get_or_fetch(key, move || async move {
            let (gallery, testimonials, inquiries, pending, fresh) = tokio::join!(
                store.table("gallery_items").count(),
                store.table("testimonials").count(),
                store.table("inquiries").count(),
                store.table("testimonials").eq("approved", false).count(),
                store.table("inquiries").eq("status", "new").count(),
            );
            Ok(DashboardStats::from_counts(
                gallery,
                testimonials,
                inquiries,
                pending,
                fresh,
            ))
        })
        .await?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_land_in_their_own_fields() {
        // 3 gallery items, 2 testimonials (1 unapproved), 1 new inquiry.
        let stats = DashboardStats::from_counts(Ok(3), Ok(2), Ok(1), Ok(1), Ok(1));
        assert_eq!(
            stats,
            DashboardStats {
                total_gallery: Some(3),
                total_testimonials: Some(2),
                total_inquiries: Some(1),
                pending_testimonials: Some(1),
                new_inquiries: Some(1),
            }
        );
    }

    #[test]
    fn one_failed_probe_does_not_corrupt_the_rest() {
        let stats = DashboardStats::from_counts(
            Ok(3),
            Err(StoreError::Network("timeout".into())),
            Ok(1),
            Ok(0),
            Ok(1),
        );
        assert_eq!(stats.total_gallery, Some(3));
        assert_eq!(stats.total_testimonials, None);
        assert_eq!(stats.pending_testimonials, Some(0));
    }
}
