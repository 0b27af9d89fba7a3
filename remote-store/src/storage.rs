use crate::table::check;
use crate::{RemoteStore, StoreError};

/// Object-storage bucket API.
pub struct StorageClient {
    store: RemoteStore,
}

impl StorageClient {
    pub(crate) fn new(store: RemoteStore) -> Self {
        Self { store }
    }

    /// Uploads one object and returns its path within the bucket.
    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError> {
        let url = self.store.storage_url(&format!("object/{}/{}", bucket, path));
        let request = self
            .store
            .authed(self.store.http.post(url))
            .header("Content-Type", content_type)
            .header("Cache-Control", "max-age=3600")
            .header("x-upsert", "false")
            .body(bytes);
        check(request.send().await?).await?;
        Ok(path.to_string())
    }

    /// Public, fetchable URL for an object in a public bucket.
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        self.store
            .storage_url(&format!("object/public/{}/{}", bucket, path))
    }

    /// Removes objects from a bucket.
    pub async fn remove(&self, bucket: &str, paths: &[String]) -> Result<(), StoreError> {
        let url = self.store.storage_url(&format!("object/{}", bucket));
        let request = self
            .store
            .authed(self.store.http.delete(url))
            .json(&serde_json::json!({ "prefixes": paths }));
        check(request.send().await?).await?;
        Ok(())
    }
}

/// Inverse of `public_url`: extracts the in-bucket object path from a
/// public URL. Returns `None` for URLs that do not point into the public
/// object namespace.
pub fn path_from_public_url(url: &str) -> Option<String> {
    let (_, with_bucket) = url.split_once("/storage/v1/object/public/")?;
    let (_bucket, path) = with_bucket.split_once('/')?;
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_round_trips_to_path() {
        let store = RemoteStore::new("https://backend.example.com", "anon").unwrap();
        let url = store.storage().public_url("gallery", "images/1700000000-abcd1234.jpeg");
        assert_eq!(
            url,
            "https://backend.example.com/storage/v1/object/public/gallery/images/1700000000-abcd1234.jpeg"
        );
        assert_eq!(
            path_from_public_url(&url).as_deref(),
            Some("images/1700000000-abcd1234.jpeg")
        );
    }

    #[test]
    fn foreign_urls_have_no_storage_path() {
        assert_eq!(path_from_public_url("https://example.com/header.jpeg"), None);
        assert_eq!(
            path_from_public_url("https://backend.example.com/storage/v1/object/public/gallery/"),
            None
        );
    }
}
