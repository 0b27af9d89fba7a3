use std::path::Path;

use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::Rng;

use super::data::DataLayer;
use crate::error::AppError;

pub const GALLERY_BUCKET: &str = "gallery";

/// Storage object name: millisecond timestamp plus a random suffix, keeping
/// the original extension. Collisions across concurrent uploads are what
/// the random part is for.
pub fn object_name(original_name: &str) -> String {
    let extension = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin");
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    format!("{}-{}.{}", Utc::now().timestamp_millis(), suffix, extension)
}

/// Uploads one media file into the gallery bucket and returns its public
/// URL, ready to be written into a gallery item row.
pub async fn upload_media(
    data: &DataLayer,
    folder: &str,
    original_name: &str,
    bytes: Vec<u8>,
    content_type: &str,
) -> Result<String, AppError> {
    let path = format!("{}/{}", folder, object_name(original_name));
    let storage = data.store.storage();
    storage
        .upload(GALLERY_BUCKET, &path, bytes, content_type)
        .await?;
    Ok(storage.public_url(GALLERY_BUCKET, &path))
}

/// Removes a stored object given its public URL. URLs that do not point
/// into our storage (seeded external media) are left alone.
pub async fn delete_media(data: &DataLayer, public_url: &str) -> Result<(), AppError> {
    let Some(path) = remote_store::path_from_public_url(public_url) else {
        return Ok(());
    };
    data.store
        .storage()
        .remove(GALLERY_BUCKET, &[path])
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_name_keeps_the_extension() {
        let name = object_name("garden wedding.JPEG");
        assert!(name.ends_with(".JPEG"));
        assert!(!name.contains(' '));
    }

    #[test]
    fn object_name_defaults_the_extension() {
        assert!(object_name("no-extension").ends_with(".bin"));
    }

    #[test]
    fn object_names_do_not_collide() {
        assert_ne!(object_name("a.jpeg"), object_name("a.jpeg"));
    }
}
