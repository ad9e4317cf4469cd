use std::path::PathBuf;

use poem_openapi::types::multipart::Upload;
use tokio::fs;
use uuid::Uuid;

use crate::errors::ItemError;

const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
const ALLOWED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif"];

/// Stores uploaded item images on disk.
///
/// Files are written as `image-<uuid>.<ext>` under the configured directory
/// and referenced by the relative path served at `/uploads`.
pub struct ImageStore {
    base_dir: PathBuf,
}

impl ImageStore {
    /// Create the store, ensuring the upload directory exists
    pub async fn new(base_dir: PathBuf) -> Result<Self, std::io::Error> {
        fs::create_dir_all(&base_dir).await?;
        tracing::info!(path = %base_dir.display(), "Image store initialized");
        Ok(Self { base_dir })
    }

    /// Save an uploaded image and return the relative path to record
    pub async fn save(&self, image: Upload) -> Result<String, ItemError> {
        let extension = image_extension(image.file_name(), image.content_type())?;

        let data = image
            .into_vec()
            .await
            .map_err(|e| ItemError::internal_error(format!("Failed to read upload: {}", e)))?;

        self.save_bytes(&extension, &data).await
    }

    async fn save_bytes(&self, extension: &str, data: &[u8]) -> Result<String, ItemError> {
        if data.is_empty() {
            return Err(ItemError::validation("Uploaded file is empty"));
        }
        if data.len() > MAX_IMAGE_BYTES {
            return Err(ItemError::validation(
                "File is too large. Maximum size is 5MB",
            ));
        }

        let file_name = format!("image-{}.{}", Uuid::new_v4(), extension);
        let path = self.base_dir.join(&file_name);

        fs::write(&path, data)
            .await
            .map_err(|e| ItemError::internal_error(format!("Failed to store image: {}", e)))?;

        tracing::debug!(file = %file_name, size = data.len(), "Stored item image");
        Ok(format!("uploads/{}", file_name))
    }
}

/// Pick the file extension from the upload's content type or file name.
///
/// Anything that is not a known image type is rejected.
fn image_extension(
    file_name: Option<&str>,
    content_type: Option<&str>,
) -> Result<String, ItemError> {
    if let Some(content_type) = content_type {
        let ext = match content_type {
            "image/jpeg" => Some("jpg"),
            "image/png" => Some("png"),
            "image/gif" => Some("gif"),
            _ => None,
        };
        if let Some(ext) = ext {
            return Ok(ext.to_string());
        }
    }

    if let Some(ext) = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
    {
        if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Ok(ext);
        }
    }

    Err(ItemError::validation("Only image files are allowed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_content_type() {
        let ext = image_extension(Some("photo.bin"), Some("image/png")).unwrap();
        assert_eq!(ext, "png");
    }

    #[test]
    fn test_extension_from_file_name() {
        let ext = image_extension(Some("photo.JPG"), None).unwrap();
        assert_eq!(ext, "jpg");
    }

    #[test]
    fn test_non_image_upload_is_rejected() {
        let result = image_extension(Some("notes.pdf"), Some("application/pdf"));
        assert!(matches!(result, Err(ItemError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_save_bytes_writes_file_and_returns_relative_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = ImageStore::new(dir.path().to_path_buf())
            .await
            .expect("Failed to init store");

        let path = store
            .save_bytes("png", b"fake image bytes")
            .await
            .expect("Save should succeed");

        assert!(path.starts_with("uploads/image-"));
        assert!(path.ends_with(".png"));

        let file_name = path.strip_prefix("uploads/").unwrap();
        let on_disk = tokio::fs::read(dir.path().join(file_name))
            .await
            .expect("File should exist");
        assert_eq!(on_disk, b"fake image bytes");
    }

    #[tokio::test]
    async fn test_save_bytes_rejects_oversized_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = ImageStore::new(dir.path().to_path_buf())
            .await
            .expect("Failed to init store");

        let oversized = vec![0u8; MAX_IMAGE_BYTES + 1];
        let result = store.save_bytes("png", &oversized).await;

        assert!(matches!(result, Err(ItemError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_save_bytes_rejects_empty_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = ImageStore::new(dir.path().to_path_buf())
            .await
            .expect("Failed to init store");

        let result = store.save_bytes("png", &[]).await;

        assert!(matches!(result, Err(ItemError::ValidationError(_))));
    }
}
