use crate::error::ApiError;
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// Multipart field name the backend reads batch uploads from.
pub const UPLOAD_FIELD: &str = "file";

/// A file to upload for server-side bulk ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, declaring the given content type.
    pub async fn from_path(path: impl AsRef<Path>, content_type: &str) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(file_name, content_type, bytes))
    }

    /// Build a form holding this file as its single part.
    pub fn into_form(self) -> Result<Form, ApiError> {
        let content_type = self.content_type.clone();
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&content_type)
            .map_err(|_| ApiError::InvalidContentType(content_type))?;

        Ok(Form::new().part(UPLOAD_FIELD, part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_from_path_reads_bytes_and_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("batch.csv");
        std::fs::write(&path, "author,subject\nSmith,Law\n").expect("Failed to write file");

        let file = UploadFile::from_path(&path, "text/csv")
            .await
            .expect("Should read file");

        assert_eq!(file.file_name, "batch.csv");
        assert_eq!(file.content_type, "text/csv");
        assert_eq!(file.bytes, b"author,subject\nSmith,Law\n");
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = UploadFile::from_path(temp_dir.path().join("nope.csv"), "text/csv").await;
        assert!(matches!(result, Err(ApiError::Io(_))));
    }

    #[test]
    fn test_into_form_rejects_bad_content_type() {
        let file = UploadFile::new("a.bin", "not a mime type", vec![1, 2, 3]);
        let result = file.into_form();
        assert!(matches!(result, Err(ApiError::InvalidContentType(ct)) if ct == "not a mime type"));
    }

    #[test]
    fn test_into_form_accepts_valid_content_type() {
        let file = UploadFile::new("docs.json", "application/json", b"[]".to_vec());
        assert!(file.into_form().is_ok());
    }
}
