use crate::client::{ApiClient, ListQuery};
use crate::error::ApiError;
use crate::models::{Document, DocumentAllFields, DocumentFilter, Page, UploadFile};
use tracing::info;

const ROUTE: &str = "document";

/// CRUD operations on the `document` resource.
#[derive(Debug, Clone)]
pub struct DocumentService {
    client: ApiClient,
}

impl DocumentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List documents. `page` and `size` are sent verbatim; only the filter
    /// fields that are set become query parameters.
    pub async fn fetch_documents(
        &self,
        page: u32,
        size: u32,
        filter: &DocumentFilter,
    ) -> Result<Page<Document>, ApiError> {
        let query = ListQuery { page, size, filter };
        self.client.get_json_with_query(ROUTE, &query).await
    }

    pub async fn fetch_document(&self, id: i64) -> Result<DocumentAllFields, ApiError> {
        self.client.get_json(&format!("{}/{}", ROUTE, id)).await
    }

    pub async fn create_document(
        &self,
        document: &DocumentAllFields,
    ) -> Result<DocumentAllFields, ApiError> {
        let created = self.client.post_json(ROUTE, document).await?;
        info!("Created document by {}", document.author);
        Ok(created)
    }

    /// Replace every field of document `id`.
    pub async fn update_document(
        &self,
        id: i64,
        document: &DocumentAllFields,
    ) -> Result<DocumentAllFields, ApiError> {
        self.client
            .put_json(&format!("{}/{}", ROUTE, id), document)
            .await
    }

    pub async fn delete_document(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ROUTE, id)).await?;
        info!("Deleted document {}", id);
        Ok(())
    }

    /// Upload one file for server-side bulk ingestion.
    ///
    /// The whole batch succeeds or fails as one; there is no per-record report.
    pub async fn insert_batch_documents(&self, file: UploadFile) -> Result<(), ApiError> {
        let file_name = file.file_name.clone();
        let size = file.bytes.len();
        let form = file.into_form()?;

        self.client
            .post_multipart(&format!("{}/file", ROUTE), form)
            .await?;

        info!("✓ Uploaded batch file {} ({} bytes)", file_name, size);
        Ok(())
    }
}
