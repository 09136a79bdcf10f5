use crate::client::{ApiClient, ListQuery};
use crate::error::ApiError;
use crate::models::{Page, Translator, TranslatorFields, TranslatorFilter};
use tracing::info;

const ROUTE: &str = "translator";

/// CRUD operations on the `translator` resource.
#[derive(Debug, Clone)]
pub struct TranslatorService {
    client: ApiClient,
}

impl TranslatorService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn fetch_translators(
        &self,
        page: u32,
        size: u32,
        filter: &TranslatorFilter,
    ) -> Result<Page<Translator>, ApiError> {
        let query = ListQuery { page, size, filter };
        self.client.get_json_with_query(ROUTE, &query).await
    }

    pub async fn fetch_translator(&self, id: i64) -> Result<Translator, ApiError> {
        self.client.get_json(&format!("{}/{}", ROUTE, id)).await
    }

    pub async fn create_translator(
        &self,
        translator: &TranslatorFields,
    ) -> Result<Translator, ApiError> {
        let created: Translator = self.client.post_json(ROUTE, translator).await?;
        info!("Created translator {} ({})", created.id, created.email);
        Ok(created)
    }

    /// Replace every field of translator `id`, returning the server's record.
    pub async fn update_translator(
        &self,
        id: i64,
        translator: &TranslatorFields,
    ) -> Result<Translator, ApiError> {
        self.client
            .put_json(&format!("{}/{}", ROUTE, id), translator)
            .await
    }

    pub async fn delete_translator(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ROUTE, id)).await?;
        info!("Deleted translator {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LangCountry;
    use wiremock::{
        matchers::{body_json, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn service(mock_server: &MockServer) -> TranslatorService {
        let client = ApiClient::new(&format!("{}/api/v1/", mock_server.uri())).unwrap();
        TranslatorService::new(client)
    }

    fn fields() -> TranslatorFields {
        TranslatorFields {
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            source_language: Some(LangCountry::PtBr),
            target_language: Some(LangCountry::EnUs),
        }
    }

    fn translator_json(id: i64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": "Ana Souza",
            "email": "ana@example.com",
            "sourceLanguage": "PT_BR",
            "targetLanguage": "EN_US"
        })
    }

    #[tokio::test]
    async fn test_fetch_translators_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/translator"))
            .and(query_param("page", "0"))
            .and(query_param("size", "10"))
            .and(query_param("name", "Ana"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [translator_json(1)],
                "page": {"size": 10, "number": 0, "totalElements": 1, "totalPages": 1}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let page = service(&mock_server)
            .fetch_translators(0, 10, &TranslatorFilter::by_name("Ana"))
            .await
            .expect("Should succeed");

        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].fields(), fields());
    }

    #[tokio::test]
    async fn test_fetch_translator_by_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/translator/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(translator_json(3)))
            .mount(&mock_server)
            .await;

        let translator = service(&mock_server)
            .fetch_translator(3)
            .await
            .expect("Should succeed");
        assert_eq!(translator.id, 3);
        assert_eq!(translator.target_language, Some(LangCountry::EnUs));
    }

    #[tokio::test]
    async fn test_create_translator_returns_server_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/translator"))
            .and(body_json(serde_json::to_value(fields()).unwrap()))
            .respond_with(ResponseTemplate::new(201).set_body_json(translator_json(77)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let created = service(&mock_server)
            .create_translator(&fields())
            .await
            .expect("Should succeed");
        assert_eq!(created.id, 77);
    }

    #[tokio::test]
    async fn test_update_translator_returns_server_record() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/translator/9"))
            .and(body_json(serde_json::to_value(fields()).unwrap()))
            .respond_with(ResponseTemplate::new(200).set_body_json(translator_json(9)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let updated = service(&mock_server)
            .update_translator(9, &fields())
            .await
            .expect("Should succeed");
        assert_eq!(updated.id, 9);
        assert_eq!(updated.fields(), fields());
    }

    #[tokio::test]
    async fn test_delete_translator_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/v1/translator/404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": 404,
                "message": "Translator not found",
                "timestamp": "2024-01-15T10:30:00Z"
            })))
            .mount(&mock_server)
            .await;

        let err = service(&mock_server)
            .delete_translator(404)
            .await
            .expect_err("Should fail");
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "Translator not found");
    }
}
