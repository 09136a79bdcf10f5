use super::{ViewModel, DEFAULT_PAGE_SIZE};
use crate::models::{Document, DocumentFilter};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DocumentViewParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub author: Option<String>,
    pub subject: Option<String>,
}

/// Document management screen.
pub async fn document_view(
    State(state): State<AppState>,
    Query(params): Query<DocumentViewParams>,
) -> Json<ViewModel<Document, DocumentFilter>> {
    let filter = DocumentFilter {
        author: params.author,
        subject: params.subject,
    }
    .normalized();

    let result = state
        .documents
        .fetch_documents(
            params.page.unwrap_or(0),
            params.size.unwrap_or(DEFAULT_PAGE_SIZE),
            &filter,
        )
        .await;

    Json(ViewModel::render(
        "document",
        state.ui,
        state.toast.clone(),
        filter,
        result,
    ))
}
