use super::{ViewModel, DEFAULT_PAGE_SIZE};
use crate::models::{Translator, TranslatorFilter};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TranslatorViewParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Translator management screen.
pub async fn translator_view(
    State(state): State<AppState>,
    Query(params): Query<TranslatorViewParams>,
) -> Json<ViewModel<Translator, TranslatorFilter>> {
    let filter = TranslatorFilter {
        name: params.name,
        email: params.email,
    }
    .normalized();

    let result = state
        .translators
        .fetch_translators(
            params.page.unwrap_or(0),
            params.size.unwrap_or(DEFAULT_PAGE_SIZE),
            &filter,
        )
        .await;

    Json(ViewModel::render(
        "translator",
        state.ui,
        state.toast.clone(),
        filter,
        result,
    ))
}
