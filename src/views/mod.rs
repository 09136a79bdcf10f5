//! Top-level screens, served as JSON view models.

mod document;
mod translator;

pub use document::{document_view, DocumentViewParams};
pub use translator::{translator_view, TranslatorViewParams};

use crate::error::ApiError;
use crate::locale::{locale_options, LocaleOption};
use crate::models::Page;
use crate::notification::{Notification, ToastOptions};
use crate::ui::UiSettings;
use serde::Serialize;
use tracing::error;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Everything a screen needs to render one paginated list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel<T: Serialize, F: Serialize> {
    pub view: &'static str,
    pub ui: UiSettings,
    pub toast: ToastOptions,
    /// Choices for the locale fields of the edit forms.
    pub locales: Vec<LocaleOption>,
    pub filter: F,
    pub page: Option<Page<T>>,
    pub has_next: bool,
    pub has_previous: bool,
    pub notification: Option<Notification>,
}

impl<T: Serialize, F: Serialize> ViewModel<T, F> {
    /// Render a list result; a failure becomes an error notification instead
    /// of failing the whole view.
    pub fn render(
        view: &'static str,
        ui: UiSettings,
        toast: ToastOptions,
        filter: F,
        result: Result<Page<T>, ApiError>,
    ) -> Self {
        let (page, notification) = match result {
            Ok(page) => (Some(page), None),
            Err(e) => {
                error!(view = view, error = %e, "Failed to load list");
                (None, Some(Notification::from(&e)))
            }
        };

        let (has_next, has_previous) = page
            .as_ref()
            .map(|p| (p.page.has_next(), p.page.has_previous()))
            .unwrap_or((false, false));

        Self {
            view,
            ui,
            toast,
            locales: locale_options(),
            filter,
            page,
            has_next,
            has_previous,
            notification,
        }
    }
}
