pub mod client;
pub mod config;
pub mod error;
pub mod locale;
pub mod models;
pub mod notification;
pub mod proxy;
pub mod router;
pub mod services;
pub mod startup;
pub mod ui;
pub mod views;

pub use client::ApiClient;
pub use error::{ApiError, ErrorEnvelope};
pub use services::{DocumentService, TranslatorService};
