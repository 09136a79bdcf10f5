//! Transient on-screen notifications (toasts) shown for operation results.

use crate::error::ApiError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Display behaviour shared by every toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastOptions {
    pub position: ToastPosition,
    /// Auto-dismiss delay in milliseconds.
    pub timeout: u64,
    pub close_on_click: bool,
    pub pause_on_focus_loss: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
    pub show_close_button_on_hover: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopRight,
            timeout: 3000,
            close_on_click: true,
            pause_on_focus_loss: true,
            pause_on_hover: true,
            draggable: true,
            show_close_button_on_hover: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

impl From<&ApiError> for Notification {
    fn from(err: &ApiError) -> Self {
        Notification::error(err.user_message())
    }
}
