use serde::Serialize;

pub use pushkind_common::services::errors::{ServiceError, ServiceResult};

pub mod products;

/// User-facing outcome of an operation, rendered next to the page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub message: String,
    /// `true` when the operation completed, `false` for any failure.
    pub success: bool,
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// Instruction to send the user back to the product list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexRedirect {
    /// Error shown on the list page after the redirect.
    pub message: Option<String>,
}

impl IndexRedirect {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Result of a page-level workflow step.
#[derive(Debug)]
pub enum PageOutcome<T> {
    /// Render the page with the given data.
    Render(T),
    /// Abandon the page and go back to the product list.
    Redirect(IndexRedirect),
}
