//! This module maps application-level failures, such as an unknown route, onto
//! the `error_message` panel and sets the matching HTTP status on the server.

use http::status::StatusCode;
use leptos::prelude::*;
use thiserror::Error;

use crate::{components::error_message, navigation::SharedNavigator};

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders the error page for `error`.
///
/// On the server, the response status is set from [`AppError::status_code`]
/// when a response context is available.
pub fn component(error: AppError, navigator: SharedNavigator) -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            tracing::debug!(status = %error.status_code(), "setting error response status");
            response.set_status(error.status_code());
        }
    }

    error_message::component(error.to_string(), navigator)
}
