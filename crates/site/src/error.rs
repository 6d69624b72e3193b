use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use agropure_content::ContentError;
use agropure_core::error::CoreError;

/// Application-level error type for page handlers.
///
/// Implements [`IntoResponse`] to produce self-contained HTML error pages:
/// content-absent states never reach here (the fallback merge handles
/// them); what remains is not-found slugs, content-store failures, and
/// template failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `agropure_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A content-store boundary failure.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// A template rendering failure.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, slug }) => {
                tracing::debug!(entity, slug = %slug, "page not found");
                (
                    StatusCode::NOT_FOUND,
                    "Page Not Found",
                    "The page you are looking for does not exist.",
                )
            }
            AppError::Core(err) => {
                tracing::error!(error = %err, "domain error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something Went Wrong",
                    "An internal error occurred. Please try again later.",
                )
            }
            AppError::Content(err) => {
                tracing::error!(error = %err, "content store unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    "Content Unavailable",
                    "We could not load the page content. Please try again shortly.",
                )
            }
            AppError::Template(err) => {
                tracing::error!(error = %err, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something Went Wrong",
                    "An internal error occurred. Please try again later.",
                )
            }
        };

        (status, Html(error_page(title, message))).into_response()
    }
}

/// Minimal self-contained error page (no template set required).
pub fn error_page(title: &str, message: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · AgroPure</title>
<style>
body{{margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;background:#1a1410;color:#fef5e7;font-family:Inter,system-ui,sans-serif;text-align:center}}
a{{color:#d4a853}}
</style>
</head>
<body>
<main>
<h1>{title}</h1>
<p>{message}</p>
<p><a href="/">Back to home</a></p>
</main>
</body>
</html>
"#
    )
}
