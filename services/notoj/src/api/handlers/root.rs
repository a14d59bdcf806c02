//! Undocumented banner route.

use axum::response::IntoResponse;

// axum handler for the bare root path, kept out of the OpenAPI spec
pub async fn root() -> impl IntoResponse {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))
}
