use axum::response::IntoResponse;

/// Service banner for the bare root path, kept out of the OpenAPI document.
pub async fn root() -> impl IntoResponse {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))
}
