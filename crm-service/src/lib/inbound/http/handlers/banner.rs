use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

/// Service banner served at the root path.
pub async fn banner() -> ApiSuccess<BannerResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        BannerResponseData {
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerResponseData {
    pub service: &'static str,
    pub version: &'static str,
}
