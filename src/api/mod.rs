//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod audit;
mod devices;
mod employees;
mod events;
mod login;
mod settings;
mod sync;
mod users;

pub use audit::*;
pub use devices::*;
pub use employees::*;
pub use events::*;
pub use login::*;
pub use settings::*;
pub use sync::*;
pub use users::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope. Every response carries the live sync
/// status so the presentation layer can keep its indicator current.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub sync_status: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, sync_status: &str) -> Self {
        Self {
            success: true,
            data,
            sync_status: sync_status.to_string(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppErrorWithStatus>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, sync_status: &str) -> ApiResult<T> {
    Ok(ApiResponse::new(data, sync_status))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: crate::errors::AppError, sync_status: &str) -> ApiResult<T> {
    Err(crate::errors::AppErrorWithStatus {
        error: err,
        sync_status: sync_status.to_string(),
    })
}
