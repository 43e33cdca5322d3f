use axum::{extract::Request, middleware::Next, response::Response};
use forkframe_core::domain::saved_recipe::value_objects::{DEFAULT_DEVICE_ID, validate_device_id};
use tracing::warn;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const DEVICE_ID_HEADER: &str = "x-device-id";

/// Device context stored in request extensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceContext {
    pub device_id: String,
}

/// Resolves the calling device from the `X-Device-Id` header. Requests
/// without one share the default device.
pub async fn device_middleware(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let device_id = match req.headers().get(DEVICE_ID_HEADER) {
        None => DEFAULT_DEVICE_ID.to_string(),
        Some(value) => value
            .to_str()
            .map_err(|_| ApiError::BadRequest("x-device-id must be ASCII".to_string()))?
            .trim()
            .to_string(),
    };

    validate_device_id(&device_id).map_err(|e| {
        warn!(%device_id, "Rejected device id");
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(DeviceContext { device_id });

    Ok(next.run(req).await)
}
