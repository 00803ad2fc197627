use api_types::error::ErrorResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{app, run, run_with_listener, spawn_with_listener};

mod cost;
mod materials;
mod server;

/// Engine failure surfaced over HTTP.
///
/// The boundary reports every engine error as a 500 with the error message
/// in the `{success: false, error}` envelope; no partial breakdown is ever
/// returned alongside a failure.
pub struct ServerError(EngineError);

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let ServerError(err) = self;
        tracing::error!("quote failed: {err}");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                success: false,
                error: err.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_invalid_quantity_maps_to_500() {
        let res = ServerError::from(EngineError::InvalidQuantity("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn engine_invalid_speed_maps_to_500() {
        let res =
            ServerError::from(EngineError::InvalidCuttingSpeed("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
