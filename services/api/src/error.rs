use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use falcon_common::error::FalconError;

pub struct ApiError(pub FalconError);

impl From<FalconError> for ApiError {
    fn from(err: FalconError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FalconError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            FalconError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_kinds_to_status() {
        let cases = [
            (FalconError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (FalconError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (FalconError::Database("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (FalconError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).into_response().status(), status);
        }
    }
}
