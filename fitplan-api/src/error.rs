use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use fitplan_db::StoreError;
use fitplan_engine::EngineError;
use fitplan_model::{metrics::MetricsError, profile::ProfileError, report::ErrorBody};
use log::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Model not loaded")]
    ModelUnavailable,
    #[error("Profile store unavailable")]
    StoreUnavailable,
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ModelUnavailable | ApiError::StoreUnavailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

impl From<MetricsError> for ApiError {
    fn from(e: MetricsError) -> Self {
        ApiError::InvalidInput(e.to_string())
    }
}

impl From<ProfileError> for ApiError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::Incomplete => ApiError::NotFound(e.to_string()),
            ProfileError::Invalid(e) => e.into(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        error!("Recommendation failed: {}", e);
        ApiError::Internal(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        error!("Profile lookup failed: {}", e);
        ApiError::StoreUnavailable
    }
}

/// Reports unreadable request bodies in the same `{error}` shape as every
/// other failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidInput(format!("Invalid request body: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let test_data = [
            (ApiError::InvalidInput("x".to_owned()), 400),
            (ApiError::NotFound("x".to_owned()), 404),
            (ApiError::Internal("x".to_owned()), 500),
            (ApiError::ModelUnavailable, 503),
            (ApiError::StoreUnavailable, 503),
        ];

        for (i, (error, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(error.status_code().as_u16(), expected, "Test case #{}", i);
        }
    }

    #[test]
    fn incomplete_profile_is_not_found() {
        let error: ApiError = ProfileError::Incomplete.into();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);

        let error: ApiError =
            ProfileError::Invalid(MetricsError::InvalidGender("other".to_owned())).into();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }
}
