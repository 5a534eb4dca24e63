use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use shelf_api::ApiError;
use shelf_patch::PatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("malformed request body: {0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<PatchError> for ServerError {
    fn from(err: PatchError) -> Self {
        Self::Api(ApiError::Patch(err))
    }
}

impl ServerError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Api(err) => api_status(err),
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn api_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::TypeNotFound { .. } | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        ApiError::AlreadyExists(_) => StatusCode::CONFLICT,
        ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ApiError::InvalidResource(_) => StatusCode::BAD_REQUEST,
        ApiError::Patch(err) => match err.root_cause() {
            PatchError::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            PatchError::MalformedPatch(_)
            | PatchError::MalformedMergePatch(_)
            | PatchError::InvalidPointer { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        },
        ApiError::MalformedTypeDefinition { .. } | ApiError::Store(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let mut body = json!({ "error": self.to_string() });
        if let Self::Api(ApiError::Validation { violations, .. }) = &self {
            body["violations"] = json!(violations);
        }
        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_store::StoreError;
    use shelf_types::ResourceKey;

    fn key() -> ResourceKey {
        ResourceKey::new("test", "Foo", "foo1")
    }

    #[test]
    fn api_errors_map_to_statuses() {
        let cases = [
            (
                ApiError::TypeNotFound { package: "p".into(), plural: "xs".into() },
                StatusCode::NOT_FOUND,
            ),
            (ApiError::NotFound(key()), StatusCode::NOT_FOUND),
            (ApiError::AlreadyExists(key()), StatusCode::CONFLICT),
            (
                ApiError::Validation { key: key(), violations: vec![] },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (ApiError::InvalidResource("x".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::MalformedTypeDefinition { name: "n".into(), reason: "r".into() },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::Store(StoreError::Poisoned("lock".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ServerError::Api(err).status(), status);
        }
    }

    #[test]
    fn patch_errors_map_by_root_cause() {
        let failed = PatchError::Operation {
            index: 1,
            op: "test",
            source: Box::new(PatchError::TestFailed { path: "/a".into() }),
        };
        assert_eq!(ServerError::from(failed).status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            ServerError::from(PatchError::UnsupportedContentType("text/plain".into())).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ServerError::from(PatchError::MalformedPatch("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn other_errors() {
        assert_eq!(ServerError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServerError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
