use crate::checklist::UnknownTaskId;
use crate::counter::InvalidPresetId;
use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<InvalidPresetId> for AppError {
    fn from(err: InvalidPresetId) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<UnknownTaskId> for AppError {
    fn from(err: UnknownTaskId) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
