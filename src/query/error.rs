use axum::{http::StatusCode, response::IntoResponse};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("'start' should be higher than 0")]
    InvalidStart,
    #[error("'start' can't be higher or equal with 'end'")]
    StartNotBeforeEnd,
    #[error("'end' can't be higher that 'total_data'= {total}")]
    EndOutOfBounds { total: usize },
    // Answered with 500, not 400
    #[error("error : {0}")]
    MalformedBody(String),
}

impl QueryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidStart | Self::StartNotBeforeEnd | Self::EndOutOfBounds { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::MalformedBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
