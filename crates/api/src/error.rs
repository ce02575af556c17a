use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use pashumitra_scheduler_api_structs::send_injection_notifications::APIResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Internal server error")]
    InternalError,
    #[error("Unauthorized request. Error message: `{0}`")]
    Unauthorized(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// A notification run that did not complete. Rendered as the run summary.
    #[error("{0}")]
    NotificationRunFailed(String),
}

impl actix_web::error::ResponseError for NotifierError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotificationRunFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        match self {
            Self::MethodNotAllowed => res.json(serde_json::json!({ "error": self.to_string() })),
            Self::NotificationRunFailed(e) => res.json(APIResponse::failed(e.clone())),
            _ => res
                .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
                .body(self.to_string()),
        }
    }
}
