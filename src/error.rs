use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Map, Value as JsonValue};

use crate::models::{DomainError, Language};

pub type Result<T> = std::result::Result<T, Error>;

/// Handler result whose error renders in the caller's language.
pub type ApiResult<T> = std::result::Result<T, LocalizedError>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn localized(self, language: Language) -> LocalizedError {
        LocalizedError {
            error: self,
            language,
        }
    }

    fn problem(&self, language: Language) -> (StatusCode, JsonValue) {
        if let Error::Domain(err) = self {
            let mut body = Map::new();
            body.insert("type".into(), json!(err.kind()));
            body.insert("title".into(), json!(err.title(language)));
            body.insert("detail".into(), json!(err.detail(language)));
            body.insert("status".into(), json!(err.status_code().as_u16()));
            body.extend(err.extensions());
            return (err.status_code(), JsonValue::Object(body));
        }

        let (status, kind, detail) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BadRequest", msg.clone()),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, "ValidationError", err.to_string()),
            Error::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "Unauthorized", msg.clone()),
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "An unexpected error occurred".to_string(),
                )
            }
        };
        let body = json!({
            "type": kind,
            "title": generic_title(kind, language),
            "detail": detail,
            "status": status.as_u16(),
        });
        (status, body)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.localized(Language::En).into_response()
    }
}

fn generic_title(kind: &str, language: Language) -> &'static str {
    let (en, ru, fr) = match kind {
        "BadRequest" => ("Bad request", "Некорректный запрос", "Requête invalide"),
        "ValidationError" => ("Validation failed", "Ошибка валидации", "Échec de la validation"),
        "Unauthorized" => ("Unauthorized", "Требуется авторизация", "Non autorisé"),
        _ => (
            "Internal server error",
            "Внутренняя ошибка сервера",
            "Erreur interne du serveur",
        ),
    };
    match language {
        Language::Ru => ru,
        Language::Fr => fr,
        Language::En => en,
    }
}

/// An [`Error`] paired with the language the caller asked for.
#[derive(Debug)]
pub struct LocalizedError {
    pub error: Error,
    pub language: Language,
}

impl IntoResponse for LocalizedError {
    fn into_response(self) -> Response {
        let (status, body) = self.error.problem(self.language);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApplicationId, UserId};

    #[test]
    fn domain_errors_render_localized_problem() {
        let application_id = ApplicationId::new();
        let user_id = UserId::new();
        let err = Error::from(DomainError::Forbidden {
            application_id,
            user_id,
        });
        let (status, body) = err.problem(Language::Fr);
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["type"], "Forbidden");
        assert_eq!(body["title"], "Accès refusé");
        assert_eq!(body["status"], 403);
        assert_eq!(body["application_id"], json!(application_id));
        assert_eq!(body["user_id"], json!(user_id));
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = Error::Internal("connection string leaked".into());
        let (status, body) = err.problem(Language::En);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "An unexpected error occurred");
    }

    #[test]
    fn bad_request_title_follows_language() {
        let err = Error::BadRequest("missing field `cover_letter`".into());
        let (status, body) = err.problem(Language::Ru);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "BadRequest");
        assert_eq!(body["title"], "Некорректный запрос");
        assert_eq!(body["detail"], "missing field `cover_letter`");
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let response = Error::Unauthorized("missing token".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
