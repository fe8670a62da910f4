use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;
use crate::models::UserId;
use crate::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: Option<String>,
}

fn bearer_token(req: &Request) -> Result<&str, Error> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| Error::Unauthorized("missing_authorization".into()))?;
    let auth_str = auth_header
        .to_str()
        .map_err(|_| Error::Unauthorized("bad_authorization".into()))?;
    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| Error::Unauthorized("unsupported_scheme".into()))
}

pub fn decode_claims(token: &str, secret: &str) -> Result<Claims, Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| Error::Unauthorized("invalid_token".into()))
}

pub async fn require_bearer_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let claims = match bearer_token(&req)
        .and_then(|token| decode_claims(token, &state.config.jwt_secret))
    {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(error = %err, "request rejected by bearer auth");
            return err.into_response();
        }
    };
    req.extensions_mut().insert(claims);
    next.run(req).await
}

/// The authenticated caller, taken from the token subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .ok_or_else(|| Error::Unauthorized("missing_authorization".into()))?;
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| Error::Unauthorized("invalid_subject".into()))?;
        Ok(CurrentUser(UserId(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(sub: &str, exp: usize, secret: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            exp,
            role: Some("student".into()),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn in_an_hour() -> usize {
        (chrono::Utc::now().timestamp() + 3600) as usize
    }

    #[test]
    fn decodes_valid_token() {
        let user = Uuid::new_v4().to_string();
        let claims = decode_claims(&token(&user, in_an_hour(), "secret"), "secret").unwrap();
        assert_eq!(claims.sub, user);
    }

    #[test]
    fn rejects_wrong_secret_and_expired_tokens() {
        let user = Uuid::new_v4().to_string();
        assert!(decode_claims(&token(&user, in_an_hour(), "other"), "secret").is_err());
        assert!(decode_claims(&token(&user, 1_000, "secret"), "secret").is_err());
    }

    #[test]
    fn bearer_prefix_is_required() {
        let req = axum::http::Request::builder()
            .header(header::AUTHORIZATION, "Basic abc")
            .body(axum::body::Body::empty())
            .unwrap();
        assert!(matches!(bearer_token(&req), Err(Error::Unauthorized(msg)) if msg == "unsupported_scheme"));
    }
}
