pub mod password;

use std::sync::Arc;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    domain::value_objects::iam::UserModel,
    infrastructure::axum_http::error_responses::AppError,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct SellerClaims {
    pub sub: String,
    pub store_id: String,
    pub email: String,
    pub exp: usize,
}

/// Signing material for seller tokens, shared with handlers through a request extension.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtKeys {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_seconds),
        }
    }

    pub fn issue_token(&self, user: &UserModel, now: DateTime<Utc>) -> anyhow::Result<String> {
        let exp = (now + self.ttl).timestamp().max(0) as usize;
        let claims = SellerClaims {
            sub: user.id.to_string(),
            store_id: user.store_id.to_string(),
            email: user.email.clone(),
            exp,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        Ok(token)
    }

    pub fn validate_token(&self, token: &str) -> anyhow::Result<SellerClaims> {
        let validation = Validation::new(jsonwebtoken::Algorithm::HS256);
        let token_data = decode::<SellerClaims>(token, &self.decoding, &validation)
            .map_err(|e| anyhow::anyhow!("JWT validation failed: {}", e))?;
        Ok(token_data.claims)
    }
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub store_id: Uuid,
}

impl TryFrom<SellerClaims> for AuthUser {
    type Error = AppError;

    fn try_from(claims: SellerClaims) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid user ID in token".to_string()))?;
        let store_id = Uuid::parse_str(&claims.store_id)
            .map_err(|_| AppError::Unauthorized("Invalid store ID in token".to_string()))?;
        Ok(AuthUser { user_id, store_id })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = parts
            .extensions
            .get::<Arc<JwtKeys>>()
            .cloned()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("JWT keys are not configured")))?;

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    AppError::Unauthorized("Missing or malformed Authorization header".to_string())
                })?;

        let claims = keys
            .validate_token(bearer.token())
            .map_err(|e| AppError::Unauthorized(e.to_string()))?;

        AuthUser::try_from(claims)
    }
}
