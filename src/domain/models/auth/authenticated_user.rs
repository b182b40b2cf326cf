use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::models::auth::claims::Auth0Claims;
use crate::errors::{AppError, AuthError};

/// 검증된 Auth0 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Auth0 사용자 ID (`sub`)
    pub user_id: String,

    /// 부여된 권한 목록
    pub permissions: Vec<String>,
}

impl From<Auth0Claims> for AuthenticatedUser {
    fn from(claims: Auth0Claims) -> Self {
        Self {
            user_id: claims.sub,
            permissions: claims.permissions.unwrap_or_default(),
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// `AuthMiddleware`가 Request Extensions에 넣어 둔 사용자를 꺼냅니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::from(AuthError::header_missing()).into())),
        }
    }
}
