//! Auth0 액세스 토큰 검증 서비스
//!
//! Authorization 헤더에서 Bearer 토큰을 추출하고, 테넌트 JWKS의 공개키로
//! RS256 서명과 `exp`/`aud`/`iss` 클레임을 검증한 뒤 권한을 확인합니다.
//!
//! ```rust,ignore
//! let verifier = TokenVerifier::from_environment(environment(), key_store);
//!
//! let token = extract_bearer_token(header)?;
//! let claims = verifier.verify(token).await?;
//! check_permission(&claims, "post:drinks")?;
//! ```

use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

use crate::config::Environment;
use crate::domain::models::auth::Auth0Claims;
use crate::errors::{AppResult, AuthError};
use crate::services::auth::KeyStore;

/// RS256 토큰 검증기
pub struct TokenVerifier {
    audience: String,
    issuer: String,
    keys: Arc<dyn KeyStore>,
}

impl TokenVerifier {
    pub fn new(audience: impl Into<String>, issuer: impl Into<String>, keys: Arc<dyn KeyStore>) -> Self {
        Self {
            audience: audience.into(),
            issuer: issuer.into(),
            keys,
        }
    }

    /// 환경 레코드의 Auth0 audience와 issuer로 검증기를 생성합니다.
    pub fn from_environment(env: &Environment, keys: Arc<dyn KeyStore>) -> Self {
        Self::new(env.auth0.audience, env.auth0.issuer(), keys)
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `invalid_header` (401) - 헤더를 읽을 수 없거나 `kid`가 없음
    /// * `invalid_header` (400) - 일치하는 공개키가 없거나 토큰을 해석할 수 없음
    /// * `token_expired` (401) - 만료된 토큰
    /// * `invalid_claims` (401) - audience 또는 issuer 불일치
    pub async fn verify(&self, token: &str) -> AppResult<Auth0Claims> {
        let header = decode_header(token).map_err(|_| AuthError::malformed())?;
        let kid = header.kid.ok_or_else(AuthError::malformed)?;

        let jwk = self.keys.find_key(&kid).await?;
        let decoding_key = DecodingKey::from_jwk(&jwk).map_err(|_| AuthError::unparsable())?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);

        let data = decode::<Auth0Claims>(token, &decoding_key, &validation).map_err(|e| {
            log::debug!("토큰 검증 실패: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::token_expired(),
                ErrorKind::InvalidAudience
                | ErrorKind::InvalidIssuer
                | ErrorKind::MissingRequiredClaim(_) => AuthError::invalid_claims(),
                _ => AuthError::unparsable(),
            }
        })?;

        Ok(data.claims)
    }
}

/// Authorization 헤더 값에서 Bearer 토큰을 추출합니다.
///
/// 스킴 비교는 대소문자를 구분하지 않습니다.
pub fn extract_bearer_token(auth_header: &str) -> Result<&str, AuthError> {
    let parts: Vec<&str> = auth_header.split_whitespace().collect();

    match parts.as_slice() {
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(AuthError::not_bearer()),
        [] => Err(AuthError::not_bearer()),
        [_] => Err(AuthError::token_not_found()),
        [_, token] => Ok(*token),
        _ => Err(AuthError::not_bearer_token()),
    }
}

/// 클레임에 요구 권한이 포함되어 있는지 확인합니다.
///
/// # Errors
///
/// * `invalid_claims` (400) - `permissions` 클레임 자체가 없음
/// * `unauthorized` (403) - 권한이 부여되지 않음
pub fn check_permission(claims: &Auth0Claims, permission: &str) -> Result<(), AuthError> {
    if claims.permissions.is_none() {
        return Err(AuthError::permissions_missing());
    }

    if claims.has_permission(permission) {
        Ok(())
    } else {
        Err(AuthError::permission_denied())
    }
}
