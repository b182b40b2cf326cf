//! Auth0 서명 공개키 저장소
//!
//! 토큰 헤더의 `kid`로 서명 검증에 사용할 JWK를 찾습니다.
//!
//! - [`RemoteKeyStore`] - 테넌트의 `/.well-known/jwks.json`을 가져와 캐싱
//! - [`StaticKeyStore`] - 고정된 키 집합 (테스트, 키 고정 배포)

use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::{Jwk, JwkSet};
use log::{debug, info, warn};

use crate::config::Environment;
use crate::errors::{AppError, AppResult, AuthError, ErrorContext};

/// `kid`로 JWK를 조회하는 저장소
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// 주어진 `kid`에 해당하는 키를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Auth` (`invalid_header`, 400) - 일치하는 키가 없는 경우
    /// * `AppError::ExternalServiceError` - 키 집합을 가져오지 못한 경우
    async fn find_key(&self, kid: &str) -> AppResult<Jwk>;
}

/// 고정된 키 집합
pub struct StaticKeyStore {
    keys: JwkSet,
}

impl StaticKeyStore {
    pub fn new(keys: JwkSet) -> Self {
        Self { keys }
    }
}

#[async_trait]
impl KeyStore for StaticKeyStore {
    async fn find_key(&self, kid: &str) -> AppResult<Jwk> {
        self.keys
            .find(kid)
            .cloned()
            .ok_or_else(|| AuthError::key_not_found().into())
    }
}

/// 캐시에 없는 `kid`로 JWKS를 다시 가져오기 전 최소 대기 시간
pub const DEFAULT_REFETCH_INTERVAL: Duration = Duration::from_secs(60);

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

/// Auth0 테넌트의 JWKS 엔드포인트를 사용하는 저장소
///
/// 처음 요청 시 키 집합을 가져와 캐싱하고, 캐시에 없는 `kid`가 들어오면
/// (키 순환 직후) 한 번 더 가져옵니다. 재요청은 `refetch_interval`에 한 번으로 제한됩니다.
pub struct RemoteKeyStore {
    jwks_uri: String,
    client: reqwest::Client,
    refetch_interval: Duration,
    cache: RwLock<Option<CachedKeys>>,
}

impl RemoteKeyStore {
    pub fn new(jwks_uri: impl Into<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("JWKS HTTP 클라이언트 생성 실패")?;

        Ok(Self {
            jwks_uri: jwks_uri.into(),
            client,
            refetch_interval: DEFAULT_REFETCH_INTERVAL,
            cache: RwLock::new(None),
        })
    }

    /// 환경 레코드의 Auth0 도메인으로 저장소를 생성합니다.
    pub fn from_environment(env: &Environment) -> AppResult<Self> {
        Self::new(env.auth0.jwks_uri())
    }

    pub fn with_refetch_interval(mut self, interval: Duration) -> Self {
        self.refetch_interval = interval;
        self
    }

    pub fn jwks_uri(&self) -> &str {
        &self.jwks_uri
    }

    fn cached(&self, kid: &str) -> Option<Jwk> {
        let guard = self.cache.read().ok()?;
        guard.as_ref()?.keys.find(kid).cloned()
    }

    /// 마지막 요청 후 `refetch_interval`이 지나지 않았으면 `true`
    fn recently_fetched(&self) -> bool {
        self.cache
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|c| c.fetched_at.elapsed() < self.refetch_interval))
            .unwrap_or(false)
    }

    async fn fetch(&self) -> AppResult<JwkSet> {
        debug!("JWKS 요청: {}", self.jwks_uri);

        let response = self
            .client
            .get(&self.jwks_uri)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::ExternalServiceError(format!("JWKS 요청 실패: {}", e)))?;

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("JWKS 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl KeyStore for RemoteKeyStore {
    async fn find_key(&self, kid: &str) -> AppResult<Jwk> {
        if let Some(key) = self.cached(kid) {
            return Ok(key);
        }

        if self.recently_fetched() {
            warn!("알 수 없는 kid (JWKS 재요청 대기 중): {}", kid);
            return Err(AuthError::key_not_found().into());
        }

        let keys = self.fetch().await?;
        info!("🔑 JWKS 갱신: 키 {}개", keys.keys.len());

        let found = keys.find(kid).cloned();

        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(CachedKeys {
                keys,
                fetched_at: Instant::now(),
            });
        }

        found.ok_or_else(|| {
            warn!("알 수 없는 kid: {}", kid);
            AuthError::key_not_found().into()
        })
    }
}
