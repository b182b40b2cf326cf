//! 프론트엔드 환경 레코드
//!
//! Ionic 프론트엔드가 시작 시점에 읽어 들이는 정적 설정입니다.
//! 컴파일 타임에 생성되는 `static` 값이며 프로세스가 종료될 때까지 변경되지 않습니다.
//! 잠금 없이 여러 스레드에서 동시에 읽어도 안전합니다.
//!
//! 직렬화 형태는 프론트엔드의 `environment` 객체와 동일합니다.
//!
//! ```json
//! {
//!   "production": false,
//!   "apiServerUrl": "http://127.0.0.1:5000",
//!   "auth0": {
//!     "url": "dev-bq85-qwa.us",
//!     "audience": "coffee",
//!     "clientId": "oEiXeWOCjbIv5Cp65Hvo8urId6fSA4J8",
//!     "callbackURL": "http://127.0.0.1:8100"
//!   }
//! }
//! ```

use reqwest::Url;
use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// 프론트엔드 환경 레코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// 빌드/런타임 모드 플래그
    pub production: bool,
    /// 백엔드 API 기본 주소
    pub api_server_url: &'static str,
    /// Auth0 설정
    pub auth0: Auth0Settings,
}

/// Auth0 테넌트 및 애플리케이션 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Auth0Settings {
    /// Auth0 도메인 접두사 (`{url}.auth0.com`)
    pub url: &'static str,
    /// 토큰 검증에 사용하는 API audience
    pub audience: &'static str,
    /// Auth0에 등록된 공개 클라이언트 ID
    pub client_id: &'static str,
    /// 로그인 완료 후 리디렉션될 프론트엔드 주소
    #[serde(rename = "callbackURL")]
    pub callback_url: &'static str,
}

/// 프로세스 수명 동안 변하지 않는 프론트엔드 환경 레코드
static ENVIRONMENT: Environment = Environment {
    production: false,
    api_server_url: "http://127.0.0.1:5000",
    auth0: Auth0Settings {
        url: "dev-bq85-qwa.us",
        audience: "coffee",
        client_id: "oEiXeWOCjbIv5Cp65Hvo8urId6fSA4J8",
        callback_url: "http://127.0.0.1:8100",
    },
};

/// 환경 레코드에 대한 읽기 전용 접근자
pub fn environment() -> &'static Environment {
    &ENVIRONMENT
}

impl Environment {
    /// 레코드가 사용 가능한 상태인지 검증합니다.
    ///
    /// 모든 필드가 비어 있지 않아야 하며, `apiServerUrl`과 `callbackURL`은
    /// 절대 경로 http(s) URL이어야 합니다. 서버 부팅 시 한 번 호출됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 비어 있는 필드 또는 잘못된 URL
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("apiServerUrl", self.api_server_url),
            ("auth0.url", self.auth0.url),
            ("auth0.audience", self.auth0.audience),
            ("auth0.clientId", self.auth0.client_id),
            ("auth0.callbackURL", self.auth0.callback_url),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::ConfigError(format!("{} must not be empty", name)));
            }
        }

        parse_http_url("apiServerUrl", self.api_server_url)?;
        parse_http_url("auth0.callbackURL", self.auth0.callback_url)?;

        Ok(())
    }

    /// `apiServerUrl`을 파싱한 결과를 반환합니다.
    pub fn api_server(&self) -> AppResult<Url> {
        parse_http_url("apiServerUrl", self.api_server_url)
    }
}

impl Auth0Settings {
    /// Auth0 테넌트 도메인 (`dev-bq85-qwa.us.auth0.com`)
    pub fn domain(&self) -> String {
        format!("{}.auth0.com", self.url)
    }

    /// 토큰의 `iss` 클레임과 비교되는 발급자 URL
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    /// 서명 검증용 공개키 집합 주소
    pub fn jwks_uri(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain())
    }

    /// 프론트엔드가 사용하는 Auth0 로그인 링크를 생성합니다.
    ///
    /// implicit flow(`response_type=token`)로 액세스 토큰을 받아
    /// `callbackURL`로 돌아오는 `/authorize` URL 입니다.
    pub fn login_url(&self) -> String {
        format!(
            "https://{}/authorize?audience={}&response_type=token&client_id={}&redirect_uri={}",
            self.domain(),
            urlencoding::encode(self.audience),
            urlencoding::encode(self.client_id),
            urlencoding::encode(self.callback_url),
        )
    }
}

fn parse_http_url(name: &str, value: &str) -> AppResult<Url> {
    let url = Url::parse(value)
        .map_err(|e| AppError::ConfigError(format!("{} is not a valid URL: {}", name, e)))?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(AppError::ConfigError(format!(
            "{} must be an absolute http(s) URL",
            name
        ))),
    }
}
