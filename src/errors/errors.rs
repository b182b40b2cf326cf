//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 에러를
//! 프론트엔드가 기대하는 단일 JSON 형태로 변환합니다.
//!
//! ```json
//! { "success": false, "error": 404, "message": "resource not found" }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn find_drink(id: i64) -> Result<Drink, AppError> {
//!     repo.find(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("drink {}", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

/// Auth0 토큰 검증 과정에서 발생하는 에러
///
/// `code`는 프론트엔드가 분기 처리에 사용하는 기계 판독용 식별자이고,
/// `description`은 그대로 응답 `message`로 노출됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{code}: {description}")]
pub struct AuthError {
    pub code: &'static str,
    pub description: String,
    pub status: StatusCode,
}

impl AuthError {
    fn new(code: &'static str, description: &str, status: StatusCode) -> Self {
        Self {
            code,
            description: description.to_string(),
            status,
        }
    }

    pub fn header_missing() -> Self {
        Self::new(
            "authorization_header_missing",
            "Authorization header is expected.",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub fn not_bearer() -> Self {
        Self::new(
            "invalid_header",
            "Authorization header must start with \"Bearer\".",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub fn token_not_found() -> Self {
        Self::new("invalid_header", "Token not found.", StatusCode::UNAUTHORIZED)
    }

    pub fn not_bearer_token() -> Self {
        Self::new(
            "invalid_header",
            "Authorization header must be bearer token.",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub fn malformed() -> Self {
        Self::new("invalid_header", "Authorization malformed.", StatusCode::UNAUTHORIZED)
    }

    pub fn key_not_found() -> Self {
        Self::new(
            "invalid_header",
            "Unable to find the appropriate key.",
            StatusCode::BAD_REQUEST,
        )
    }

    pub fn token_expired() -> Self {
        Self::new("token_expired", "Token expired.", StatusCode::UNAUTHORIZED)
    }

    pub fn invalid_claims() -> Self {
        Self::new(
            "invalid_claims",
            "Incorrect claims. Please, check the audience and issuer.",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub fn unparsable() -> Self {
        Self::new(
            "invalid_header",
            "Unable to parse authentication token.",
            StatusCode::BAD_REQUEST,
        )
    }

    pub fn permissions_missing() -> Self {
        Self::new(
            "invalid_claims",
            "Permissions not included in JWT.",
            StatusCode::BAD_REQUEST,
        )
    }

    pub fn permission_denied() -> Self {
        Self::new("unauthorized", "Permission not found.", StatusCode::FORBIDDEN)
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 핸들러에서 반환되면 자동으로 HTTP 응답으로 변환됩니다.
/// 5xx 계열의 상세 메시지는 로그로만 남기고 클라이언트에는 노출하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 잘못된 요청 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 처리할 수 없는 요청 (422 Unprocessable Entity)
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Auth0 인증/인가 실패 (상태 코드는 `AuthError`가 결정)
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// 설정값 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 노출되는 메시지
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(_) => "Bad request".to_string(),
            AppError::NotFound(_) => "resource not found".to_string(),
            AppError::Unprocessable(_) => "unprocessable".to_string(),
            AppError::Auth(err) => err.description.clone(),
            _ => "internal server error".to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Auth(err) => err.status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("요청 거부: {}", self);
        }

        let mut body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.public_message(),
        });

        if let AppError::Auth(err) = self {
            body["code"] = json!(err.code);
        }

        HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
