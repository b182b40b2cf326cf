//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Ionic 프론트엔드)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - Auth0 토큰/권한 검증
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`drinks`**: 음료 카탈로그 엔드포인트
//! - **`environment`**: 프론트엔드 환경 레코드, Auth0 로그인 링크
//!
//! 이 모듈은 추출기(extractor) 에러를 공통 에러 응답으로 바꾸는 핸들러도 제공합니다.
//! 잘못된 JSON 본문은 400, 정수가 아닌 경로 ID와 등록되지 않은 경로는 404로 응답합니다.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{Error, HttpRequest, HttpResponse, ResponseError};

use crate::errors::AppError;

pub mod drinks;
pub mod environment;

/// `web::JsonConfig` 에러 핸들러
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    AppError::BadRequest(err.to_string()).into()
}

/// `web::PathConfig` 에러 핸들러
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    AppError::NotFound(err.to_string()).into()
}

/// 등록되지 않은 경로에 대한 기본 핸들러
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    AppError::NotFound(format!("{} {}", req.method(), req.path())).error_response()
}
