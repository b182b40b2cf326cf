//! 커피숍 메뉴 백엔드
//!
//! Ionic 프론트엔드가 사용하는 음료 카탈로그 REST API 입니다.
//! 인증은 Auth0가 담당하며, 이 서비스는 RS256 액세스 토큰과
//! 토큰에 담긴 권한(permission)만 검증합니다.
//!
//! # Features
//!
//! - **음료 카탈로그**: 공개 메뉴(short), 상세 메뉴(long), 생성/수정/삭제
//! - **Auth0 RBAC**: JWKS 기반 서명 검증, 엔드포인트별 권한 확인
//! - **환경 레코드**: 프론트엔드 부트스트랩용 `GET /environment`
//! - **저장소**: MongoDB 또는 인메모리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  AuthMiddleware │ ← Auth0 토큰/권한 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DrinkService   │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DrinkRepository │ ← MongoDB / 인메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use coffee_shop_backend::repositories::drinks::InMemoryDrinkRepository;
//! use coffee_shop_backend::services::drinks::DrinkService;
//!
//! let service = DrinkService::new(Arc::new(InMemoryDrinkRepository::new()));
//! let menu = service.list_short().await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
mod test_support;
