//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - 음료 카탈로그 관리 (조회, 생성, 수정, 삭제)
//! - Auth0 토큰 검증 및 권한 확인
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::drinks::DrinkService;
//!
//! let service = DrinkService::new(repository);
//! let drinks = service.list_short().await?;
//! ```

pub mod auth;
pub mod drinks;
