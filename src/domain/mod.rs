//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 음료, 재료 (저장되는 객체)
//! ├── dto       - 음료 API 요청/응답
//! └── models    - Auth0 클레임, 인증된 사용자, 권한 이름
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod dto;
pub mod entities;
pub mod models;
