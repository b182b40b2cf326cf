//! 에러 타입 모듈
//!
//! [`AppError`]와 Auth0 전용 [`AuthError`]를 제공합니다.

pub mod errors;

pub use errors::*;
