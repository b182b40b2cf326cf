//! 인증 관련 도메인 모델

pub mod authenticated_user;
pub mod claims;
pub mod permissions;

pub use authenticated_user::*;
pub use claims::*;
