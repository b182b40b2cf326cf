//! 음료 카탈로그 서비스

pub mod drink_service;

pub use drink_service::*;
