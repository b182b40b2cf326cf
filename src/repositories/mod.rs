//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 음료 카탈로그를 MongoDB 또는 인메모리 저장소에 보관합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::drinks::{DrinkRepository, InMemoryDrinkRepository};
//!
//! let repo = InMemoryDrinkRepository::new();
//! let drink = repo.find(1).await?;
//! ```

pub mod drinks;
