//! 음료 도메인 엔티티

pub mod drink;

pub use drink::*;
