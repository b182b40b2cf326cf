//! 핵심 도메인 엔티티
//!
//! 저장소에 보관되는 음료와 재료를 정의합니다.

pub mod drinks;
