//! 외부 시스템 통합 모델
//!
//! Auth0 액세스 토큰에서 얻는 클레임과 사용자 정보를 정의합니다.

pub mod auth;
