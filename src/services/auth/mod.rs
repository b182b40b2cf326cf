//! Auth0 인증 서비스 모듈
//!
//! Auth0가 발급한 RS256 액세스 토큰을 검증하고 권한(permission)을 확인합니다.
//!
//! # Features
//!
//! - 테넌트 JWKS 기반 서명 검증 ([`RemoteKeyStore`])
//! - `exp`, `aud`, `iss` 클레임 검증 ([`TokenVerifier`])
//! - RBAC 권한 확인 ([`check_permission`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{RemoteKeyStore, TokenVerifier};
//!
//! let keys = Arc::new(RemoteKeyStore::from_environment(environment())?);
//! let verifier = TokenVerifier::from_environment(environment(), keys);
//! let claims = verifier.verify(token).await?;
//! ```

pub mod key_store;
pub mod token_verifier;

pub use key_store::*;
pub use token_verifier::*;
