//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - Auth0 RS256 액세스 토큰 검증
//! - 리소스별 요구 권한(permission) 확인
//! - 사용자 정보를 request extension에 저장
//!
//! 검증기는 `web::Data<TokenVerifier>`로 앱에 등록되어 있어야 합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(web::Data::new(verifier))
//!     .service(
//!         web::resource("/drinks-detail")
//!             .wrap(AuthMiddleware::requires_permission("get:drinks-detail"))
//!             .route(web::get().to(list_drinks_detail))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
