//! # Configuration Module
//!
//! 서비스 설정을 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`environment`] - 프론트엔드가 시작 시 읽는 정적 환경 레코드 (API 주소, Auth0 설정)
//! - [`data_config`] - 서버 바인딩, Rate Limiting, MongoDB, CORS 설정
//!
//! 환경 레코드는 컴파일 타임 상수이며 환경 변수로 바뀌지 않습니다.
//! 서버 측 설정만 `.env` 파일 또는 환경 변수로 조정합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정 (기본값은 apiServerUrl의 호스트/포트)
//! export HOST="127.0.0.1"
//! export PORT="5000"
//! export WORKERS="4"
//!
//! # 저장소 (설정하지 않으면 인메모리 저장소)
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="coffee_shop"
//! export DB_RESET_ON_STARTUP="false"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # callbackURL 외에 추가로 허용할 Origin
//! export CORS_ALLOWED_ORIGINS="http://localhost:8100"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{environment, ServerConfig};
//!
//! let audience = environment().auth0.audience;
//! let address = ServerConfig::bind_address();
//! ```

pub mod data_config;
pub mod environment;

pub use data_config::*;
pub use environment::*;
