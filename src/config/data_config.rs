//! 서버 및 데이터 저장소 설정 관리 모듈
//!
//! 서버 바인딩, 요청 속도 제한, MongoDB, CORS 관련 설정을 환경 변수에서 읽어옵니다.
//! 값이 없거나 파싱에 실패하면 개발용 기본값을 사용합니다.

use std::env;

use log::error;

use crate::config::environment;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: `apiServerUrl`의 호스트 ("127.0.0.1")
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| Self::default_host())
    }

    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: `apiServerUrl`의 포트 (5000)
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or_else(Self::default_port)
    }

    /// HTTP 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|workers| workers.parse().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    fn default_host() -> String {
        environment()
            .api_server()
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "127.0.0.1".to_string())
    }

    fn default_port() -> u16 {
        environment()
            .api_server()
            .ok()
            .and_then(|url| url.port_or_known_default())
            .unwrap_or(5000)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// 파싱에 실패하면 에러 로그를 남기고 기본값을 사용합니다.
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

/// MongoDB 저장소 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI. 설정되지 않으면 인메모리 저장소를 사용합니다.
    pub fn mongodb_uri() -> Option<String> {
        env::var("MONGODB_URI")
            .ok()
            .filter(|uri| !uri.trim().is_empty())
    }

    /// 사용할 데이터베이스 이름. 기본값: "coffee_shop"
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "coffee_shop".to_string())
    }

    /// 시작 시 음료 데이터를 초기화하고 기본 음료를 다시 넣을지 여부. 기본값: false
    ///
    /// !! 활성화하면 기존 음료 데이터가 모두 삭제됩니다.
    pub fn reset_on_startup() -> bool {
        env::var("DB_RESET_ON_STARTUP")
            .map(|value| parse_flag(&value))
            .unwrap_or(false)
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// Auth0 `callbackURL`(Ionic 앱 주소)은 항상 포함되며,
    /// `CORS_ALLOWED_ORIGINS`에 쉼표로 구분된 추가 Origin을 지정할 수 있습니다.
    pub fn allowed_origins() -> Vec<String> {
        let extra = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();
        merge_origins(environment().auth0.callback_url, &extra)
    }
}

fn merge_origins(callback_url: &str, extra: &str) -> Vec<String> {
    let mut origins = vec![callback_url.trim_end_matches('/').to_string()];

    for origin in extra.split(',').map(str::trim).filter(|o| !o.is_empty()) {
        let origin = origin.trim_end_matches('/').to_string();
        if !origins.contains(&origin) {
            origins.push(origin);
        }
    }

    origins
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 5000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_rate_limit_defaults() {
        if env::var("RATE_LIMIT_PER_SECOND").is_err() && env::var("RATE_LIMIT_BURST_SIZE").is_err() {
            assert_eq!(
                RateLimitConfig::load(),
                RateLimitConfig {
                    per_second: 100,
                    burst_size: 200
                }
            );
        }
    }

    #[test]
    fn test_database_name_default() {
        if env::var("DATABASE_NAME").is_err() {
            assert_eq!(DatabaseConfig::database_name(), "coffee_shop");
        }
    }

    #[test]
    fn test_merge_origins_keeps_callback_first() {
        let origins = merge_origins(
            "http://127.0.0.1:8100",
            " http://localhost:8100/, ,http://127.0.0.1:8100",
        );

        assert_eq!(
            origins,
            vec![
                "http://127.0.0.1:8100".to_string(),
                "http://localhost:8100".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
