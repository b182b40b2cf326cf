//! 커피숍 메뉴 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 음료 저장소와 Auth0 토큰 검증기를 초기화하고 `web::Data`로 공유합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use coffee_shop_backend::config::{
    environment, CorsConfig, DatabaseConfig, RateLimitConfig, ServerConfig,
};
use coffee_shop_backend::db::Database;
use coffee_shop_backend::errors::{AppError, AppResult};
use coffee_shop_backend::handlers;
use coffee_shop_backend::repositories::drinks::{
    DrinkRepository, InMemoryDrinkRepository, MongoDrinkRepository,
};
use coffee_shop_backend::routes::configure_all_routes;
use coffee_shop_backend::services::auth::{RemoteKeyStore, TokenVerifier};
use coffee_shop_backend::services::drinks::DrinkService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_logging();

    info!("☕ 커피숍 메뉴 서비스 시작중...");

    let (drink_service, verifier) = initialize_services().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(drink_service, verifier).await
}

/// 환경 레코드 검증, 음료 저장소, 토큰 검증기를 초기화합니다
///
/// # Errors
///
/// * `AppError::ConfigError` - 환경 레코드 값이 잘못된 경우
/// * `AppError::DatabaseError` - MongoDB 연결 또는 시드 실패
async fn initialize_services() -> AppResult<(DrinkService, TokenVerifier)> {
    let env = environment();
    env.validate()?;

    info!(
        "Auth0 테넌트: {} (audience: {})",
        env.auth0.domain(),
        env.auth0.audience
    );

    let repository = initialize_repository().await?;
    let keys = Arc::new(RemoteKeyStore::from_environment(env)?);
    info!("🔑 JWKS: {}", keys.jwks_uri());

    let verifier = TokenVerifier::from_environment(env, keys);

    Ok((DrinkService::new(repository), verifier))
}

/// 음료 저장소를 초기화합니다
///
/// `MONGODB_URI`가 있으면 MongoDB, 없으면 인메모리 저장소를 사용합니다.
/// 인메모리 저장소나 `DB_RESET_ON_STARTUP=true`인 경우
/// 카탈로그를 비우고 기본 음료(water)를 시드합니다.
async fn initialize_repository() -> AppResult<Arc<dyn DrinkRepository>> {
    let (repository, reset): (Arc<dyn DrinkRepository>, bool) = match DatabaseConfig::mongodb_uri()
    {
        Some(uri) => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::connect(&uri, &DatabaseConfig::database_name()).await?;
            info!("✅ MongoDB 연결 성공: {}", database.database_name());

            let repository = MongoDrinkRepository::new(&database).await?;
            (Arc::new(repository), DatabaseConfig::reset_on_startup())
        }
        None => {
            info!("💾 MONGODB_URI 미설정, 인메모리 저장소 사용");
            (Arc::new(InMemoryDrinkRepository::new()), true)
        }
    };

    if reset {
        let seeded = repository.reset().await?;
        info!("🌱 음료 카탈로그 초기화: {} (id={})", seeded.title, seeded.id);
    }

    Ok(repository)
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    drink_service: DrinkService,
    verifier: TokenVerifier,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::other(AppError::ConfigError(
                "rate limit values must be greater than zero".to_string(),
            ))
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    info!("CORS 허용 Origin: {:?}", allowed_origins);

    let drink_service = web::Data::new(drink_service);
    let verifier = web::Data::new(verifier);

    HttpServer::new(move || {
        App::new()
            .app_data(drink_service.clone())
            .app_data(verifier.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
            .default_service(web::route().to(handlers::not_found))
    })
    .bind(&bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=coffee_shop_backend::middlewares=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// Ionic 앱(`callbackURL`)과 `CORS_ALLOWED_ORIGINS`의 Origin만 허용합니다.
/// 프론트엔드는 쿠키 없이 `Authorization` 헤더로 토큰을 보냅니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
