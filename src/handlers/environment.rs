//! 프론트엔드 환경 레코드 핸들러

use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::config::environment;

/// 프론트엔드가 시작 시 읽는 환경 레코드를 그대로 반환합니다.
#[get("/environment")]
pub async fn get_environment() -> HttpResponse {
    HttpResponse::Ok().json(environment())
}

/// Auth0 로그인 링크 (implicit flow)
#[get("/auth/login-url")]
pub async fn get_login_url() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "url": environment().auth0.login_url(),
    }))
}
