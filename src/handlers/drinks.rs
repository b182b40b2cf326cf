//! 음료 API 핸들러
//!
//! | Method | Path | 권한 |
//! |--------|------|------|
//! | GET | `/drinks` | 공개 |
//! | GET | `/drinks-detail` | `get:drinks-detail` |
//! | POST | `/drinks` | `post:drinks` |
//! | PATCH | `/drinks/{drink_id}` | `patch:drinks` |
//! | DELETE | `/drinks/{drink_id}` | `delete:drinks` |
//!
//! `drink_id`는 숫자만 매칭되므로, 정수가 아닌 ID는 인증 전에 404로 떨어집니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use log::info;

use crate::domain::dto::drinks::{
    CreateDrinkRequest, DeleteDrinkResponse, DrinksResponse, UpdateDrinkRequest,
};
use crate::domain::models::auth::permissions::{
    DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::drinks::DrinkService;

/// 공개 메뉴 조회 (재료 이름 제외)
#[get("/drinks")]
pub async fn list_drinks(service: web::Data<DrinkService>) -> Result<HttpResponse, AppError> {
    let drinks = service.list_short().await?;
    Ok(HttpResponse::Ok().json(DrinksResponse::ok(drinks)))
}

/// 상세 메뉴 조회
#[get("/drinks-detail", wrap = "AuthMiddleware::requires_permission(GET_DRINKS_DETAIL)")]
pub async fn list_drinks_detail(
    service: web::Data<DrinkService>,
) -> Result<HttpResponse, AppError> {
    let drinks = service.list_long().await?;
    Ok(HttpResponse::Ok().json(DrinksResponse::ok(drinks)))
}

/// 새 음료 생성
///
/// # Request Body
///
/// ```json
/// { "title": "latte", "recipe": [{ "name": "milk", "color": "white", "parts": 3 }] }
/// ```
#[post("/drinks", wrap = "AuthMiddleware::requires_permission(POST_DRINKS)")]
pub async fn create_drink(
    user: AuthenticatedUser,
    service: web::Data<DrinkService>,
    payload: web::Json<CreateDrinkRequest>,
) -> Result<HttpResponse, AppError> {
    let drink = service.create(payload.into_inner()).await?;
    info!("음료 생성 by {}: id={}", user.user_id, drink.id);

    Ok(HttpResponse::Ok().json(DrinksResponse::ok(vec![drink])))
}

/// 음료 수정 (존재하는 필드만 반영)
#[patch("/drinks/{drink_id:\\d+}", wrap = "AuthMiddleware::requires_permission(PATCH_DRINKS)")]
pub async fn update_drink(
    user: AuthenticatedUser,
    service: web::Data<DrinkService>,
    drink_id: web::Path<i64>,
    payload: web::Json<UpdateDrinkRequest>,
) -> Result<HttpResponse, AppError> {
    let drink = service
        .update(drink_id.into_inner(), payload.into_inner())
        .await?;
    info!("음료 수정 by {}: id={}", user.user_id, drink.id);

    Ok(HttpResponse::Ok().json(DrinksResponse::ok(vec![drink])))
}

/// 음료 삭제
#[delete("/drinks/{drink_id:\\d+}", wrap = "AuthMiddleware::requires_permission(DELETE_DRINKS)")]
pub async fn delete_drink(
    user: AuthenticatedUser,
    service: web::Data<DrinkService>,
    drink_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let deleted = service.delete(drink_id.into_inner()).await?;
    info!("음료 삭제 by {}: id={}", user.user_id, deleted);

    Ok(HttpResponse::Ok().json(DeleteDrinkResponse::ok(deleted)))
}
