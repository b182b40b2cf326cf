//! Auth0 권한 검증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고 요구 권한을 확인합니다.
//! 검증에 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! Request Extensions에 저장합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// Auth0 인증 미들웨어
pub struct AuthMiddleware {
    /// 접근에 필요한 권한 (없으면 유효한 토큰만 요구)
    required_permission: Option<String>,
}

impl AuthMiddleware {
    /// 유효한 토큰만 요구하는 미들웨어 생성
    pub fn required() -> Self {
        Self {
            required_permission: None,
        }
    }

    /// 특정 권한을 요구하는 미들웨어 생성
    pub fn requires_permission(permission: &str) -> Self {
        Self {
            required_permission: Some(permission.to_string()),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_permission: self.required_permission.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::test_support::{bearer, token_with, verifier};
    use actix_web::{test, web, App, HttpResponse};
    use serde_json::Value;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(user)
    }

    macro_rules! protected_app {
        ($middleware:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(verifier()))
                    .service(
                        web::resource("/protected")
                            .wrap($middleware)
                            .route(web::get().to(whoami)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_header_is_rejected() {
        let app = protected_app!(AuthMiddleware::required());

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "authorization_header_missing");
    }

    #[actix_web::test]
    async fn test_non_bearer_header_is_rejected() {
        let app = protected_app!(AuthMiddleware::required());

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Basic Zm9vOmJhcg=="))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let app = protected_app!(AuthMiddleware::required());

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(bearer(&token_with(&[])))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user_id"], "auth0|test-user");
    }

    #[actix_web::test]
    async fn test_missing_permission_is_forbidden() {
        let app = protected_app!(AuthMiddleware::requires_permission("delete:drinks"));

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(bearer(&token_with(&["get:drinks-detail"])))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Permission not found.");
    }

    #[actix_web::test]
    async fn test_granted_permission_passes() {
        let app = protected_app!(AuthMiddleware::requires_permission("delete:drinks"));

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(bearer(&token_with(&["delete:drinks"])))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["permissions"][0], "delete:drinks");
    }

    #[actix_web::test]
    async fn test_missing_verifier_is_server_error() {
        let app = test::init_service(
            App::new().service(
                web::resource("/protected")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(bearer(&token_with(&[])))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
