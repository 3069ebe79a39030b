//! Liveness endpoint that also reports store connectivity.

use actix_web::{web, HttpResponse};

use crate::constants::{
    MSG_DATABASE_CONNECTED, MSG_DATABASE_UNREACHABLE, MSG_STATUS_DEGRADED, MSG_STATUS_OK,
};
use crate::models::HealthResponse;
use crate::services::UserService;

/// Report whether the server is up and the store answers
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server and store are up", body = HealthResponse),
        (status = 503, description = "Store is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(user_service: web::Data<UserService>) -> HttpResponse {
    if user_service.store_reachable().await {
        HttpResponse::Ok().json(HealthResponse {
            status: MSG_STATUS_OK.to_string(),
            database: MSG_DATABASE_CONNECTED.to_string(),
        })
    } else {
        HttpResponse::ServiceUnavailable().json(HealthResponse {
            status: MSG_STATUS_DEGRADED.to_string(),
            database: MSG_DATABASE_UNREACHABLE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use crate::repositories::memory::InMemoryUserRepository;
    use crate::routes::configure_routes;
    use crate::services::UserService;

    #[actix_web::test]
    async fn test_health_reports_store_state() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UserService::new(repo.clone())))
                .configure(configure_routes),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"status": "OK", "database": "connected"}));

        repo.set_failing(true);
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["database"], "unreachable");
    }
}
