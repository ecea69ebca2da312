use super::health;
use axum::extract::FromRef;
use hhub_database::Database;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes owned by the kernel itself (`/health`).
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
    Database: FromRef<S>,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::state::ApiState;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_reports_up_with_a_reachable_store() {
        let database = Database::builder().url("sqlite::memory:").init().await.expect("database");
        let state = ApiState::builder().db(database).build().expect("state");
        let (router, api) = system_router::<ApiState>().with_state(state).split_for_parts();
        assert!(api.paths.paths.contains_key("/health"));

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(json["status"], "up");
        assert_eq!(json["store"], "up");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
