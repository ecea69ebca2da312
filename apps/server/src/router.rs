use axum::Router;
use hhub::kernel::server::state::ApiState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "HeroHub API", description = "Heroes, powers and the links between them"))]
struct ApiDoc;

/// The complete application: every API route, traced, plus the Scalar UI at `/api`.
pub(crate) fn init(state: ApiState) -> Router {
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(hhub::server::router::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    Router::new().merge(api_routes).merge(Scalar::with_url("/api", api_doc))
}
