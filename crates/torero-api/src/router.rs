//! Versioned REST route table.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Collection URLs are documented with a trailing slash; axum 0.8 treats
    // `/v1/services` and `/v1/services/` as distinct routes, so both forms
    // are registered explicitly.
    let services = Router::new()
        .route("/v1/services", get(handlers::services::list))
        .route("/v1/services/", get(handlers::services::list))
        .route("/v1/services/types", get(handlers::services::types))
        .route("/v1/services/tags", get(handlers::services::tags))
        .route("/v1/services/{name}", get(handlers::services::get))
        .route(
            "/v1/services/{name}/describe",
            get(handlers::services::describe),
        );

    let execution = Router::new()
        .route(
            "/v1/execution/ansible-playbook/{name}",
            post(handlers::execution::run_ansible_playbook),
        )
        .route(
            "/v1/execution/python-script/{name}",
            post(handlers::execution::run_python_script),
        )
        .route(
            "/v1/execution/opentofu-plan/{name}/apply",
            post(handlers::execution::apply_opentofu_plan),
        )
        .route(
            "/v1/execution/opentofu-plan/{name}/destroy",
            post(handlers::execution::destroy_opentofu_plan),
        );

    let decorators = Router::new()
        .route("/v1/decorators", get(handlers::decorators::list))
        .route("/v1/decorators/", get(handlers::decorators::list))
        .route("/v1/decorators/types", get(handlers::decorators::types))
        .route("/v1/decorators/{name}", get(handlers::decorators::get));

    let repositories = Router::new()
        .route("/v1/repositories", get(handlers::repositories::list))
        .route("/v1/repositories/", get(handlers::repositories::list))
        .route("/v1/repositories/types", get(handlers::repositories::types))
        .route("/v1/repositories/{name}", get(handlers::repositories::get));

    let registries = Router::new()
        .route("/v1/registries", get(handlers::registries::list))
        .route("/v1/registries/", get(handlers::registries::list))
        .route("/v1/registries/types", get(handlers::registries::types))
        .route("/v1/registries/{name}", get(handlers::registries::get));

    let secrets = Router::new()
        .route("/v1/secrets", get(handlers::secrets::list))
        .route("/v1/secrets/", get(handlers::secrets::list))
        .route("/v1/secrets/types", get(handlers::secrets::types))
        .route("/v1/secrets/{name}", get(handlers::secrets::get));

    Router::new()
        .route("/", get(handlers::api_root))
        .route("/health", get(handlers::health_check))
        .merge(services)
        .merge(execution)
        .merge(decorators)
        .merge(repositories)
        .merge(registries)
        .merge(secrets)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
