use axum::{extract::State, middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod models;
mod routes;
mod settings;

use adapters::{
    Argon2Hasher, PgAgentRepository, PgPromptRepository, PgSchemaStore, PgUserRepository,
};
use application::{AgentService, PromptService, SchemaBootstrapper, UserService};
use auth::ApiKey;
use settings::ServerSettings;

/// Type aliases for application services with concrete repository implementations
pub type AppAgentService = AgentService<PgAgentRepository>;
pub type AppPromptService = PromptService<PgPromptRepository, PgAgentRepository>;
pub type AppUserService = UserService<PgUserRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub agent_service: Arc<AppAgentService>,
    pub prompt_service: Arc<AppPromptService>,
    pub user_service: Arc<AppUserService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    database: String,
    version: String,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "ok".to_string(),
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            "unavailable".to_string()
        }
    };

    Json(HealthCheck {
        status: "ok".to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🗂️  AgentDesk API initializing...");

    let settings = ServerSettings::from_secrets(&secrets);

    let api_key = ApiKey::new(settings.api_key.clone());
    if api_key.is_enabled() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No API_KEY set - authentication disabled");
    }

    // Schema and seed data must be ready before any route is served
    let bootstrapper = SchemaBootstrapper::new(
        Arc::new(PgSchemaStore::new(pool.clone())),
        Arc::new(Argon2Hasher::new()),
        settings.seed.clone(),
    );
    let report = bootstrapper.initialize().await.map_err(|e| {
        tracing::error!("❌ Database initialization failed: {}", e);
        anyhow::Error::new(e)
    })?;

    tracing::info!(
        "✅ Database ready (tables created: {}, seeded: {})",
        report.tables_created,
        report.seeded
    );

    // Initialize application services
    let agent_repo = Arc::new(PgAgentRepository::new(pool.clone()));
    let prompt_repo = Arc::new(PgPromptRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));

    let state = AppState {
        pool,
        agent_service: Arc::new(AgentService::new(agent_repo.clone())),
        prompt_service: Arc::new(PromptService::new(prompt_repo, agent_repo)),
        user_service: Arc::new(UserService::new(user_repo)),
    };

    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::agents::router())
        .merge(routes::prompts::router())
        .merge(routes::users::router())
        .merge(routes::stats::router())
        .layer(middleware::from_fn_with_state(api_key, auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ AgentDesk API ready");

    Ok(router.into())
}
