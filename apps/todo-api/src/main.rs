use axum::{routing::get, Router};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::FromEnv;
use domain_todos::{handlers, PgTodoRepository, TodoItemService};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // color-eyre first, before any fallible operation
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to database...");
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await?;
    database::postgres::run_migrations::<migration::Migrator>(&db).await?;

    let repository = PgTodoRepository::new(db);
    let service = TodoItemService::new(repository);

    let app = Router::new()
        .nest("/api/todoitems", handlers::router(service))
        .route("/health", get(|| async { "OK" }))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", handlers::ApiDoc::openapi()),
        )
        .fallback(axum_helpers::errors::handlers::not_found)
        .layer(TraceLayer::new_for_http());

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("todo-api listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
