use crate::config::TaskboardConfig;
use axum::extract::Request;
use axum::{middleware, Router, ServiceExt};
use dotenv;
use std::sync::Arc;
use tower::util::MapRequest;
use tower::{Layer, ServiceExt as TowerServiceExt};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

pub mod config;
pub mod cors;
pub mod db;
pub mod errors;
pub mod response;
mod features;
#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::Pool<sqlx::Sqlite>,
    pub config: Arc<TaskboardConfig>,
}

// the full application: /api routes, 404 fallback, CORS wrapping everything
// so error responses and the fallback carry the headers too
pub fn build_router(state: AppState) -> Router {
    let api_router = Router::new()
        .nest("/projects", features::projects::projects_router())
        .nest("/tasks", features::tasks::tasks_router());

    Router::new()
        .nest("/api", api_router)
        .fallback(errors::not_found_handler)
        .method_not_allowed_fallback(errors::not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cors::cors_middleware,
        ))
        .with_state(state)
}

pub type App = MapRequest<NormalizePath<Router>, fn(Request) -> Request>;

// a request line like "GET //api/projects" must still route; the router
// only sees the rewritten path because this runs before it
fn collapse_leading_slashes(mut req: Request) -> Request {
    let path = req.uri().path();
    if path.starts_with("//") {
        let collapsed = format!("/{}", path.trim_start_matches('/'));
        let path_and_query = match req.uri().query() {
            Some(query) => format!("{}?{}", collapsed, query),
            None => collapsed,
        };
        if let Ok(uri) = path_and_query.parse() {
            *req.uri_mut() = uri;
        }
    }
    req
}

// path normalization has to wrap the router from outside: layers added
// with Router::layer run after the route has been matched, so URI
// rewrites there would be invisible to routing
pub fn build_app(state: AppState) -> App {
    let app = NormalizePathLayer::trim_trailing_slash().layer(build_router(state));
    app.map_request(collapse_leading_slashes as fn(Request) -> Request)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = TaskboardConfig::from_env();
    let shared_config = Arc::new(config.clone());

    // open (or create) the database and make sure the schema exists
    let pool = match db::connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            panic!("Failed to open database at {}: {}", config.database_url, e);
        }
    };

    db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema.");

    let app_state = AppState {
        pool: pool.clone(),
        config: shared_config.clone(),
    };

    println!("Starting server...");

    let app = build_app(app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("Server listening on http://{}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    pool.close().await;

    Ok(())
}
