use std::fmt;
use std::sync::Arc;

use ntex::http::StatusCode;
use ntex::web::{self, HttpResponse, WebResponseError};

use pubg_leaderboards::config::{self, Config};
use pubg_leaderboards::logging;
use pubg_leaderboards::store::LeaderboardStore;

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Store(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(account_id) => {
                write!(f, "No information found for account {account_id}")
            }
            ApiError::Store(msg) => write!(f, "Store error: {msg}"),
        }
    }
}

impl WebResponseError for ApiError {
    fn error_response(&self, _: &web::HttpRequest) -> HttpResponse {
        let (status, message) = match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Store error".to_string()),
        };
        HttpResponse::build(status).json(&serde_json::json!({ "error": message }))
    }
}

async fn account_leaderboards(
    store: web::types::State<Arc<LeaderboardStore>>,
    path: web::types::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let account_id = path.into_inner();
    match store.read_one(&account_id) {
        Ok(Some(leaderboards)) => {
            Ok(HttpResponse::Ok().json(&serde_json::json!({ "leaderboards": leaderboards })))
        }
        Ok(None) => Err(ApiError::NotFound(account_id)),
        Err(err) => Err(ApiError::Store(format!("{err:#}"))),
    }
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(&serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[ntex::main]
async fn main() -> std::io::Result<()> {
    config::load_env_files();
    logging::init().expect("Failed to initialize logging");

    let config = Config::from_env();
    config.log_summary();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let store =
        Arc::new(LeaderboardStore::connect(&config.redis).expect("Failed to connect to redis"));

    log::info!("Leaderboard lookup service starting on {host}:{port}");

    web::HttpServer::new(move || {
        web::App::new()
            .state(store.clone())
            .route("/health", web::get().to(health))
            .route(
                "/accounts/{account_id}/leaderboards",
                web::get().to(account_leaderboards),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
