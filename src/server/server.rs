use anyhow::{Context, Result};
use std::collections::BTreeMap;

use tracing::{debug, info};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{http_cache, log_requests, metrics, state::*, ServerConfig};
use crate::directors::{get_director_summary, list_directors, DirectorError, DirectorResponse};

#[derive(Serialize)]
struct Welcome {
    message: String,
    functions: BTreeMap<String, String>,
    examples: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: &'static str,
}

fn base_url(headers: &HeaderMap, config: &ServerConfig) -> String {
    match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{}", host),
        None => format!("http://127.0.0.1:{}", config.port),
    }
}

async fn home(State(state): State<ServerState>, headers: HeaderMap) -> impl IntoResponse {
    let base_url = base_url(&headers, &state.config);

    let functions = BTreeMap::from([
        (
            format!("{}/director/{{director_name}}", base_url),
            "Returns a director's movies, total revenue and average return.".to_owned(),
        ),
        (
            format!("{}/directores", base_url),
            "Returns the names of all directors in the dataset.".to_owned(),
        ),
    ]);
    let examples = BTreeMap::from([
        (
            "Get Director Info".to_owned(),
            format!("{}/director/Quentin%20Tarantino", base_url),
        ),
        (
            "Get All Directors".to_owned(),
            format!("{}/directores", base_url),
        ),
    ]);

    Json(Welcome {
        message: "Welcome to the film directors API.".to_owned(),
        functions,
        examples,
    })
}

async fn get_director(
    State(dataset): State<SharedDataset>,
    Path(name): Path<String>,
) -> Response {
    match get_director_summary(&dataset, &name) {
        Ok(summary) => {
            metrics::record_director_lookup(true);
            debug!(
                "Director {:?} matched {} movies",
                name, summary.total_movies
            );
            Json(DirectorResponse::from(&summary)).into_response()
        }
        Err(DirectorError::NotFound(_)) => {
            metrics::record_director_lookup(false);
            debug!("Director {:?} not found", name);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    detail: "Director no encontrado",
                }),
            )
                .into_response()
        }
    }
}

async fn get_directors(State(dataset): State<SharedDataset>) -> Response {
    let names = list_directors(&dataset);
    debug!("Listing {} directors", names.len());
    Json(names).into_response()
}

pub fn make_app(config: ServerConfig, dataset: SharedDataset) -> Router {
    let state = ServerState::new(config.clone(), dataset);

    let data_routes: Router = Router::new()
        .route("/director/{name}", get(get_director))
        .route("/directores", get(get_directors))
        .route("/directors", get(get_directors))
        .layer(middleware::from_fn_with_state(
            config.content_cache_age_sec,
            http_cache,
        ))
        .with_state(state.clone());

    let mut app: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .merge(data_routes);

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(super::slowdown_request));
    }
    app = app.layer(middleware::from_fn_with_state(state, log_requests));

    app
}

pub async fn run_server(dataset: SharedDataset, config: ServerConfig) -> Result<()> {
    let metrics_listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", config.metrics_port))
        .await
        .with_context(|| format!("Failed to bind metrics port {}", config.metrics_port))?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, metrics::make_metrics_app()).await {
            tracing::error!("Metrics server stopped: {}", err);
        }
    });

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    let app = make_app(config, dataset);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received Ctrl+C, shutting down");
        })
        .await?;
    Ok(())
}
