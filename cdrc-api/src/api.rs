mod auxiliary;
mod cdr;
mod error;

use crate::application::Application;

use axum::{
    Router,
    http::{HeaderValue, header::InvalidHeaderValue},
    routing::get,
};
use cdrc_common::config::server::ConfigServer;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info};

pub fn routes(config_server: &ConfigServer) -> Result<Router<Application>, InvalidHeaderValue> {
    let mut routes = Router::new()
        .route("/health", get(auxiliary::health))
        .route("/cdr/today/{accountcode}", get(cdr::today));

    // CORS
    if let Some(cors_config) = &config_server.cors {
        let header_origin = cors_config
            .allowed_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        routes = routes.layer(CorsLayer::new().allow_origin(header_origin));
        info!("CORS setting applied");
    }

    let routes = routes.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );
    Ok(routes)
}
