pub mod handlers;
pub mod page;
pub mod types;

pub use handlers::AppState;
pub use page::PageRenderer;

use crate::{Result, config::Config, resolver::Resolver};
use axum::{Router, routing::get};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::ask))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let resolver = Resolver::from_config(&config.llm);
    if !resolver.has_credential() {
        warn!(
            "Serving without {}; answers will explain how to set it",
            config.llm.api_key_env
        );
    }

    let page = PageRenderer::new(&config.llm.api_key_env)?;
    let app = router(AppState::new(resolver, page));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
