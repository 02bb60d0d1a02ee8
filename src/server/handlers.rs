use super::{page::PageRenderer, types::AskForm};
use crate::{expert::Mode, resolver::Resolver};
use axum::{Form, extract::State, http::StatusCode, response::Html};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    /// Held for the whole completion call, so submissions never overlap.
    pub resolver: Arc<Mutex<Resolver>>,
    pub page: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(resolver: Resolver, page: PageRenderer) -> Self {
        Self {
            resolver: Arc::new(Mutex::new(resolver)),
            page: Arc::new(page),
        }
    }
}

type PageResult = Result<Html<String>, (StatusCode, Html<String>)>;

pub async fn index(State(state): State<AppState>) -> PageResult {
    render_page(&state, Mode::default(), "", None)
}

pub async fn ask(State(state): State<AppState>, Form(form): Form<AskForm>) -> PageResult {
    info!("Received form submission");

    let answer = {
        let resolver = state.resolver.lock().await;
        resolver.resolve(&form.input, form.mode.as_deref()).await
    };

    let mode = Mode::from_label(form.mode.as_deref());
    render_page(&state, mode, &form.input, Some(&answer))
}

fn render_page(state: &AppState, mode: Mode, input: &str, answer: Option<&str>) -> PageResult {
    state.page.render(mode, input, answer).map(Html).map_err(|e| {
        error!("Failed to render page: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Internal error</h1>".to_string()),
        )
    })
}
