//! HTTP front-end: the index route, the post route and not-found pages.

pub mod blocks;
pub mod pages;

use crate::content::{
    ContentAdapter, ContentResultExt, DocumentAssembler, DocumentOutcome, NotFoundReason,
};
use crate::types::DocumentId;
use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use pages::PageRenderer;
use std::net::SocketAddr;
use std::sync::Arc;

const PROVIDER_UNAVAILABLE: &str =
    "Posts could not be loaded right now. The content provider did not respond.";
const MISSING_POST: &str = "There is no post at this address.";
const UNAVAILABLE_POST: &str =
    "This post could not be loaded right now. The content provider did not respond.";

/// Shared, read-only state for all requests.
pub struct SiteState {
    pub adapter: ContentAdapter,
    pub assembler: DocumentAssembler,
    pub pages: PageRenderer,
}

impl SiteState {
    pub fn new(adapter: ContentAdapter, pages: PageRenderer) -> Self {
        Self {
            assembler: DocumentAssembler::new(adapter.clone()),
            adapter,
            pages,
        }
    }
}

/// Builds the router.
pub fn router(state: Arc<SiteState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/posts/:id", get(post_handler))
        .fallback(fallback_handler)
        .with_state(state)
}

/// Binds and serves until the process is stopped.
pub async fn serve(state: Arc<SiteState>, addr: SocketAddr) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Serving on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index_handler(State(state): State<Arc<SiteState>>) -> Response {
    let listing = state.adapter.list_published_posts().await;
    let notice = match &listing {
        Err(e) if e.is_unavailable() => Some(PROVIDER_UNAVAILABLE),
        _ => None,
    };
    let posts = listing.or_empty();

    html_response(StatusCode::OK, state.pages.render_index(&posts, notice))
}

async fn post_handler(
    State(state): State<Arc<SiteState>>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match DocumentId::parse(&raw_id) {
        Ok(id) => id,
        Err(e) => {
            log::debug!("Rejected post id {:?}: {}", raw_id, e);
            return not_found(&state, MISSING_POST);
        }
    };

    match state.assembler.assemble(&id).await {
        DocumentOutcome::Ready(document) => {
            html_response(StatusCode::OK, state.pages.render_post(&document))
        }
        DocumentOutcome::NotFound(reason) => {
            log::info!("Post {} not found: {:?}", id, reason);
            let message = match reason {
                NotFoundReason::Unavailable(_) => UNAVAILABLE_POST,
                NotFoundReason::MissingDocument | NotFoundReason::NoBlocks => MISSING_POST,
            };
            not_found(&state, message)
        }
    }
}

async fn fallback_handler(State(state): State<Arc<SiteState>>) -> Response {
    not_found(&state, MISSING_POST)
}

fn not_found(state: &SiteState, message: &str) -> Response {
    html_response(StatusCode::NOT_FOUND, state.pages.render_not_found(message))
}

fn html_response(status: StatusCode, body: Result<String, crate::error::AppError>) -> Response {
    match body {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            log::error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
