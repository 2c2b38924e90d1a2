//! HTTP front end: the order form and the receipt page.

pub mod views;

use crate::application::pipeline::OrderPipeline;
use crate::domain::order::RawSubmission;
use crate::error::{OrderError, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use views::Views;

const NOT_SAVED: &str = "Your order could not be saved. Nothing was charged; please try again.";

/// Shared state of the order site.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<OrderPipeline>,
    views: Arc<Views>,
}

impl AppState {
    pub fn new(pipeline: OrderPipeline, views: Views) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            views: Arc::new(views),
        }
    }
}

/// Builds the site routes:
/// - GET  / - empty order form
/// - POST / - place an order; receipt on success, the filled form with errors otherwise
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_order))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn show_form(State(state): State<AppState>) -> Response {
    render(
        StatusCode::OK,
        state.views.form(&RawSubmission::default(), &[]),
    )
}

async fn submit_order(
    State(state): State<AppState>,
    Form(submission): Form<RawSubmission>,
) -> Response {
    match state.pipeline.process(&submission).await {
        Ok(receipt) => render(StatusCode::OK, state.views.receipt(&receipt)),
        Err(OrderError::Validation(errors)) => render(
            StatusCode::UNPROCESSABLE_ENTITY,
            state.views.form(&submission, errors.messages()),
        ),
        Err(e) => {
            warn!(error = %e, "order submission failed");
            render(
                StatusCode::INTERNAL_SERVER_ERROR,
                state.views.failure(NOT_SAVED),
            )
        }
    }
}

fn render(status: StatusCode, page: Result<String>) -> Response {
    match page {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!(error = %e, "failed to render page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
