//! Handler for the greeting page.

use axum::{extract::State, response::Html, Extension};
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::RequestId;
use crate::state::AppState;
use crate::templates::render_index;

/// Greeting page showing the version and build label.
#[instrument(
    name = "home::index",
    skip(state, request_id),
    fields(request_id = %request_id.0, build = %state.config.app.build_label())
)]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Html<String>, AppError> {
    let html = render_index(&state.tera, &state.config.app)?;
    Ok(Html(html))
}
