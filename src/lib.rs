//! pipeline-greeter: a greeting page and health check for deployment pipelines.
//!
//! Serves `GET /` with the version and build label of the running deployment and
//! `GET /health` as a JSON liveness probe.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
