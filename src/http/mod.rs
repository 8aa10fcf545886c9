//! HTTP listener.
//!
//! Plain HTTP only; TLS termination is left to the ingress in front of the service.

mod server;

pub use server::{bind, serve, start_server, ServerError};
