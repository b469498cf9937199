//! HTTP server module.
//!
//! Serves plain HTTP; TLS is terminated by the cluster ingress. The server
//! drains in-flight requests on SIGTERM/SIGINT so rolling deployments do not
//! drop connections.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
