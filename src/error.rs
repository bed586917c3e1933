//! Startup errors for the host server.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] io::Error),
}
