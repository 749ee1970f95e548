//! # Linestore Server
//!
//! HTTP access layer for linestore.
//!
//! Exposes an append-only record log over a small JSON API: list the whole
//! log, list the records for one id, or append a record whose fields are
//! spelled out in the request path.
//!
//! ## Features
//!
//! - **router**: The axum router over a shared [`LogFile`](linestore_storage::LogFile)
//! - **AppState**: Handler state - an `Arc` around the open log
//! - **ApiError**: Maps storage failures to JSON 500 responses
//!
//! ## Example
//!
//! ```rust,ignore
//! use linestore_server::{AppState, router};
//! use linestore_storage::LogFile;
//!
//! #[tokio::main]
//! async fn main() {
//!     let log = LogFile::open_or_create("linestore.ls").await.unwrap();
//!     let app = router(AppState::new(log));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8009")
//!         .await
//!         .unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod routes;

// Re-exports
pub use error::ApiError;
pub use routes::{AppState, router};
