//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestServer, TestClient, DIRECTOR_1_NAME};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_get_director() {
//!     let server = TestServer::spawn().await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.get_director(DIRECTOR_1_NAME).await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod client;
mod constants;
mod fixtures;
mod server;

pub use client::TestClient;
#[allow(unused_imports)]
pub use constants::*;
pub use server::TestServer;
