//! HTTP client for end-to-end tests
//!
//! When API routes change, update only this file.

#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn get_home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Get home request failed")
    }

    /// GET /director/{name}, with the name percent-encoded by reqwest's URL parser
    pub async fn get_director(&self, name: &str) -> Response {
        let mut url = reqwest::Url::parse(&self.base_url).expect("Invalid base url");
        url.path_segments_mut()
            .expect("Base url cannot be a base")
            .push("director")
            .push(name);
        self.client
            .get(url)
            .send()
            .await
            .expect("Get director request failed")
    }

    /// GET /directores
    pub async fn get_directors(&self) -> Response {
        self.client
            .get(format!("{}/directores", self.base_url))
            .send()
            .await
            .expect("Get directors request failed")
    }
}
