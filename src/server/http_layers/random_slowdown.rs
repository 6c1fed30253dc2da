//! Random slowdown middleware, for exercising clients against a slow server.

use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use rand_distr::{Distribution, Normal};
use std::time::Duration;

const MEAN_DELAY_MS: f64 = 1000.0;
const DELAY_STD_DEV_MS: f64 = 2000.0;

fn sample_delay() -> Duration {
    match Normal::new(MEAN_DELAY_MS, DELAY_STD_DEV_MS) {
        Ok(normal) => {
            let ms = normal.sample(&mut rand::rng()).max(0.0);
            Duration::from_millis(ms as u64)
        }
        Err(_) => Duration::ZERO,
    }
}

/// Delays every request by a gaussian-distributed amount of time, clamped at zero.
pub async fn slowdown_request(request: Request<Body>, next: Next) -> Response {
    tokio::time::sleep(sample_delay()).await;
    next.run(request).await
}
