//! Per-IP sliding-window rate limiter middleware.
//!
//! The summarize endpoint fans out to a paid upstream, so each client IP
//! gets a fixed number of requests per 60-second window. Applied as an
//! axum middleware via an Extension.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

const WINDOW: Duration = Duration::from_secs(60);

/// Shared state for the per-IP rate limiter.
#[derive(Clone)]
pub struct RateLimiter {
    /// Maximum requests allowed per IP within the window.
    max_per_window: u32,
    /// Request timestamps per client IP.
    store: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
}

impl RateLimiter {
    pub fn new(max_per_window: u32) -> Self {
        Self {
            max_per_window,
            store: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Try to acquire a permit for a client. Returns true when allowed.
    pub fn try_acquire(&self, client_ip: &str) -> bool {
        let now = Instant::now();
        let mut store = self.store.lock().unwrap_or_else(|e| e.into_inner());
        let timestamps = store.entry(client_ip.to_string()).or_default();

        while timestamps
            .front()
            .is_some_and(|&t| now.duration_since(t) > WINDOW)
        {
            timestamps.pop_front();
        }

        if timestamps.len() >= self.max_per_window as usize {
            return false;
        }
        timestamps.push_back(now);
        true
    }
}

/// Identify the client, preferring the first `x-forwarded-for` hop when
/// the server sits behind a proxy.
pub fn client_ip(req: &Request) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .unwrap_or_else(|| "local".to_string())
}

/// Axum middleware that enforces the per-IP limit.
pub async fn rate_limit_middleware(
    axum::extract::Extension(limiter): axum::extract::Extension<RateLimiter>,
    req: Request,
    next: Next,
) -> Response {
    let ip = client_ip(&req);
    if limiter.try_acquire(&ip) {
        next.run(req).await
    } else {
        tracing::debug!(client_ip = %ip, "Rate limit exceeded");
        ApiError::TooManyRequests("Rate limit exceeded, try again shortly".to_string())
            .into_response()
    }
}
