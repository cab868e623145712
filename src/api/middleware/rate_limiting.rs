use std::net::IpAddr;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use tracing::warn;

use crate::api::errors::ApiError;

/// Fraction of checks that trigger an opportunistic purge of stale windows
const CLEANUP_PROBABILITY: f64 = 0.01;

/// Rate limiting configuration for one endpoint class
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests accepted per window
    pub max_attempts: u32,
    /// Window duration
    pub window: Duration,
}

/// Denial signal carrying the whole seconds a client should wait
#[derive(Debug, PartialEq, Eq)]
pub struct RateLimitExceeded {
    pub retry_after_secs: u64,
}

#[derive(Debug)]
struct WindowEntry {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window counter keyed by client identity.
///
/// Advisory and per-process: counts are not linearizable under parallel
/// requests (an in-flight race can overshoot the max by one) and do not
/// survive restarts or coordinate across instances. Each endpoint class
/// owns an independent limiter.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    entries: DashMap<String, WindowEntry>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            entries: DashMap::new(),
        }
    }

    /// Count one request for `key`, denying once the window is full.
    pub fn check(&self, key: &str) -> Result<(), RateLimitExceeded> {
        let now = Instant::now();
        let result = {
            let mut entry = self.entries.entry(key.to_string()).or_insert(WindowEntry {
                count: 0,
                reset_at: now + self.config.window,
            });

            if now > entry.reset_at {
                entry.count = 0;
                entry.reset_at = now + self.config.window;
            }

            entry.count += 1;

            if entry.count > self.config.max_attempts {
                let retry_after = entry.reset_at.saturating_duration_since(now);
                Err(RateLimitExceeded {
                    retry_after_secs: (retry_after.as_secs_f64().ceil() as u64).max(1),
                })
            } else {
                Ok(())
            }
        };

        // Entry guard dropped above; a purge here cannot deadlock the map.
        if rand::random::<f64>() < CLEANUP_PROBABILITY {
            self.cleanup(now);
        }

        result
    }

    /// Drop windows that have been expired for longer than one window.
    fn cleanup(&self, now: Instant) {
        let window = self.config.window;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.reset_at) < window);
    }

    #[cfg(test)]
    fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// One limiter per endpoint class, each with its own window map
#[derive(Clone)]
pub struct RateLimiters {
    pub chat_create: Arc<RateLimiter>,
    pub chat_read: Arc<RateLimiter>,
    pub chat_list: Arc<RateLimiter>,
    pub chat_delete: Arc<RateLimiter>,
    pub message_send: Arc<RateLimiter>,
}

impl RateLimiters {
    /// Default per-minute budgets per endpoint class
    pub fn new(window: Duration) -> Self {
        let limiter = |max_attempts| {
            Arc::new(RateLimiter::new(RateLimitConfig {
                max_attempts,
                window,
            }))
        };
        Self {
            chat_create: limiter(20),
            chat_read: limiter(30),
            chat_list: limiter(100),
            chat_delete: limiter(10),
            message_send: limiter(50),
        }
    }
}

impl Default for RateLimiters {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

/// Rate limiting middleware; the limiter for the route's endpoint class is
/// injected as state.
pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client_key = extract_client_key(&request);

    match limiter.check(&client_key) {
        Ok(()) => next.run(request).await,
        Err(exceeded) => {
            warn!(
                client_key = %client_key,
                retry_after = exceeded.retry_after_secs,
                "Request rate limited"
            );
            ApiError::rate_limited(exceeded.retry_after_secs).into_response()
        }
    }
}

/// Derive the client key from the request's network identity.
///
/// Proxy headers win over the peer address so limits follow the real
/// client behind a load balancer.
fn extract_client_key(request: &Request) -> String {
    if let Some(forwarded_for) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(first_ip) = forwarded_for.split(',').next() {
            if let Ok(ip) = first_ip.trim().parse::<IpAddr>() {
                return ip.to_string();
            }
        }
    }

    if let Some(real_ip) = request
        .headers()
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
        .and_then(|ip| ip.parse::<IpAddr>().ok())
    {
        return real_ip.to_string();
    }

    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    "unknown".to_string()
}
