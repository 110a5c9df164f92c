//! Hooks for tracing backend requests.
//!
//! `HttpBackend` reports every request through a `RequestObserver` instead of
//! logging directly, so callers choose where traces go.

use crate::error::ApiError;

pub trait RequestObserver: Send + Sync {
    fn on_request(&self, _method: &str, _url: &str) {}
    fn on_response(&self, _method: &str, _url: &str, _status: u16) {}
    fn on_error(&self, _method: &str, _url: &str, _error: &ApiError) {}
}

/// Forwards request traces to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl RequestObserver for LogObserver {
    fn on_request(&self, method: &str, url: &str) {
        log::debug!("api request: {method} {url}");
    }

    fn on_response(&self, method: &str, url: &str, status: u16) {
        log::debug!("api response: {method} {url} -> {status}");
    }

    fn on_error(&self, method: &str, url: &str, error: &ApiError) {
        log::warn!("api error: {method} {url}: {error}");
    }
}

/// Drops all traces.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {}
