//! Utility functions and helpers.

pub mod http;
pub mod throttle;

pub use throttle::Throttle;

/// Join a base endpoint and a path segment without doubling slashes.
pub fn join_endpoint(base: &str, segment: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        segment.trim_start_matches('/')
    )
}
