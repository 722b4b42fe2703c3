//! Metrics collection.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): successful lookups by route
//! - `router_not_found_total` (counter): lookups that matched nothing
//! - `router_navigations_total` (counter): history navigations by kind

/// Record a lookup that matched `route`.
pub fn record_resolution(route: &str) {
    metrics::counter!("router_resolutions_total", "route" => route.to_string()).increment(1);
}

/// Record a lookup that matched nothing.
pub fn record_not_found() {
    metrics::counter!("router_not_found_total").increment(1);
}

/// Record a history navigation (`push`, `replace`, `traverse`, `duplicated`).
pub fn record_navigation(kind: &'static str) {
    metrics::counter!("router_navigations_total", "kind" => kind).increment(1);
}
