//! History-mode navigation.
//!
//! # Data Flow
//! ```text
//! Browser location ("https://host/app/project/42?tab=files")
//!     → location.rs (parse URL or path, split query/fragment)
//!     → base.rs (strip the application base, "/app")
//!     → RouteTable::resolve
//!     → navigator.rs (update entry stack, build Outcome)
//!     → ViewHost::render(outcome)
//!
//! In-app navigation (push/replace/back/forward):
//!     app path → navigator.rs → RouteTable::resolve → ViewHost::render
//! ```
//!
//! # Design Decisions
//! - The route table is shared read-only; the navigator owns only its stack
//! - NotFound becomes a Fallback outcome when a fallback view is configured
//! - Navigating to the current location is reported, not recorded

pub mod base;
pub mod location;
pub mod navigator;

pub use base::Base;
pub use location::{Location, LocationError};
pub use navigator::{Entry, NavigationId, Navigator, Outcome, ViewHost};
