//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Navigator / CLI produce:
//!     → logging.rs (structured log events, one span per navigation)
//!     → metrics.rs (resolution and navigation counters)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → whatever `metrics` recorder the host application installs
//! ```
//!
//! # Design Decisions
//! - The resolver itself never logs or counts; callers do
//! - Navigation ID flows through every event of a navigation
//! - Metrics are a facade: no recorder installed means no cost

pub mod logging;
pub mod metrics;
