//! Client-side route table with history-mode navigation.
//!
//! ```text
//!  path / URL ──▶ history::Navigator ──▶ routing::RouteTable::resolve ──▶ Outcome ──▶ ViewHost
//!                      │                          ▲
//!                      │                          │ built once at startup
//!                      ▼                          │
//!                 entry stack               config::RouterConfig
//! ```

pub mod config;
pub mod history;
pub mod observability;
pub mod routing;

pub use config::schema::{RouterConfig, ViewId};
pub use history::{Navigator, Outcome, ViewHost};
pub use routing::{NotFound, Params, Resolution, RouteTable};
