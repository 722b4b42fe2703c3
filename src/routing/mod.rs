//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation request ("/project/42?tab=files")
//!     → normalize.rs (split query/fragment, trailing slash policy)
//!     → router.rs (scan routes in declaration order)
//!     → matcher.rs (compare segments, bind captures)
//!     → Return: Resolution { route, params, query } or NotFound
//!
//! Table construction (at startup):
//!     (pattern, name, view)[]
//!     → pattern.rs (parse literals and `:name` captures)
//!     → Reject duplicate names
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order, no scoring)
//! - Pure: resolution performs no I/O, logging or metrics

pub mod matcher;
pub mod normalize;
pub mod params;
pub mod pattern;
pub mod router;

pub use matcher::{Matcher, SegmentMatcher};
pub use normalize::{MatchOptions, RequestPath, TrailingSlash};
pub use params::{Params, Query};
pub use pattern::{BuildError, PathPattern, PatternError, Segment};
pub use router::{NotFound, Resolution, Route, RouteError, RouteTable, RouteTableBuilder};
