//! # Config Crate
//!
//! Centralized tolerances and thresholds for the polygon slicing core.
//! Every epsilon the geometry relies on is defined here once, so the
//! split engine, the scoring code and the browser bindings agree on what
//! counts as "the same point" or "a degenerate polygon".
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{VERTEX_SNAP_EPSILON, near_point};
//!
//! // Squared distance below the snap tolerance means "same point"
//! assert!(near_point(1e-7));
//! assert!(VERTEX_SNAP_EPSILON > 1e-7);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Exact Values**: Tolerances are load-bearing; changing one changes
//!   which cuts are accepted
//! - **Browser-Safe**: No platform-specific values

pub mod constants;
