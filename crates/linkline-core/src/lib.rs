#![forbid(unsafe_code)]

//! Anchor + curve geometry and per-arrow configuration (headless).
//!
//! Design goals:
//! - pure, stateless geometry: every function takes all of its inputs
//!   explicitly and touches no shared state
//! - all resolved points live in viewport (fixed-position) coordinate
//!   space, so they stay valid on a surface pinned to the viewport
//! - tolerant configuration: malformed numeric attributes fall back to
//!   documented defaults instead of erroring

pub mod anchor;
pub mod config;
pub mod curve;
pub mod error;
pub mod geom;

pub use anchor::{AnchorSpec, BoundsProvider, ElementBounds, Orientation, resolve_anchor};
pub use config::ArrowOptions;
pub use curve::resolve_control_point;
pub use error::{Error, Result};
