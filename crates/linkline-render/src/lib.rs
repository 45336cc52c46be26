#![forbid(unsafe_code)]

//! Arrow rendering onto an abstract 2D drawing surface, plus viewport
//! sizing and redraw plumbing.
//!
//! The [`Surface`] trait is the only thing a host has to implement to get
//! arrows painted; [`SvgSurface`] (headless SVG output) and
//! [`RecordingSurface`] (op capture for tests and debugging) ship with the
//! crate. Everything is single-threaded and synchronous: one trigger, one
//! full repaint.

pub mod arrow;
pub mod events;
pub mod record;
pub mod surface;
pub mod svg;
pub mod viewport;
pub mod widget;

pub use arrow::{ArrowGeometry, ArrowStyle, draw_arrow};
pub use events::{EventBus, Subscription, Trigger};
pub use linkline_core::{Error, Result};
pub use record::{RecordingSurface, SurfaceOp};
pub use surface::Surface;
pub use svg::SvgSurface;
pub use viewport::{ViewportMetrics, redraw_all, resize};
pub use widget::{ArrowWidget, MountedArrow};
