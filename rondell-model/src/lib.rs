//! Shared data model definitions for the Rondell layout engines.
#![allow(missing_docs)]

pub mod config;
pub mod geometry;
pub mod keys;
pub mod prelude;
pub mod window;

// Intentionally curated re-exports for downstream consumers.
pub use config::{BannerConfig, RollingConfig, SlideshowConfig, WrapMode};
pub use geometry::{Curve, CurvePoint};
pub use keys::CarouselKey;
pub use window::ViewWindow;
