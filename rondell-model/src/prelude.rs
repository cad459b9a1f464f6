//! Convenience re-exports for downstream crates.

pub use crate::config::{BannerConfig, RollingConfig, SlideshowConfig, WrapMode};
pub use crate::geometry::{Curve, CurvePoint};
pub use crate::keys::CarouselKey;
pub use crate::window::ViewWindow;
