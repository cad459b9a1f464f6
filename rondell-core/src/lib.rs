//! # Rondell Core
//!
//! Layout engines for carousel and slideshow widgets, providing the pure
//! geometry behind rotating banners, translate-percent slideshows, and the
//! rolling card carousel.
//!
//! ## Overview
//!
//! `rondell-core` computes arrangements; it never draws. The engines:
//!
//! - **Rolling carousel**: a perspective curve of card positions generated
//!   once per instance, recentered on a viewport, and windowed around the
//!   selected card on demand
//! - **Presenter**: per-slot placement values (left, top, scale, stack
//!   order, opacity) handed to a rendering sink closure
//! - **Slideshow**: index and translate-percent stepping with clamp or
//!   wrap-around navigation
//! - **Banner**: three-slot (left/center/right) rotation over any number of
//!   items
//! - **Registry**: per-instance state keyed by [`CarouselKey`]
//!
//! All operations are synchronous pure functions over immutable inputs;
//! instances are fully independent.
//!
//! ## Architecture
//!
//! - [`rolling`]: curve generation, recentering, and selection windowing
//! - [`present`]: placement computation for rendering sinks
//! - [`slideshow`]: translate-percent stepper
//! - [`banner`]: three-slot rotator
//! - [`registry`]: multi-instance state management
//!
//! [`CarouselKey`]: rondell_model::CarouselKey

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod banner;
pub mod constants;
pub mod error;
pub mod present;
pub mod registry;
pub mod rolling;
pub mod slideshow;

// Intentionally curated re-exports for downstream consumers.
pub use banner::{BannerRotator, BannerSlot, BannerSlots};
pub use error::{LayoutError, Result};
pub use present::{CardPlacement, present_window};
pub use registry::LayoutRegistry;
pub use rolling::{
    RollingLayout, build_layout, initial_selection, recenter, try_recenter, window_for,
};
pub use slideshow::SlideshowState;
