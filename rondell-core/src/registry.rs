//! Registry for managing layout state keyed by CarouselKey.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use rondell_model::{CarouselKey, RollingConfig};

use crate::banner::BannerRotator;
use crate::error::Result;
use crate::rolling::RollingLayout;
use crate::slideshow::SlideshowState;

/// Per-instance layout state for every widget on a page, keyed by
/// [`CarouselKey`]. Instances are fully independent; the registry only
/// spares callsites from threading individual state values around.
#[derive(Debug, Default)]
pub struct LayoutRegistry {
    rolling: HashMap<CarouselKey, RollingLayout>,
    slideshows: HashMap<CarouselKey, SlideshowState>,
    banners: HashMap<CarouselKey, BannerRotator>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a mutable rolling layout, creating it with the provided factory
    /// when absent.
    pub fn rolling_or_insert_with<F>(&mut self, key: CarouselKey, init: F) -> &mut RollingLayout
    where
        F: FnOnce() -> RollingLayout,
    {
        self.rolling.entry(key).or_insert_with(init)
    }

    pub fn rolling(&self, key: &CarouselKey) -> Option<&RollingLayout> {
        self.rolling.get(key)
    }

    pub fn rolling_mut(&mut self, key: &CarouselKey) -> Option<&mut RollingLayout> {
        self.rolling.get_mut(key)
    }

    pub fn remove_rolling(&mut self, key: &CarouselKey) -> Option<RollingLayout> {
        self.rolling.remove(key)
    }

    /// Convenience helper creating a rolling layout when missing and
    /// bringing dynamic properties up to date when it already exists, so
    /// initial draws reflect current counts and viewport without waiting
    /// for a resize event.
    pub fn ensure_rolling(
        &mut self,
        key: CarouselKey,
        config: RollingConfig,
        viewport_width: f32,
    ) -> Result<&mut RollingLayout> {
        match self.rolling.entry(key) {
            Entry::Occupied(entry) => {
                let layout = entry.into_mut();
                if layout.total_cards() != config.total_cards {
                    *layout = RollingLayout::new(config, viewport_width)?;
                } else if (layout.viewport_width() - viewport_width).abs() > 0.5 {
                    layout.update_dimensions(viewport_width);
                }
                Ok(layout)
            }
            Entry::Vacant(entry) => {
                Ok(entry.insert(RollingLayout::new(config, viewport_width)?))
            }
        }
    }

    /// Get a mutable slideshow, creating it with the provided factory when
    /// absent.
    pub fn slideshow_or_insert_with<F>(&mut self, key: CarouselKey, init: F) -> &mut SlideshowState
    where
        F: FnOnce() -> SlideshowState,
    {
        self.slideshows.entry(key).or_insert_with(init)
    }

    pub fn slideshow(&self, key: &CarouselKey) -> Option<&SlideshowState> {
        self.slideshows.get(key)
    }

    pub fn slideshow_mut(&mut self, key: &CarouselKey) -> Option<&mut SlideshowState> {
        self.slideshows.get_mut(key)
    }

    pub fn remove_slideshow(&mut self, key: &CarouselKey) -> Option<SlideshowState> {
        self.slideshows.remove(key)
    }

    /// Get a mutable banner rotator, creating it with the provided factory
    /// when absent.
    pub fn banner_or_insert_with<F>(&mut self, key: CarouselKey, init: F) -> &mut BannerRotator
    where
        F: FnOnce() -> BannerRotator,
    {
        self.banners.entry(key).or_insert_with(init)
    }

    pub fn banner(&self, key: &CarouselKey) -> Option<&BannerRotator> {
        self.banners.get(key)
    }

    pub fn banner_mut(&mut self, key: &CarouselKey) -> Option<&mut BannerRotator> {
        self.banners.get_mut(key)
    }

    pub fn remove_banner(&mut self, key: &CarouselKey) -> Option<BannerRotator> {
        self.banners.remove(key)
    }

    /// Return a snapshot of all rolling layout keys currently registered.
    pub fn rolling_keys(&self) -> Vec<CarouselKey> {
        self.rolling.keys().cloned().collect()
    }
}
