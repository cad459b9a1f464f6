//! Static configuration value types for the layout engines. These can be
//! provided ad-hoc by callsites or loaded from preset files via
//! `rondell-config`.

/// Paging and boundary behavior at the ends of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WrapMode {
    /// Finite (clamped) sequence.
    #[default]
    Finite,
    /// Infinite wrap-around sequence. Indexing wraps with modulo arithmetic.
    Infinite,
}

/// Static configuration for a rolling carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollingConfig {
    /// Unscaled card width.
    pub card_width: f32,
    /// Unscaled card height.
    pub card_height: f32,
    /// How much of a receding card hides behind its neighbor, in percent
    /// of the receding card's width. Valid range `[0, 100]`.
    #[cfg_attr(feature = "serde", serde(default = "default_hide_percent"))]
    pub hide_percent: f32,
    /// Scale at the curve center.
    #[cfg_attr(feature = "serde", serde(default = "default_start_zoom"))]
    pub start_zoom: f32,
    /// Asymptotic scale far from the center.
    #[cfg_attr(feature = "serde", serde(default = "default_end_zoom"))]
    pub end_zoom: f32,
    /// Distance over which the zoom interpolates. Must be positive; derive
    /// it from the viewport with [`with_viewport`](Self::with_viewport) when
    /// not set explicitly.
    #[cfg_attr(feature = "serde", serde(default))]
    pub playground_range: f32,
    /// Number of card slots fed by this layout.
    pub total_cards: usize,
}

impl RollingConfig {
    pub const DEFAULT_CARD_WIDTH: f32 = 500.0;
    pub const DEFAULT_HIDE_PERCENT: f32 = 50.0;
    pub const DEFAULT_START_ZOOM: f32 = 1.0;
    pub const DEFAULT_END_ZOOM: f32 = 0.8;

    /// Basic sane defaults for square cards; the playground range still has
    /// to be derived from the hosting viewport.
    pub const fn card_defaults(total_cards: usize) -> Self {
        Self {
            card_width: Self::DEFAULT_CARD_WIDTH,
            card_height: Self::DEFAULT_CARD_WIDTH,
            hide_percent: Self::DEFAULT_HIDE_PERCENT,
            start_zoom: Self::DEFAULT_START_ZOOM,
            end_zoom: Self::DEFAULT_END_ZOOM,
            playground_range: 0.0,
            total_cards,
        }
    }

    /// The perspective range covered by half the viewport plus half a card:
    /// the distance over which a card shrinks from `start_zoom` toward
    /// `end_zoom`.
    #[inline]
    pub fn derived_playground_range(viewport_width: f32, card_width: f32) -> f32 {
        viewport_width / 2.0 + card_width / 2.0
    }

    /// Derive `playground_range` from the hosting viewport width.
    pub fn with_viewport(mut self, viewport_width: f32) -> Self {
        self.playground_range = Self::derived_playground_range(viewport_width, self.card_width);
        self
    }
}

/// Static configuration for a slideshow instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideshowConfig {
    /// Number of slides in the strip.
    pub total_slides: usize,
    /// Translate distance per slide, in percent of the wrapper width.
    #[cfg_attr(feature = "serde", serde(default = "default_step_percent"))]
    pub step_percent: f32,
    /// Whether next/prev wrap around at the ends.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wrap: WrapMode,
}

impl SlideshowConfig {
    pub const DEFAULT_STEP_PERCENT: f32 = 100.0;

    pub const fn new(total_slides: usize) -> Self {
        Self {
            total_slides,
            step_percent: Self::DEFAULT_STEP_PERCENT,
            wrap: WrapMode::Finite,
        }
    }
}

/// Static configuration for a three-slot banner rotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BannerConfig {
    /// Number of items rotating through the three slots.
    pub total_items: usize,
}

#[cfg(feature = "serde")]
fn default_hide_percent() -> f32 {
    RollingConfig::DEFAULT_HIDE_PERCENT
}

#[cfg(feature = "serde")]
fn default_start_zoom() -> f32 {
    RollingConfig::DEFAULT_START_ZOOM
}

#[cfg(feature = "serde")]
fn default_end_zoom() -> f32 {
    RollingConfig::DEFAULT_END_ZOOM
}

#[cfg(feature = "serde")]
fn default_step_percent() -> f32 {
    SlideshowConfig::DEFAULT_STEP_PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playground_range_derives_from_viewport_and_card() {
        let config = RollingConfig::card_defaults(5).with_viewport(1000.0);
        assert_eq!(config.playground_range, 750.0);
    }

    #[test]
    fn card_defaults_are_square() {
        let config = RollingConfig::card_defaults(3);
        assert_eq!(config.card_width, config.card_height);
        assert_eq!(config.total_cards, 3);
    }
}
