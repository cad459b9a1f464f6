//! Rolling carousel layout engine
//!
//! The pipeline runs in two phases. At setup, [`build_layout`] walks the
//! perspective recurrence into a symmetric [`Curve`] and [`recenter`] shifts
//! it onto the viewport. On every selection change, [`window_for`] slices
//! the centered curve into one slot per card in O(total_cards), with no
//! hidden state.
//!
//! [`RollingLayout`] bundles the two phases for callers that want one value
//! per carousel instance.

pub mod curve;
pub mod window;

pub use curve::{build_layout, recenter, try_recenter, validate};
pub use window::window_for;

use rondell_model::{Curve, RollingConfig, ViewWindow};

use crate::error::Result;

/// The selection a carousel starts on: the middle card, biased left for
/// even counts.
#[inline]
pub fn initial_selection(total_cards: usize) -> usize {
    ((total_cards as f32 / 2.0).round() as usize).saturating_sub(1)
}

/// Per-instance rolling carousel state: the immutable curve plus the
/// viewport it was centered on.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingLayout {
    config: RollingConfig,
    viewport_width: f32,
    base: Curve,
    centered: Curve,
}

impl RollingLayout {
    /// Build the curve for `config` and center it on a viewport.
    pub fn new(config: RollingConfig, viewport_width: f32) -> Result<Self> {
        let base = build_layout(&config)?;
        let centered = recenter(&base, viewport_width);
        Ok(Self {
            config,
            viewport_width,
            base,
            centered,
        })
    }

    pub fn config(&self) -> &RollingConfig {
        &self.config
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn total_cards(&self) -> usize {
        self.config.total_cards
    }

    /// The viewport-centered curve windows are derived from.
    pub fn curve(&self) -> &Curve {
        &self.centered
    }

    /// Derive the visible window for a selected card.
    pub fn window_for(&self, selected: usize) -> Result<ViewWindow> {
        window_for(&self.centered, selected, self.config.total_cards)
    }

    /// The selection to draw before any input arrives.
    pub fn initial_selection(&self) -> usize {
        initial_selection(self.config.total_cards)
    }

    /// Re-center on a new viewport width. The base curve is kept around so
    /// resizing never compounds earlier translations.
    pub fn update_dimensions(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width;
        self.centered = recenter(&self.base, viewport_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_selection_centers_with_left_bias() {
        assert_eq!(initial_selection(1), 0);
        assert_eq!(initial_selection(2), 0);
        assert_eq!(initial_selection(4), 1);
        assert_eq!(initial_selection(5), 2);
        assert_eq!(initial_selection(8), 3);
    }

    #[test]
    fn update_dimensions_recenters_from_the_base_curve() {
        let config = RollingConfig::card_defaults(5).with_viewport(1000.0);
        let mut layout = RollingLayout::new(config, 1000.0).unwrap();
        let at_1000 = layout.curve().center().unwrap().position;
        assert_eq!(at_1000, 500.0);

        layout.update_dimensions(1400.0);
        assert_eq!(layout.curve().center().unwrap().position, 700.0);

        layout.update_dimensions(1000.0);
        assert_eq!(layout.curve().center().unwrap().position, 500.0);
    }
}
