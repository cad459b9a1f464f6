//! Slideshow stepping: index and translate-percent state.
//!
//! Models a strip of slides moved by whole-slide steps, each step worth
//! `step_percent` of the wrapper width. The state tracks the current slide
//! index and the accumulated translate percent a renderer would apply to
//! the strip; animation, timers, and input wiring stay with collaborators.

use rondell_model::{SlideshowConfig, WrapMode};

/// Index and translate-percent state for one slideshow instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideshowState {
    config: SlideshowConfig,
    current_index: usize,
    translate_percent: f32,
}

impl SlideshowState {
    pub fn new(config: SlideshowConfig) -> Self {
        Self {
            config,
            current_index: 0,
            translate_percent: 0.0,
        }
    }

    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_slides(&self) -> usize {
        self.config.total_slides
    }

    /// The translate the renderer should apply to the strip, in percent of
    /// the wrapper width. Negative values move the strip left.
    pub fn translate_percent(&self) -> f32 {
        self.translate_percent
    }

    /// Step forward one slide, clamping at the last slide under
    /// [`WrapMode::Finite`].
    pub fn next(&mut self) {
        if self.config.total_slides == 0 {
            return;
        }
        let mut target = self.current_index as isize + 1;
        if self.config.wrap == WrapMode::Finite && target >= self.config.total_slides as isize {
            target = self.config.total_slides as isize - 1;
        }
        self.move_to(target);
    }

    /// Step back one slide, clamping at the first slide under
    /// [`WrapMode::Finite`].
    pub fn prev(&mut self) {
        if self.config.total_slides == 0 {
            return;
        }
        let mut target = self.current_index as isize - 1;
        if self.config.wrap == WrapMode::Finite && target < 0 {
            target = 0;
        }
        self.move_to(target);
    }

    /// Jump to a slide. Out-of-range targets wrap under
    /// [`WrapMode::Infinite`] and clamp otherwise.
    pub fn go_to(&mut self, target: isize) {
        if self.config.total_slides == 0 {
            return;
        }
        self.move_to(target);
    }

    /// Whether the left arrow should be shown for the current index.
    pub fn left_arrow_visible(&self) -> bool {
        !(self.current_index == 0 && self.config.wrap == WrapMode::Finite)
    }

    /// Whether the right arrow should be shown for the current index.
    pub fn right_arrow_visible(&self) -> bool {
        !(self.current_index + 1 == self.config.total_slides
            && self.config.wrap == WrapMode::Finite)
    }

    /// Core move: normalize the target, derive the translate step from the
    /// slide delta, and commit both.
    ///
    /// Under wrap-around, a delta longer than half the strip is shortened
    /// to the wrapped distance. The shortened step keeps the sign the plain
    /// delta would have had, so the translate percent drifts from
    /// `index * step_percent` across wraps; the index itself is always
    /// exact.
    fn move_to(&mut self, target: isize) {
        let total = self.config.total_slides as isize;
        let target = match self.config.wrap {
            WrapMode::Infinite => ((target % total) + total) % total,
            WrapMode::Finite => target.clamp(0, total - 1),
        } as usize;

        let delta = target as isize - self.current_index as isize;
        let step = if self.config.wrap == WrapMode::Infinite
            && delta.abs() as f32 > self.config.total_slides as f32 / 2.0
        {
            let alt = if delta > 0 { delta - total } else { delta + total };
            let direction = if alt > 0 { 1.0 } else { -1.0 };
            direction * self.config.step_percent * alt.abs() as f32
        } else {
            let direction = if delta > 0 { -1.0 } else { 1.0 };
            direction * self.config.step_percent * delta.abs() as f32
        };

        self.translate_percent = round_percent(self.translate_percent + step);
        self.current_index = target;
    }
}

/// Round to three decimals so accumulated steps do not smear into long
/// fractional tails.
#[inline]
fn round_percent(percent: f32) -> f32 {
    (percent * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finite(total: usize) -> SlideshowState {
        SlideshowState::new(SlideshowConfig::new(total))
    }

    fn infinite(total: usize) -> SlideshowState {
        let mut config = SlideshowConfig::new(total);
        config.wrap = WrapMode::Infinite;
        SlideshowState::new(config)
    }

    #[test]
    fn next_steps_accumulate_negative_translate() {
        let mut show = finite(4);
        show.next();
        assert_eq!(show.current_index(), 1);
        assert_eq!(show.translate_percent(), -100.0);
        show.next();
        assert_eq!(show.current_index(), 2);
        assert_eq!(show.translate_percent(), -200.0);
    }

    #[test]
    fn finite_next_clamps_at_the_last_slide() {
        let mut show = finite(3);
        show.next();
        show.next();
        show.next();
        show.next();
        assert_eq!(show.current_index(), 2);
        assert_eq!(show.translate_percent(), -200.0);
    }

    #[test]
    fn finite_prev_clamps_at_the_first_slide() {
        let mut show = finite(3);
        show.prev();
        assert_eq!(show.current_index(), 0);
        assert_eq!(show.translate_percent(), 0.0);
    }

    #[test]
    fn infinite_next_wraps_past_the_end() {
        let mut show = infinite(3);
        show.next();
        show.next();
        show.next();
        assert_eq!(show.current_index(), 0);
    }

    #[test]
    fn infinite_prev_wraps_to_the_last_slide() {
        let mut show = infinite(4);
        show.prev();
        assert_eq!(show.current_index(), 3);
    }

    #[test]
    fn go_to_clamps_out_of_range_targets_when_finite() {
        let mut show = finite(5);
        show.go_to(9);
        assert_eq!(show.current_index(), 4);
        assert_eq!(show.translate_percent(), -400.0);
        show.go_to(-3);
        assert_eq!(show.current_index(), 0);
        assert_eq!(show.translate_percent(), 0.0);
    }

    #[test]
    fn long_wrapped_jump_shortens_the_step() {
        // Four slides forward, but only one slide of translate: the wrap
        // branch reduces the magnitude while keeping the plain direction.
        let mut show = infinite(5);
        show.go_to(4);
        assert_eq!(show.current_index(), 4);
        assert_eq!(show.translate_percent(), -100.0);
    }

    #[test]
    fn short_jump_translates_the_full_delta() {
        let mut show = infinite(5);
        show.go_to(2);
        assert_eq!(show.current_index(), 2);
        assert_eq!(show.translate_percent(), -200.0);
    }

    #[test]
    fn translate_percent_rounds_to_three_decimals() {
        let mut config = SlideshowConfig::new(4);
        config.step_percent = 33.3333;
        let mut show = SlideshowState::new(config);
        show.next();
        assert_eq!(show.translate_percent(), -33.333);
    }

    #[test]
    fn arrows_hide_at_finite_bounds_only() {
        let mut show = finite(3);
        assert!(!show.left_arrow_visible());
        assert!(show.right_arrow_visible());
        show.next();
        assert!(show.left_arrow_visible());
        assert!(show.right_arrow_visible());
        show.next();
        assert!(show.left_arrow_visible());
        assert!(!show.right_arrow_visible());

        let wrapped = infinite(3);
        assert!(wrapped.left_arrow_visible());
        assert!(wrapped.right_arrow_visible());
    }

    #[test]
    fn empty_slideshow_ignores_navigation() {
        let mut show = finite(0);
        show.next();
        show.prev();
        show.go_to(3);
        assert_eq!(show.current_index(), 0);
        assert_eq!(show.translate_percent(), 0.0);
    }
}
