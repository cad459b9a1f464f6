//! Placement computation for rendering sinks.
//!
//! The engine stops at [`CardPlacement`] values; drawing is a collaborator
//! concern. Renderers hand [`present_window`] a sink closure and translate
//! each placement into whatever their platform mutates (DOM styles, a
//! canvas draw call, a native layout pass). An absent placement means "hide
//! this card".

use rondell_model::{CurvePoint, ViewWindow};

use crate::constants::opacity;

/// Draw parameters for one card slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    /// Left edge placing the card centered on its curve position.
    pub left: f32,
    /// Top offset keeping the scaled card vertically centered.
    pub top: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Card width at this scale.
    pub width: f32,
    /// Card height at this scale.
    pub height: f32,
    /// Stacking order; higher draws above lower.
    pub stack_order: u32,
    /// Opacity after distance falloff from the selected slot.
    pub opacity: f32,
}

impl CardPlacement {
    /// Placement for `point` rendered in card slot `slot` while `selected`
    /// holds the selection.
    pub fn for_slot(point: &CurvePoint, slot: usize, selected: usize) -> Self {
        let distance = slot.abs_diff(selected);
        let opacity =
            (1.0 - distance as f32 * opacity::FALLOFF_PER_STEP).max(opacity::MINIMUM);
        Self {
            left: point.position - point.width / 2.0,
            top: point.vertical_offset,
            scale: point.scale,
            width: point.width,
            height: point.height,
            stack_order: point.stack_order,
            opacity,
        }
    }
}

/// Feed every slot of a window through a rendering sink, absent slots
/// included.
pub fn present_window<F>(window: &ViewWindow, mut apply: F)
where
    F: FnMut(usize, Option<CardPlacement>),
{
    let selected = window.selected_index();
    for (slot, point) in window.slots().iter().enumerate() {
        apply(
            slot,
            point
                .as_ref()
                .map(|p| CardPlacement::for_slot(p, slot, selected)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ViewWindow {
        let slots = vec![
            None,
            Some(CurvePoint::at(-200.0, 0.9, 500.0, 500.0)),
            Some(CurvePoint::at(0.0, 1.0, 500.0, 500.0)),
            Some(CurvePoint::at(200.0, 0.9, 500.0, 500.0)),
            Some(CurvePoint::at(380.0, 0.8, 500.0, 500.0)),
        ];
        ViewWindow::new(slots, 2)
    }

    #[test]
    fn placement_centers_the_card_on_its_position() {
        let point = CurvePoint::at(640.0, 0.8, 500.0, 500.0);
        let placement = CardPlacement::for_slot(&point, 2, 2);
        assert_eq!(placement.left, 640.0 - 200.0);
        assert_eq!(placement.top, 50.0);
        assert_eq!(placement.width, 400.0);
        assert_eq!(placement.opacity, 1.0);
    }

    #[test]
    fn opacity_falls_off_with_slot_distance_and_floors() {
        let point = CurvePoint::at(0.0, 1.0, 500.0, 500.0);
        assert_eq!(CardPlacement::for_slot(&point, 3, 2).opacity, 0.8);
        assert_eq!(CardPlacement::for_slot(&point, 0, 2).opacity, 0.6);
        // Distance 5 would drop to 0.0; the floor holds it at 0.2.
        assert_eq!(CardPlacement::for_slot(&point, 7, 2).opacity, 0.2);
    }

    #[test]
    fn present_visits_every_slot_in_order() {
        let mut seen = Vec::new();
        present_window(&window(), |slot, placement| {
            seen.push((slot, placement.is_some()));
        });
        assert_eq!(
            seen,
            vec![(0, false), (1, true), (2, true), (3, true), (4, true)]
        );
    }

    #[test]
    fn present_computes_falloff_around_the_selection() {
        let mut opacities = Vec::new();
        present_window(&window(), |_, placement| {
            opacities.push(placement.map(|p| p.opacity));
        });
        assert_eq!(
            opacities,
            vec![None, Some(0.8), Some(1.0), Some(0.8), Some(0.6)]
        );
    }
}
