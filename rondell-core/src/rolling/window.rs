//! Selection windowing: slicing the centered curve into per-card slots.

use rondell_model::{Curve, CurvePoint, ViewWindow};

use crate::error::{LayoutError, Result};

/// Derive the visible window for a selection.
///
/// Slot `selected` is pinned to the curve's center point; slot `selected ∓ k`
/// takes the k-th point to the left/right of center. Slots whose side of the
/// curve is exhausted come back absent: those cards ran off the edge of the
/// generated curve and should be hidden by the renderer.
///
/// `selected` must be within `[0, total_cards)`; the engine does not clamp.
pub fn window_for(curve: &Curve, selected: usize, total_cards: usize) -> Result<ViewWindow> {
    if selected >= total_cards {
        return Err(LayoutError::SelectionOutOfBounds {
            selected,
            total: total_cards,
        });
    }

    let center_idx = curve.center_index();
    let slots: Vec<Option<CurvePoint>> = (0..total_cards)
        .map(|slot| {
            let curve_idx = if slot <= selected {
                center_idx.checked_sub(selected - slot)?
            } else {
                center_idx + (slot - selected)
            };
            curve.get(curve_idx).copied()
        })
        .collect();

    log::debug!(
        "windowed curve: selected={} left={} right={} present={}/{}",
        selected,
        selected,
        total_cards - selected - 1,
        slots.iter().flatten().count(),
        total_cards
    );

    Ok(ViewWindow::new(slots, selected))
}
