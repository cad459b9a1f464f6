//! View windows: the per-selection slice of a curve, one slot per card.

use crate::geometry::CurvePoint;

/// The visible arrangement for one selection: exactly one slot per card,
/// aligned 1:1 with card indices.
///
/// The slot at [`selected_index`](Self::selected_index) always holds the
/// curve's center point; slots `selected ± k` hold the k-th point to either
/// side, or `None` once that side of the curve is exhausted. Absent slots
/// mean "hide this card": they ran off the edge of the generated curve,
/// which is not an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewWindow {
    slots: Vec<Option<CurvePoint>>,
    selected: usize,
}

impl ViewWindow {
    /// Wrap a slot sequence produced by the windowing engine.
    pub fn new(slots: Vec<Option<CurvePoint>>, selected: usize) -> Self {
        Self { slots, selected }
    }

    /// Total number of card slots (present and absent).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Card index of the selected slot.
    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn slots(&self) -> &[Option<CurvePoint>] {
        &self.slots
    }

    /// The point assigned to a card slot, if that card is visible.
    pub fn get(&self, slot: usize) -> Option<&CurvePoint> {
        self.slots.get(slot).and_then(|point| point.as_ref())
    }

    /// The point under the selected slot (the curve's center).
    pub fn selected_point(&self) -> Option<&CurvePoint> {
        self.get(self.selected)
    }

    /// Number of slots that carry a point.
    pub fn present_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}
