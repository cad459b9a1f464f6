//! Curve geometry: the per-card layout samples produced by the rolling
//! carousel engine.

/// One sample on the perspective curve: where a card sits, how large it is,
/// and how it stacks against its neighbors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Horizontal coordinate. Signed and relative to the curve center at
    /// generation time; shifted to viewport space by recentering.
    pub position: f32,
    /// Uniform scale factor applied to the card at this position.
    pub scale: f32,
    /// Card width at this scale.
    pub width: f32,
    /// Card height at this scale.
    pub height: f32,
    /// Top offset keeping the scaled card vertically centered within the
    /// unscaled card footprint.
    pub vertical_offset: f32,
    /// Stacking order; higher draws above lower. Zero until assigned.
    pub stack_order: u32,
}

impl CurvePoint {
    /// Build a point at `position`/`scale`, deriving the sized fields from
    /// the unscaled card dimensions.
    pub fn at(position: f32, scale: f32, card_width: f32, card_height: f32) -> Self {
        let width = card_width * scale;
        let height = card_height * scale;
        Self {
            position,
            scale,
            width,
            height,
            vertical_offset: (card_height - height) / 2.0,
            stack_order: 0,
        }
    }

    /// Whether this is the generation anchor (the unperturbed center).
    #[inline]
    pub fn is_anchor(&self) -> bool {
        self.position == 0.0
    }
}

/// The full perspective layout: an ordered sequence of [`CurvePoint`]s,
/// symmetric about the generation anchor and sorted ascending by position.
///
/// A curve is computed once per carousel instance and immutable thereafter;
/// selection changes only re-derive windows over it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    /// Wrap an already position-sorted sequence of points.
    pub fn from_sorted_points(points: Vec<CurvePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&CurvePoint> {
        self.points.get(index)
    }

    /// Index of the curve's center point.
    #[inline]
    pub fn center_index(&self) -> usize {
        self.points.len() / 2
    }

    /// The curve's center point, if the curve is non-empty.
    pub fn center(&self) -> Option<&CurvePoint> {
        self.points.get(self.center_index())
    }

    pub fn into_points(self) -> Vec<CurvePoint> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_derives_scaled_footprint() {
        let point = CurvePoint::at(0.0, 0.8, 500.0, 400.0);
        assert_eq!(point.width, 400.0);
        assert_eq!(point.height, 320.0);
        assert_eq!(point.vertical_offset, 40.0);
        assert_eq!(point.stack_order, 0);
        assert!(point.is_anchor());
    }

    #[test]
    fn center_index_floors_for_odd_and_even_lengths() {
        let point = CurvePoint::at(0.0, 1.0, 100.0, 100.0);
        let odd = Curve::from_sorted_points(vec![point; 5]);
        assert_eq!(odd.center_index(), 2);
        let even = Curve::from_sorted_points(vec![point; 4]);
        assert_eq!(even.center_index(), 2);
    }

    #[test]
    fn empty_curve_has_no_center() {
        assert!(Curve::default().center().is_none());
    }
}
