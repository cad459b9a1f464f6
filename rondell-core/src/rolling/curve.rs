//! Base curve generation and viewport recentering.
//!
//! The curve is built once per carousel instance: an iterative
//! perspective-shrink recurrence walks outward from the anchor emitting
//! (position, scale) samples, which are then mirrored to the negative side
//! and stack-ordered. Recentering translates the finished curve so the
//! anchor lands on the viewport midpoint.

use rondell_model::{Curve, CurvePoint, RollingConfig};

use crate::constants::curve as tuning;
use crate::error::{LayoutError, Result};

/// Generate the full stack-ordered curve for a configuration.
///
/// The result is anchored at position `0`; callers recenter it onto a
/// viewport with [`recenter`] before windowing.
pub fn build_layout(config: &RollingConfig) -> Result<Curve> {
    validate(config)?;
    let max_iterations = 2 * config.total_cards + tuning::ITERATION_PADDING;
    let mut points = generate_base_curve(config, max_iterations);
    assign_stack_order(&mut points);
    Ok(Curve::from_sorted_points(points))
}

/// Check the configuration invariants that generation depends on.
pub fn validate(config: &RollingConfig) -> Result<()> {
    if config.playground_range <= 0.0 {
        return Err(LayoutError::InvalidConfig(format!(
            "playground_range must be positive, got {}",
            config.playground_range
        )));
    }
    if config.total_cards < 1 {
        return Err(LayoutError::InvalidConfig(
            "at least one card is required".to_string(),
        ));
    }
    if !(0.0..=100.0).contains(&config.hide_percent) {
        return Err(LayoutError::InvalidConfig(format!(
            "hide_percent must be within [0, 100], got {}",
            config.hide_percent
        )));
    }
    Ok(())
}

/// Walk the perspective recurrence outward from the anchor, then mirror.
///
/// Scale always starts at `1.0` (the anchor card is unscaled regardless of
/// `start_zoom`); the interpolation toward `end_zoom` is deliberately
/// unclamped, so positions past the playground range keep shrinking below
/// it. Each advanced position is truncated and damped before the next step.
fn generate_base_curve(config: &RollingConfig, max_iterations: usize) -> Vec<CurvePoint> {
    let steps = max_iterations.div_ceil(2).max(1);
    let mut side = Vec::with_capacity(steps);
    let mut position = 0.0_f32;
    let mut scale = 1.0_f32;

    for _ in 0..steps {
        let point = CurvePoint::at(position, scale, config.card_width, config.card_height);
        let current_width = point.width;
        side.push(point);

        let pct = (position + current_width) / config.playground_range;
        let next_scale = config.start_zoom + (config.end_zoom - config.start_zoom) * pct;
        let next_width = config.card_width * next_scale;

        let mut next_position =
            position + current_width - next_width * (config.hide_percent / 100.0);
        next_position = next_position.floor();
        next_position -= (next_position / 100.0) * tuning::POSITION_DAMPING_PCT;

        position = next_position;
        scale = next_scale;
    }

    let mirrored = side.iter().skip(1).map(|point| CurvePoint {
        position: -point.position,
        ..*point
    });
    let mut points: Vec<CurvePoint> = side.iter().copied().chain(mirrored).collect();
    points.sort_by(|a, b| a.position.total_cmp(&b.position));
    points
}

/// Assign stacking order by distance from the center index: the center gets
/// the curve length, strictly decreasing outward in both directions.
fn assign_stack_order(points: &mut [CurvePoint]) {
    let len = points.len();
    let center = len / 2;
    for (idx, point) in points.iter_mut().enumerate() {
        point.stack_order = (len - center.abs_diff(idx)) as u32;
    }
}

/// Translate the curve so the anchor lands on the viewport midpoint.
///
/// Returns `None` when the curve has no point at exactly position `0` (an
/// already-recentered or hand-built curve).
pub fn try_recenter(curve: &Curve, viewport_width: f32) -> Option<Curve> {
    let anchor = curve.points().iter().find(|point| point.is_anchor())?;
    let offset = viewport_width / 2.0 - anchor.position;
    let points = curve
        .points()
        .iter()
        .map(|point| CurvePoint {
            position: point.position + offset,
            ..*point
        })
        .collect();
    Some(Curve::from_sorted_points(points))
}

/// [`try_recenter`] with a degraded fallback: a curve without an anchor is
/// returned untranslated.
pub fn recenter(curve: &Curve, viewport_width: f32) -> Curve {
    match try_recenter(curve, viewport_width) {
        Some(centered) => centered,
        None => {
            log::warn!("curve has no anchor at position 0; leaving it untranslated");
            curve.clone()
        }
    }
}
