//! Easing curves for animations
//!
//! A curve maps a normalized time in `[0, 1]` to a progress multiplier.
//! The named curves cover the common cases; [`generate`] rescales an
//! arbitrary function over an interval so it can be used the same way.

use std::f32::consts::PI;

/// Absolute tolerance below which a y-map denominator counts as zero.
const ZERO_TOLERANCE: f32 = 1e-9;

/// A progress-remapping curve.
pub trait Curve {
    /// Map a normalized time `t` in `[0, 1]` to a progress multiplier.
    fn evaluate(&self, t: f32) -> f32;
}

/// Named easing curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Speed remains the same.
    #[default]
    Linear,
    /// Slow, then fast, then slow again.
    Smooth,
    /// Overshoots slightly and bounces back before the end.
    Rebound,
    /// Gradually accelerates.
    EaseIn,
    /// Gradually decelerates.
    EaseOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::Smooth => (1.0 - (t * PI).cos()) / 2.0,
            Easing::Rebound => rescale(f32::sin, 0.0, (PI + 1.0) / 2.0, t),
            Easing::EaseIn => rescale(|x| (10.0 * x - 10.0).exp2(), 0.0, 1.0, t),
            Easing::EaseOut => rescale(|x| 1.0 - (-10.0 * x).exp2(), 0.0, 1.0, t),
        }
    }
}

impl Curve for Easing {
    fn evaluate(&self, t: f32) -> f32 {
        self.apply(t)
    }
}

/// Evaluate `base` rescaled onto the unit square over `[start, end]`.
fn rescale<F: Fn(f32) -> f32>(base: F, start: f32, end: f32, t: f32) -> f32 {
    base(start + t * (end - start)) / base(end)
}

/// A curve generated from an arbitrary base function over an interval.
///
/// Construct with [`generate`] or [`generate_unscaled`].
pub struct Generated {
    base: Box<dyn Fn(f32) -> f32 + Send + Sync>,
    start: f32,
    end: f32,
    /// `1 / base(end)` when the output is mapped to end at 1.0.
    scale: Option<f32>,
}

impl Curve for Generated {
    fn evaluate(&self, t: f32) -> f32 {
        let value = (self.base)(self.start + t * (self.end - self.start));
        match self.scale {
            Some(scale) => value * scale,
            None => value,
        }
    }
}

/// Generate a curve from a mathematical function, mapping its output so the
/// value at the end of the interval is 1.0.
///
/// `base` must be defined over `[start, end]`. If `base(end)` is within
/// `1e-9` of zero the generated curve divides by a near-zero value; a
/// warning is emitted and evaluation proceeds with reduced accuracy.
pub fn generate<F>(base: F, start: f32, end: f32) -> Generated
where
    F: Fn(f32) -> f32 + Send + Sync + 'static,
{
    let denominator = base(end);
    if denominator.abs() < ZERO_TOLERANCE {
        tracing::warn!(
            start,
            end,
            denominator,
            "base function is close to zero at the end of the interval; \
             the generated curve may be inaccurate"
        );
    }
    Generated {
        base: Box::new(base),
        start,
        end,
        scale: Some(1.0 / denominator),
    }
}

/// Generate a curve without mapping the output range.
pub fn generate_unscaled<F>(base: F, start: f32, end: f32) -> Generated
where
    F: Fn(f32) -> f32 + Send + Sync + 'static,
{
    Generated {
        base: Box::new(base),
        start,
        end,
        scale: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_linear_is_identity() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_close(Easing::Linear.apply(t), t);
        }
    }

    #[test]
    fn test_smooth_endpoints_and_midpoint() {
        assert_close(Easing::Smooth.apply(0.0), 0.0);
        assert_close(Easing::Smooth.apply(0.5), 0.5);
        assert_close(Easing::Smooth.apply(1.0), 1.0);
    }

    #[test]
    fn test_smooth_is_symmetric() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_close(
                Easing::Smooth.apply(t) + Easing::Smooth.apply(1.0 - t),
                1.0,
            );
        }
    }

    #[test]
    fn test_rebound_overshoots_then_lands() {
        // sin peaks at t = pi / (pi + 1), inside the interval
        let peak_t = PI / (PI + 1.0);
        assert!(Easing::Rebound.apply(peak_t) > 1.0);
        assert_close(Easing::Rebound.apply(1.0), 1.0);
        assert_close(Easing::Rebound.apply(0.0), 0.0);
    }

    #[test]
    fn test_exponential_curves_land_at_one() {
        assert_close(Easing::EaseIn.apply(1.0), 1.0);
        assert_close(Easing::EaseOut.apply(1.0), 1.0);
        // ease-in starts nearly flat, ease-out nearly done
        assert!(Easing::EaseIn.apply(0.1) < 0.01);
        assert!(Easing::EaseOut.apply(0.9) > 0.99);
    }

    #[test]
    fn test_generate_maps_end_to_one() {
        let cases: Vec<Generated> = vec![
            generate(f32::sin, 0.0, PI / 2.0),
            generate(|x| x * x, 1.0, 3.0),
            generate(|x| x.exp() - 1.0, 0.0, 2.0),
        ];
        for curve in &cases {
            assert_close(curve.evaluate(1.0), 1.0);
        }
    }

    #[test]
    fn test_generate_offsets_the_interval_start() {
        // cos over [-pi/2, 0] starts at 0 and rises to 1
        let curve = generate(f32::cos, -PI / 2.0, 0.0);
        assert_close(curve.evaluate(0.0), 0.0);
        assert_close(curve.evaluate(1.0), 1.0);
        assert!(curve.evaluate(0.5) > 0.0);
    }

    #[test]
    fn test_generate_unscaled_keeps_output_range() {
        let curve = generate_unscaled(|x| x * 2.0, 0.0, 3.0);
        assert_close(curve.evaluate(1.0), 6.0);
        assert_close(curve.evaluate(0.5), 3.0);
    }

    #[test]
    fn test_generate_near_zero_end_does_not_panic() {
        // base(end) == 0 exactly; evaluation proceeds (non-finite output)
        let curve = generate(|x| x, -1.0, 0.0);
        assert!(!curve.evaluate(0.5).is_finite());
    }
}
