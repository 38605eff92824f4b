//! Piecewise-linear interpolation curves and cubic-bezier easing.
//!
//! A curve maps an input domain (usually scroll progress in `[0, 1]`) onto an
//! output value through ordered control points:
//!
//! ```text
//!  out
//!   1 ┤      ●━━━━━━━━●
//!     │     ╱          ╲
//!   0 ┤━━━━●            ●━━━━   (clamped outside the domain)
//!     └────┬──────────────┬───── in
//!          0   0.3   0.7  1
//! ```
//!
//! Malformed control points are a configuration error and are rejected by
//! [`InterpolationCurve::new`], never at sampling time.

use serde::Serialize;
use thiserror::Error;

use crate::motion::lerp;

/// Rejected curve configurations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A curve needs at least two control points.
    #[error("curve needs at least 2 control points, got {0}")]
    TooFewPoints(usize),

    /// A control point contains NaN or infinity.
    #[error("control point {index} is not finite")]
    NonFinite { index: usize },

    /// Inputs must be strictly increasing.
    #[error("control point {index} input {input} does not exceed previous input {previous}")]
    NonMonotonic { index: usize, input: f32, previous: f32 },
}

/// A single `(input, output)` vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlPoint {
    pub input: f32,
    pub output: f32,
}

/// Validated piecewise-linear curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpolationCurve {
    points: Vec<ControlPoint>,
}

impl InterpolationCurve {
    /// Build a curve from `(input, output)` pairs.
    pub fn new(points: &[(f32, f32)]) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints(points.len()));
        }
        for (index, &(input, output)) in points.iter().enumerate() {
            if !input.is_finite() || !output.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
            if index > 0 {
                let previous = points[index - 1].0;
                if input <= previous {
                    return Err(CurveError::NonMonotonic { index, input, previous });
                }
            }
        }
        Ok(Self {
            points: points
                .iter()
                .map(|&(input, output)| ControlPoint { input, output })
                .collect(),
        })
    }

    /// Two-point curve mapping `[0, 1]` onto `[from, to]`.
    pub fn linear(from: f32, to: f32) -> Result<Self, CurveError> {
        Self::new(&[(0.0, from), (1.0, to)])
    }

    /// Curve whose inputs are spread evenly over `[0, 1]`.
    ///
    /// Mirrors the way multi-edge scroll bindings distribute progress.
    pub fn evenly_spaced(outputs: &[f32]) -> Result<Self, CurveError> {
        if outputs.len() < 2 {
            return Err(CurveError::TooFewPoints(outputs.len()));
        }
        let last = (outputs.len() - 1) as f32;
        let pairs: Vec<(f32, f32)> = outputs
            .iter()
            .enumerate()
            .map(|(i, &out)| (i as f32 / last, out))
            .collect();
        Self::new(&pairs)
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Lowest and highest input of the domain.
    pub fn domain(&self) -> (f32, f32) {
        (self.first().input, self.last().input)
    }

    fn first(&self) -> ControlPoint {
        self.points[0]
    }

    fn last(&self) -> ControlPoint {
        self.points[self.points.len() - 1]
    }

    /// Sample the curve at `x`, clamping outside the domain.
    pub fn sample(&self, x: f32) -> f32 {
        let first = self.first();
        let last = self.last();
        // NaN compares false everywhere; treat it as "before the domain".
        if x.is_nan() || x <= first.input {
            return first.output;
        }
        if x >= last.input {
            return last.output;
        }
        // First point whose input is >= x; guaranteed to be in 1..len.
        let hi = self.points.partition_point(|p| p.input < x);
        let a = self.points[hi - 1];
        let b = self.points[hi];
        let t = (x - a.input) / (b.input - a.input);
        lerp(a.output, b.output, t)
    }
}

/// Free-function form of [`InterpolationCurve::sample`].
pub fn interpolate(curve: &InterpolationCurve, x: f32) -> f32 {
    curve.sample(x)
}

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The long "expo-out" curve every entrance on the site uses.
    pub const EXPO_OUT: CubicBezier = CubicBezier::new(0.16, 1.0, 0.3, 1.0);

    pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);

    fn coord(t: f32, p1: f32, p2: f32) -> f32 {
        // B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn coord_derivative(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Solve for the curve parameter whose x equals `x`.
    fn solve_t(&self, x: f32) -> f32 {
        // Newton first, bisection fallback for flat derivatives.
        let mut t = x;
        for _ in 0..8 {
            let err = Self::coord(t, self.x1, self.x2) - x;
            if err.abs() < 1e-6 {
                return t;
            }
            let d = Self::coord_derivative(t, self.x1, self.x2);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..32 {
            let cx = Self::coord(t, self.x1, self.x2);
            if (cx - x).abs() < 1e-6 {
                break;
            }
            if cx < x {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }

    /// Eased value for linear time fraction `x ∈ [0, 1]`.
    pub fn ease(&self, x: f32) -> f32 {
        if x.is_nan() || x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        Self::coord(t, self.y1, self.y2)
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::EXPO_OUT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn window() -> InterpolationCurve {
        InterpolationCurve::new(&[(0.0, 0.0), (0.3, 1.0), (0.7, 1.0), (1.0, 0.0)]).unwrap()
    }

    #[test]
    fn rejects_bad_control_points() {
        assert_eq!(
            InterpolationCurve::new(&[(0.0, 1.0)]),
            Err(CurveError::TooFewPoints(1))
        );
        assert!(matches!(
            InterpolationCurve::new(&[(0.0, 0.0), (0.5, 1.0), (0.5, 2.0)]),
            Err(CurveError::NonMonotonic { index: 2, .. })
        ));
        assert!(matches!(
            InterpolationCurve::new(&[(0.0, 0.0), (1.0, f32::NAN)]),
            Err(CurveError::NonFinite { index: 1 })
        ));
    }

    #[test]
    fn clamps_outside_domain() {
        let c = window();
        assert_eq!(c.sample(-5.0), 0.0);
        assert_eq!(c.sample(0.0), 0.0);
        assert_eq!(c.sample(1.0), 0.0);
        assert_eq!(c.sample(42.0), 0.0);
    }

    #[test]
    fn interpolates_between_bracketing_points() {
        let c = window();
        assert!((c.sample(0.15) - 0.5).abs() < 1e-6);
        assert!((c.sample(0.5) - 1.0).abs() < 1e-6);
        assert!((c.sample(0.85) - 0.5).abs() < 1e-5);
        assert!((interpolate(&c, 0.3) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn nan_input_samples_first_output() {
        let c = InterpolationCurve::linear(3.0, 7.0).unwrap();
        assert_eq!(c.sample(f32::NAN), 3.0);
    }

    #[test]
    fn evenly_spaced_inputs() {
        let c = InterpolationCurve::evenly_spaced(&[0.0, 10.0, 0.0]).unwrap();
        assert_eq!(c.domain(), (0.0, 1.0));
        assert!((c.sample(0.5) - 10.0).abs() < 1e-6);
        assert!((c.sample(0.25) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn bezier_endpoints_and_shape() {
        let e = CubicBezier::EXPO_OUT;
        assert_eq!(e.ease(0.0), 0.0);
        assert_eq!(e.ease(1.0), 1.0);
        // Expo-out front-loads progress.
        assert!(e.ease(0.25) > 0.6);
        let lin = CubicBezier::LINEAR;
        assert!((lin.ease(0.4) - 0.4).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn rising_segment_is_monotonic(a in 0.0f32..0.3, b in 0.0f32..0.3) {
            let c = window();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(c.sample(lo) <= c.sample(hi) + 1e-6);
        }

        #[test]
        fn falling_segment_is_monotonic(a in 0.7f32..1.0, b in 0.7f32..1.0) {
            let c = window();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(c.sample(lo) + 1e-6 >= c.sample(hi));
        }

        #[test]
        fn continuous_at_control_points(i in 0usize..4, eps in 1e-5f32..1e-3) {
            let c = window();
            let x = c.points()[i].input;
            let at = c.sample(x);
            prop_assert!((c.sample(x - eps) - at).abs() < 0.01);
            prop_assert!((c.sample(x + eps) - at).abs() < 0.01);
        }

        #[test]
        fn never_nan(x in proptest::num::f32::ANY) {
            prop_assert!(!window().sample(x).is_nan());
        }

        #[test]
        fn bezier_stays_in_unit_range(x in 0.0f32..=1.0) {
            let y = CubicBezier::EXPO_OUT.ease(x);
            prop_assert!((-1e-4..=1.0 + 1e-4).contains(&y));
        }
    }
}
