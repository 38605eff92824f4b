//! Motion primitives: scroll progress, curves, reveals, springs.
//!
//! Everything here is framework independent: a front-end measures geometry,
//! pushes it in, and reads back plain numbers (`VisualState`, offsets,
//! rotations) to apply to its presentation layer.
//!
//! - `scroll`  scroll position → normalized progress (observer pattern)
//! - `curve`   piecewise-linear curves, cubic-bezier easing
//! - `visual`  progress → opacity / translate / scale / rotate / blur
//! - `reveal`  one-shot "in view" entrance animations, stagger
//! - `spring`  damped harmonic oscillator ticked per frame
//! - `counter` count-up statistics started by a reveal

pub mod curve;
pub mod scroll;
pub mod visual;
pub mod reveal;
pub mod spring;
pub mod counter;

/// Linear interpolation using FMA for precision.
/// lerp(a, b, t) = a + t * (b - a) = fma(t, b-a, a)
#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    t.mul_add(b - a, a)
}

/// Clamp into `[0, 1]`; NaN collapses to 0.
#[inline(always)]
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Plain 2-D point in the front-end's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds, `getBoundingClientRect` style.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
        assert!((lerp(15.0, -15.0, 1.0) + 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(f32::NAN), 0.0);
    }

    #[test]
    fn bounds_center() {
        let b = Bounds::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(b.center(), Point::new(60.0, 40.0));
        assert!(b.contains(Point::new(60.0, 40.0)));
        assert!(!b.contains(Point::new(0.0, 0.0)));
    }
}
