//! Magnetic call-to-action: the button leans toward the pointer.
//!
//! While the pointer is over the button the raw offset is the pointer's
//! distance from the button centre scaled by a damping factor; leaving resets
//! it to zero. The rendered offset follows the raw one through a spring.

use serde::Serialize;

use crate::motion::spring::{Spring2, SpringConfig};
use crate::motion::{Bounds, Point};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MagneticConfig {
    /// Fraction of the pointer's distance from centre the button follows.
    pub damping_factor: f32,
    pub spring: SpringConfig,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.4,
            spring: SpringConfig::MAGNETIC,
        }
    }
}

impl MagneticConfig {
    pub fn with_damping_factor(mut self, factor: f32) -> Self {
        self.damping_factor = factor;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PointerOffset {
    pub raw_dx: f32,
    pub raw_dy: f32,
    pub smoothed_x: f32,
    pub smoothed_y: f32,
}

#[derive(Debug, Clone)]
pub struct MagneticButton {
    config: MagneticConfig,
    raw: Point,
    smoothed: Spring2,
}

impl Default for MagneticButton {
    fn default() -> Self {
        Self::new(MagneticConfig::default())
    }
}

impl MagneticButton {
    pub fn new(config: MagneticConfig) -> Self {
        Self {
            config,
            raw: Point::ZERO,
            smoothed: Spring2::new(config.spring),
        }
    }

    pub fn config(&self) -> &MagneticConfig {
        &self.config
    }

    /// Pointer moved to `pointer` while over a button occupying `bounds`.
    pub fn pointer_move(&mut self, pointer: Point, bounds: Bounds) {
        if !pointer.x.is_finite() || !pointer.y.is_finite() {
            return;
        }
        let center = bounds.center();
        let k = self.config.damping_factor;
        self.raw = Point::new((pointer.x - center.x) * k, (pointer.y - center.y) * k);
        self.smoothed.set_target(self.raw.x, self.raw.y);
    }

    pub fn pointer_leave(&mut self) {
        self.raw = Point::ZERO;
        self.smoothed.set_target(0.0, 0.0);
    }

    pub fn tick(&mut self, dt: f32) {
        self.smoothed.step(dt);
    }

    pub fn offset(&self) -> PointerOffset {
        let (smoothed_x, smoothed_y) = self.smoothed.value();
        PointerOffset {
            raw_dx: self.raw.x,
            raw_dy: self.raw.y,
            smoothed_x,
            smoothed_y,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.smoothed.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn button() -> Bounds {
        Bounds::new(100.0, 100.0, 200.0, 60.0)
    }

    #[test]
    fn raw_offset_is_scaled_distance_from_center() {
        let mut m = MagneticButton::default();
        m.pointer_move(Point::new(250.0, 110.0), button());
        let o = m.offset();
        assert!((o.raw_dx - 20.0).abs() < 1e-5);
        assert!((o.raw_dy + 8.0).abs() < 1e-5);
        assert_eq!(o.smoothed_x, 0.0);
    }

    #[test]
    fn smoothed_offset_follows_then_settles() {
        let mut m = MagneticButton::default();
        m.pointer_move(Point::new(300.0, 160.0), button());
        for _ in 0..120 {
            m.tick(FRAME);
        }
        let o = m.offset();
        assert!(!m.is_animating());
        assert_eq!((o.smoothed_x, o.smoothed_y), (o.raw_dx, o.raw_dy));
    }

    #[test]
    fn leaving_returns_to_rest_in_bounded_time() {
        let mut m = MagneticButton::default();
        m.pointer_move(Point::new(300.0, 160.0), button());
        for _ in 0..10 {
            m.tick(FRAME);
        }
        m.pointer_leave();
        assert_eq!(m.offset().raw_dx, 0.0);
        let frames = (1..=180).find(|_| {
            m.tick(FRAME);
            !m.is_animating()
        });
        assert!(frames.is_some(), "spring must come to rest after pointer leaves");
        assert_eq!(m.offset(), PointerOffset::default());
    }

    #[test]
    fn center_pointer_means_no_pull() {
        let mut m = MagneticButton::default();
        m.pointer_move(button().center(), button());
        assert_eq!(m.offset(), PointerOffset::default());
        assert!(!m.is_animating());
    }
}
