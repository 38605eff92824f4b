//! Damped harmonic oscillator, ticked once per frame.
//!
//! `a = (-k·(x − target) − c·v) / m`, integrated with semi-implicit Euler in
//! fixed sub-steps so a long frame cannot blow the integrator up. The spring
//! snaps to its target and stops once both displacement and speed are under
//! the rest thresholds, so "animation after input stops" always terminates.

use serde::Serialize;

/// Largest integration step (seconds).
const MAX_SUBSTEP: f32 = 1.0 / 240.0;
/// Frame hitches beyond this are treated as this long.
const MAX_FRAME: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Settle when |x − target| is below this …
    pub rest_delta: f32,
    /// … and |v| is below this.
    pub rest_speed: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    /// Orbit ring: soft and slightly under-damped so the settle is visible.
    pub const ORBIT: SpringConfig = SpringConfig::new(40.0, 10.0, 1.0);

    /// Magnetic button: stiff, light, quick to return.
    pub const MAGNETIC: SpringConfig = SpringConfig::new(300.0, 20.0, 0.5);

    /// Hero headline letters.
    pub const LETTER: SpringConfig = SpringConfig::new(150.0, 15.0, 1.0);

    pub fn with_rest(mut self, delta: f32, speed: f32) -> Self {
        self.rest_delta = delta;
        self.rest_speed = speed;
        self
    }

    /// ζ = c / (2·√(k·m)); below 1 overshoots, at/above 1 does not.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(100.0, 10.0, 1.0)
    }
}

/// One-dimensional spring-driven value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    animating: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
            animating: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Retarget. In-flight velocity is kept, so a new target supersedes the
    /// current settle without a jump.
    pub fn set_target(&mut self, target: f32) {
        if !target.is_finite() || target == self.target {
            return;
        }
        self.target = target;
        self.animating = true;
    }

    /// Teleport to `value` at rest.
    pub fn jump(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.animating = false;
    }

    /// Advance by `dt` seconds; returns the new value.
    pub fn step(&mut self, dt: f32) -> f32 {
        if !self.animating || !dt.is_finite() || dt <= 0.0 {
            return self.value;
        }
        let SpringConfig { stiffness, damping, mass, .. } = self.config;
        let inv_mass = 1.0 / mass.max(f32::EPSILON);
        let mut remaining = dt.min(MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let accel = (-stiffness * (self.value - self.target) - damping * self.velocity) * inv_mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.animating = false;
        }
        self.value
    }
}

/// Two independent springs sharing one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(config, 0.0),
            y: Spring::new(config, 0.0),
        }
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn step(&mut self, dt: f32) -> (f32, f32) {
        (self.x.step(dt), self.y.step(dt))
    }

    pub fn value(&self) -> (f32, f32) {
        (self.x.value(), self.y.value())
    }

    pub fn is_animating(&self) -> bool {
        self.x.is_animating() || self.y.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn frames_to_settle(spring: &mut Spring, limit: usize) -> Option<usize> {
        (1..=limit).find(|_| {
            spring.step(FRAME);
            !spring.is_animating()
        })
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut s = Spring::new(SpringConfig::MAGNETIC, 0.0);
        s.set_target(40.0);
        let frames = frames_to_settle(&mut s, 240).expect("magnetic spring must settle");
        assert!(frames < 120, "took {frames} frames");
        assert_eq!(s.value(), 40.0);
        assert_eq!(s.velocity(), 0.0);
    }

    #[test]
    fn orbit_spring_overshoots_then_settles() {
        assert!(SpringConfig::ORBIT.damping_ratio() < 1.0);
        let mut s = Spring::new(SpringConfig::ORBIT, 0.0);
        s.set_target(72.0);
        let mut peak = 0.0f32;
        for _ in 0..600 {
            peak = peak.max(s.step(FRAME));
            if !s.is_animating() {
                break;
            }
        }
        assert!(peak > 72.0, "expected a visible overshoot");
        assert!(!s.is_animating());
        assert_eq!(s.value(), 72.0);
    }

    #[test]
    fn retarget_keeps_velocity() {
        let mut s = Spring::new(SpringConfig::MAGNETIC, 0.0);
        s.set_target(100.0);
        s.step(FRAME);
        s.step(FRAME);
        let v = s.velocity();
        assert!(v > 0.0);
        s.set_target(-100.0);
        assert_eq!(s.velocity(), v);
        assert!(s.is_animating());
    }

    #[test]
    fn idle_spring_does_not_move() {
        let mut s = Spring::new(SpringConfig::default(), 5.0);
        assert_eq!(s.step(FRAME), 5.0);
        s.set_target(5.0);
        assert!(!s.is_animating());
        s.set_target(f32::NAN);
        assert!(!s.is_animating());
    }

    #[test]
    fn long_frames_stay_stable() {
        let mut s = Spring::new(SpringConfig::MAGNETIC, 0.0);
        s.set_target(10.0);
        for _ in 0..40 {
            let v = s.step(1.0);
            assert!(v.is_finite() && v.abs() < 100.0);
        }
        assert!(!s.is_animating());
    }

    #[test]
    fn jump_stops_motion() {
        let mut s = Spring::new(SpringConfig::ORBIT, 0.0);
        s.set_target(200.0);
        s.step(FRAME);
        s.jump(3.0);
        assert!(!s.is_animating());
        assert_eq!(s.value(), 3.0);
        assert_eq!(s.target(), 3.0);
    }
}
