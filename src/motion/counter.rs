//! Count-up statistics ("2,500+ Projects Completed").
//!
//! The counter is idle until started (normally by a reveal), then climbs
//! linearly from zero to its target over a fixed duration and stays there.

use crate::format::format_thousands;

/// Default climb time in seconds.
pub const COUNT_UP_SECONDS: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u32,
    suffix: &'static str,
    duration: f32,
    started_at: Option<f32>,
}

impl CountUp {
    pub fn new(target: u32, suffix: &'static str) -> Self {
        Self {
            target,
            suffix,
            duration: COUNT_UP_SECONDS,
            started_at: None,
        }
    }

    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Start counting at clock time `now`; later calls are ignored.
    pub fn start(&mut self, now: f32) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Displayed value at `now`.
    pub fn value_at(&self, now: f32) -> u32 {
        let Some(start) = self.started_at else {
            return 0;
        };
        let elapsed = now - start;
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.target;
        }
        if elapsed <= 0.0 {
            return 0;
        }
        let fraction = (elapsed / self.duration) as f64;
        (self.target as f64 * fraction).floor() as u32
    }

    pub fn is_animating(&self, now: f32) -> bool {
        self.started_at
            .is_some_and(|start| now - start < self.duration)
    }

    /// `"2,500+"` style label.
    pub fn label_at(&self, now: f32) -> String {
        format!("{}{}", format_thousands(self.value_at(now) as u64), self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_started() {
        let c = CountUp::new(2500, "+");
        assert_eq!(c.value_at(100.0), 0);
        assert!(!c.is_animating(100.0));
    }

    #[test]
    fn climbs_linearly_and_lands_on_target() {
        let mut c = CountUp::new(2500, "+");
        c.start(1.0);
        c.start(5.0);
        assert_eq!(c.value_at(1.0), 0);
        assert_eq!(c.value_at(2.0), 1250);
        assert!(c.is_animating(2.0));
        assert_eq!(c.value_at(3.0), 2500);
        assert_eq!(c.label_at(3.0), "2,500+");
        assert!(!c.is_animating(3.0));
    }

    #[test]
    fn suffix_and_small_targets() {
        let mut c = CountUp::new(98, "%").with_duration(1.0);
        c.start(0.0);
        assert_eq!(c.label_at(10.0), "98%");
        assert_eq!(c.value_at(0.5), 49);
    }
}
