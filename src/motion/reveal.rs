//! One-shot reveal-on-scroll.
//!
//! A [`RevealOrchestrator`] watches a region's layout against a viewport
//! margin. The first time the region intersects the (shrunk or grown)
//! viewport it flips to [`RevealState::Revealed`] and plays its
//! [`Entrance`]; it never re-arms. Children can be staggered:
//! `delay[i] = base_delay + i * interval`.

use log::debug;
use serde::Serialize;

use crate::motion::clamp01;
use crate::motion::curve::CubicBezier;
use crate::motion::scroll::ScrollLayout;
use crate::motion::visual::VisualState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// One edge of a viewport margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inset {
    /// Fraction of the viewport height (`-0.1` for `"-10%"`).
    Fraction(f32),
    Pixels(f32),
}

impl Inset {
    fn resolve(&self, viewport_height: f32) -> f32 {
        match *self {
            Inset::Fraction(f) => f * viewport_height,
            Inset::Pixels(px) => px,
        }
    }

    fn parse(tok: &str) -> Option<Inset> {
        if let Some(pct) = tok.strip_suffix('%') {
            return pct.parse::<f32>().ok().map(|v| Inset::Fraction(v / 100.0));
        }
        let px = tok.strip_suffix("px").unwrap_or(tok);
        px.parse::<f32>().ok().map(Inset::Pixels)
    }
}

/// Grows (positive) or shrinks (negative) the observed viewport area
/// vertically, like an intersection-observer root margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMargin {
    pub top: Inset,
    pub bottom: Inset,
}

impl ViewportMargin {
    pub const NONE: ViewportMargin = ViewportMargin {
        top: Inset::Pixels(0.0),
        bottom: Inset::Pixels(0.0),
    };

    /// Same fractional inset on both edges.
    pub const fn uniform(fraction: f32) -> Self {
        Self {
            top: Inset::Fraction(fraction),
            bottom: Inset::Fraction(fraction),
        }
    }

    /// Parse a CSS-like margin: `"-10%"`, `"-40% 0px -40% 0px"`, `"20px 0px"`.
    /// Horizontal components are accepted and ignored. Unparseable input
    /// falls back to [`ViewportMargin::NONE`].
    pub fn parse(input: &str) -> Self {
        let toks: Vec<Inset> = match input
            .split_whitespace()
            .map(Inset::parse)
            .collect::<Option<Vec<_>>>()
        {
            Some(t) => t,
            None => {
                debug!("ignoring unparseable viewport margin `{input}`");
                return Self::NONE;
            }
        };
        match toks.as_slice() {
            [all] => Self { top: *all, bottom: *all },
            [vertical, _] => Self { top: *vertical, bottom: *vertical },
            [top, _, bottom] | [top, _, bottom, _] => Self { top: *top, bottom: *bottom },
            _ => Self::NONE,
        }
    }

    /// Whether the region currently intersects the observed area.
    pub fn intersects(&self, layout: &ScrollLayout) -> bool {
        let vh = layout.viewport_height;
        let area_top = -self.top.resolve(vh);
        let area_bottom = vh + self.bottom.resolve(vh);
        if !(area_bottom > area_top) {
            return false;
        }
        let top = layout.element_top;
        let bottom = top + layout.element_height.max(0.0);
        if layout.element_height > 0.0 {
            top < area_bottom && bottom > area_top
        } else {
            top >= area_top && top <= area_bottom
        }
    }
}

impl Default for ViewportMargin {
    fn default() -> Self {
        Self::NONE
    }
}

/// Terminal entrance animation played once on reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub from: VisualState,
    pub to: VisualState,
    /// Seconds.
    pub duration: f32,
    /// Seconds.
    pub delay: f32,
    pub easing: CubicBezier,
}

impl Entrance {
    pub fn new(from: VisualState, duration: f32) -> Self {
        Self {
            from,
            to: VisualState::IDENTITY,
            duration,
            delay: 0.0,
            easing: CubicBezier::EXPO_OUT,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: CubicBezier) -> Self {
        self.easing = easing;
        self
    }

    /// Blur + rise + fade, 0.8s.
    pub fn blur_reveal() -> Self {
        Self::new(VisualState::hidden(20.0, 12.0), 0.8)
    }

    /// Rise + fade, 1s.
    pub fn fade_up() -> Self {
        Self::new(VisualState::hidden(15.0, 0.0), 1.0)
    }

    /// Sections settle from 98% scale and 80% opacity, 1.2s.
    pub fn section_settle() -> Self {
        let from = VisualState {
            opacity: 0.8,
            scale: 0.98,
            ..VisualState::IDENTITY
        };
        Self::new(from, 1.2)
    }

    /// State `elapsed` seconds after the reveal, with `extra_delay` on top of
    /// the entrance's own delay.
    pub fn at(&self, elapsed: f32, extra_delay: f32) -> VisualState {
        let local = elapsed - self.delay - extra_delay;
        let t = if self.duration <= 0.0 {
            if local >= 0.0 { 1.0 } else { 0.0 }
        } else {
            clamp01(local / self.duration)
        };
        self.from.mix(&self.to, self.easing.ease(t))
    }

    pub fn is_finished(&self, elapsed: f32, extra_delay: f32) -> bool {
        elapsed >= self.delay + extra_delay + self.duration.max(0.0)
    }
}

/// Incremental per-child delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub base_delay: f32,
    pub interval: f32,
}

impl Stagger {
    pub const fn new(base_delay: f32, interval: f32) -> Self {
        Self { base_delay, interval }
    }

    pub fn delay(&self, index: usize) -> f32 {
        self.base_delay + index as f32 * self.interval
    }
}

/// Per-region reveal state machine.
#[derive(Debug, Clone)]
pub struct RevealOrchestrator {
    margin: ViewportMargin,
    entrance: Entrance,
    state: RevealState,
    revealed_at: Option<f32>,
    stagger: Option<Stagger>,
    children: usize,
    mounted: bool,
}

impl RevealOrchestrator {
    pub fn new(margin: ViewportMargin, entrance: Entrance) -> Self {
        Self {
            margin,
            entrance,
            state: RevealState::Pending,
            revealed_at: None,
            stagger: None,
            children: 0,
            mounted: true,
        }
    }

    /// Stagger `children` items after the reveal.
    pub fn with_stagger(mut self, stagger: Stagger, children: usize) -> Self {
        self.stagger = Some(stagger);
        self.children = children;
        self
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn revealed_at(&self) -> Option<f32> {
        self.revealed_at
    }

    pub fn entrance(&self) -> &Entrance {
        &self.entrance
    }

    /// Feed one layout observation at clock time `now` (seconds).
    pub fn observe(&mut self, layout: &ScrollLayout, now: f32) -> RevealState {
        if !self.mounted || self.state == RevealState::Revealed {
            return self.state;
        }
        if self.margin.intersects(layout) {
            debug!("region revealed at t={now:.3}s (top={:.1})", layout.element_top);
            self.state = RevealState::Revealed;
            self.revealed_at = Some(now);
        }
        self.state
    }

    /// Force the reveal, e.g. for content above the fold on first paint.
    pub fn reveal_now(&mut self, now: f32) {
        if self.mounted && self.state == RevealState::Pending {
            self.state = RevealState::Revealed;
            self.revealed_at = Some(now);
        }
    }

    /// Region's own visual state at `now`.
    pub fn visual(&self, now: f32) -> VisualState {
        self.visual_with_delay(now, 0.0)
    }

    pub fn child_delay(&self, index: usize) -> f32 {
        self.stagger.map_or(0.0, |s| s.delay(index))
    }

    /// Visual state of staggered child `index` at `now`.
    pub fn child_visual(&self, index: usize, now: f32) -> VisualState {
        self.visual_with_delay(now, self.child_delay(index))
    }

    fn visual_with_delay(&self, now: f32, extra: f32) -> VisualState {
        match self.revealed_at {
            Some(at) => self.entrance.at(now - at, extra),
            None => self.entrance.from,
        }
    }

    /// Whether any part of the entrance is still playing.
    pub fn is_animating(&self, now: f32) -> bool {
        let Some(at) = self.revealed_at else {
            return false;
        };
        let last_delay = if self.children > 0 {
            self.child_delay(self.children - 1)
        } else {
            0.0
        };
        !self.entrance.is_finished(now - at, last_delay)
    }

    /// Stop observing; later observations are dropped.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VH: f32 = 1000.0;

    #[test]
    fn margin_parsing() {
        assert_eq!(ViewportMargin::parse("-10%"), ViewportMargin::uniform(-0.1));
        let m = ViewportMargin::parse("-40% 0px -40% 0px");
        assert_eq!(m.top, Inset::Fraction(-0.4));
        assert_eq!(m.bottom, Inset::Fraction(-0.4));
        assert_eq!(ViewportMargin::parse("20px 0px").top, Inset::Pixels(20.0));
        assert_eq!(ViewportMargin::parse("nonsense"), ViewportMargin::NONE);
    }

    #[test]
    fn shrunk_margin_delays_intersection() {
        let m = ViewportMargin::uniform(-0.2);
        // Observed area is 200..800.
        assert!(!m.intersects(&ScrollLayout::new(850.0, 100.0, VH)));
        assert!(m.intersects(&ScrollLayout::new(750.0, 100.0, VH)));
        assert!(!m.intersects(&ScrollLayout::new(50.0, 100.0, VH)));
        // Zero-height element sitting inside the area.
        assert!(m.intersects(&ScrollLayout::new(500.0, 0.0, VH)));
    }

    #[test]
    fn central_band_for_active_step() {
        let m = ViewportMargin::parse("-40% 0px -40% 0px");
        assert!(m.intersects(&ScrollLayout::new(350.0, 300.0, VH)));
        assert!(!m.intersects(&ScrollLayout::new(650.0, 300.0, VH)));
    }

    #[test]
    fn reveal_is_one_way() {
        let mut r = RevealOrchestrator::new(ViewportMargin::uniform(-0.1), Entrance::blur_reveal());
        assert_eq!(r.observe(&ScrollLayout::new(2000.0, 100.0, VH), 0.0), RevealState::Pending);
        assert_eq!(r.observe(&ScrollLayout::new(500.0, 100.0, VH), 1.0), RevealState::Revealed);
        assert_eq!(r.revealed_at(), Some(1.0));
        assert_eq!(r.observe(&ScrollLayout::new(5000.0, 100.0, VH), 2.0), RevealState::Revealed);
        assert_eq!(r.revealed_at(), Some(1.0));
    }

    #[test]
    fn pre_reveal_state_is_deterministic() {
        let r = RevealOrchestrator::new(ViewportMargin::NONE, Entrance::blur_reveal());
        let v = r.visual(123.0);
        assert_eq!(v.opacity, 0.0);
        assert_eq!(v.translate_y, 20.0);
        assert_eq!(v.blur, 12.0);
        assert!(!r.is_animating(123.0));
    }

    #[test]
    fn entrance_completes_to_identity() {
        let mut r = RevealOrchestrator::new(ViewportMargin::NONE, Entrance::fade_up());
        r.observe(&ScrollLayout::new(100.0, 100.0, VH), 10.0);
        assert!(r.is_animating(10.5));
        let mid = r.visual(10.5);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert_eq!(r.visual(11.0), VisualState::IDENTITY);
        assert!(!r.is_animating(11.0));
    }

    #[test]
    fn stagger_offsets_children() {
        let stagger = Stagger::new(0.2, 0.08);
        assert!((stagger.delay(0) - 0.2).abs() < 1e-6);
        assert!((stagger.delay(3) - 0.44).abs() < 1e-6);

        let mut r = RevealOrchestrator::new(ViewportMargin::NONE, Entrance::fade_up())
            .with_stagger(stagger, 4);
        r.reveal_now(0.0);
        // Child 0 has started, child 3 has not.
        assert!(r.child_visual(0, 0.3).opacity > 0.0);
        assert_eq!(r.child_visual(3, 0.3).opacity, 0.0);
        assert!(r.is_animating(1.3));
        assert!(!r.is_animating(1.45));
    }

    #[test]
    fn unmounted_orchestrator_drops_observations() {
        let mut r = RevealOrchestrator::new(ViewportMargin::NONE, Entrance::fade_up());
        r.unmount();
        assert_eq!(r.observe(&ScrollLayout::new(100.0, 100.0, VH), 0.0), RevealState::Pending);
    }

    proptest! {
        #[test]
        fn never_returns_to_pending(tops in proptest::collection::vec(-3000.0f32..3000.0, 1..40)) {
            let mut r = RevealOrchestrator::new(ViewportMargin::uniform(-0.1), Entrance::fade_up());
            let mut seen_revealed = false;
            for (i, top) in tops.iter().enumerate() {
                let s = r.observe(&ScrollLayout::new(*top, 200.0, VH), i as f32);
                if seen_revealed {
                    prop_assert_eq!(s, RevealState::Revealed);
                }
                seen_revealed |= s == RevealState::Revealed;
            }
        }
    }
}
