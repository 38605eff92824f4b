//! Scroll progress tracking.
//!
//! A [`ScrollBinding`] describes *when* a region's animation window starts and
//! ends, using the familiar `"<element edge> <viewport edge>"` offsets:
//!
//! - `"start end"`   element top meets viewport bottom (entering)
//! - `"end start"`   element bottom meets viewport top (leaving)
//! - `"start 80%"`   element top meets 80% down the viewport
//!
//! A [`ScrollProgressTracker`] owns one binding for one mounted region. The
//! front-end pushes measured geometry in on scroll/resize, flushes once per
//! frame, and the tracker notifies subscribers when progress changes.

use log::debug;
use thiserror::Error;

use crate::motion::clamp01;
use crate::motion::curve::InterpolationCurve;

/// Rejected scroll binding configurations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrollError {
    #[error("unrecognised scroll offset `{0}`")]
    BadOffset(String),

    #[error("a scroll binding needs at least 2 edges, got {0}")]
    TooFewEdges(usize),
}

/// One alignment point between the tracked element and the viewport, both as
/// fractions of their respective heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub element: f32,
    pub viewport: f32,
}

impl ScrollOffset {
    pub const fn new(element: f32, viewport: f32) -> Self {
        Self { element, viewport }
    }

    pub const START_END: ScrollOffset = ScrollOffset::new(0.0, 1.0);
    pub const END_START: ScrollOffset = ScrollOffset::new(1.0, 0.0);
    pub const START_START: ScrollOffset = ScrollOffset::new(0.0, 0.0);
    pub const CENTER_CENTER: ScrollOffset = ScrollOffset::new(0.5, 0.5);

    /// Parse `"start 80%"`, `"center center"`, `"end 0.2"` …
    ///
    /// A single token applies to both element and viewport (`"center"`).
    pub fn parse(input: &str) -> Result<Self, ScrollError> {
        let bad = || ScrollError::BadOffset(input.to_string());
        let mut parts = input.split_whitespace();
        let element = parts.next().and_then(parse_edge).ok_or_else(bad)?;
        let viewport = match parts.next() {
            Some(tok) => parse_edge(tok).ok_or_else(bad)?,
            None => element,
        };
        if parts.next().is_some() {
            return Err(bad());
        }
        Ok(Self { element, viewport })
    }

    /// Distance the page still has to scroll before this alignment happens.
    /// Negative once it has been passed.
    fn remaining(&self, layout: &ScrollLayout) -> f32 {
        layout.element_top + self.element * layout.element_height
            - self.viewport * layout.viewport_height
    }
}

fn parse_edge(tok: &str) -> Option<f32> {
    match tok {
        "start" | "top" => Some(0.0),
        "center" => Some(0.5),
        "end" | "bottom" => Some(1.0),
        _ => {
            let value = match tok.strip_suffix('%') {
                Some(pct) => pct.parse::<f32>().ok()? / 100.0,
                None => tok.parse::<f32>().ok()?,
            };
            value.is_finite().then_some(value)
        }
    }
}

/// Measured geometry of a tracked region, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollLayout {
    /// Element top edge measured from the viewport top (negative once
    /// scrolled past).
    pub element_top: f32,
    pub element_height: f32,
    pub viewport_height: f32,
}

impl ScrollLayout {
    pub const fn new(element_top: f32, element_height: f32, viewport_height: f32) -> Self {
        Self { element_top, element_height, viewport_height }
    }

    fn is_finite(&self) -> bool {
        self.element_top.is_finite()
            && self.element_height.is_finite()
            && self.viewport_height.is_finite()
    }
}

/// Start/end (and optional intermediate) edges plus an optional output remap.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollBinding {
    edges: Vec<ScrollOffset>,
    remap: Option<InterpolationCurve>,
}

impl ScrollBinding {
    pub fn new(start: ScrollOffset, end: ScrollOffset) -> Self {
        Self { edges: vec![start, end], remap: None }
    }

    /// Multi-edge binding: progress is 0 at the first edge, 1 at the last,
    /// and evenly spaced at intermediate edges.
    pub fn with_edges(edges: Vec<ScrollOffset>) -> Result<Self, ScrollError> {
        if edges.len() < 2 {
            return Err(ScrollError::TooFewEdges(edges.len()));
        }
        Ok(Self { edges, remap: None })
    }

    /// `ScrollBinding::parse(&["start end", "end start"])`
    pub fn parse(specs: &[&str]) -> Result<Self, ScrollError> {
        let edges = specs
            .iter()
            .map(|s| ScrollOffset::parse(s))
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_edges(edges)
    }

    /// Pass raw progress through `curve` before publishing it.
    pub fn with_remap(mut self, curve: InterpolationCurve) -> Self {
        self.remap = Some(curve);
        self
    }

    pub fn edges(&self) -> &[ScrollOffset] {
        &self.edges
    }

    /// Progress for `layout`, or `None` when the window is degenerate
    /// (zero-height element, non-increasing thresholds, non-finite input).
    pub fn progress(&self, layout: &ScrollLayout) -> Option<f32> {
        if !layout.is_finite() || layout.element_height <= 0.0 {
            return None;
        }
        let n = (self.edges.len() - 1) as f32;
        // Thresholds relative to the current scroll position; progress is the
        // window curve sampled at "now" (0).
        let pairs: Vec<(f32, f32)> = self
            .edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (edge.remaining(layout), i as f32 / n))
            .collect();
        let window = InterpolationCurve::new(&pairs).ok()?;
        let raw = clamp01(window.sample(0.0));
        Some(match &self.remap {
            Some(curve) => curve.sample(raw),
            None => raw,
        })
    }
}

/// Handle returned by [`ScrollProgressTracker::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(f32)>;

/// Per-region progress state with push-based subscriptions.
pub struct ScrollProgressTracker {
    binding: ScrollBinding,
    progress: f32,
    pending: Option<ScrollLayout>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
    mounted: bool,
    recomputes: u64,
}

impl ScrollProgressTracker {
    pub fn new(binding: ScrollBinding) -> Self {
        Self {
            binding,
            progress: 0.0,
            pending: None,
            subscribers: Vec::new(),
            next_id: 0,
            mounted: true,
            recomputes: 0,
        }
    }

    /// Pull-based read of the last published value.
    pub fn current_progress(&self) -> f32 {
        self.progress
    }

    pub fn binding(&self) -> &ScrollBinding {
        &self.binding
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of recomputations performed (coalesced pushes count once).
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Record the latest layout; cheap, safe to call for every event.
    pub fn push_layout(&mut self, layout: ScrollLayout) {
        if !self.mounted {
            return;
        }
        self.pending = Some(layout);
    }

    /// Recompute from the latest pushed layout. Returns `true` when progress
    /// changed and subscribers were notified.
    pub fn flush(&mut self) -> bool {
        let Some(layout) = self.pending.take() else {
            return false;
        };
        if !self.mounted {
            return false;
        }
        self.recomputes += 1;
        let Some(next) = self.binding.progress(&layout) else {
            return false;
        };
        if next == self.progress {
            return false;
        }
        self.progress = next;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(next);
        }
        true
    }

    /// Push and flush in one call.
    pub fn update(&mut self, layout: ScrollLayout) -> f32 {
        self.push_layout(layout);
        self.flush();
        self.progress
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(f32) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    /// Detach from the region: drop subscribers and pending layout. Later
    /// events are ignored.
    pub fn unmount(&mut self) {
        if self.mounted {
            debug!("scroll tracker unmounted with {} subscriber(s)", self.subscribers.len());
        }
        self.mounted = false;
        self.pending = None;
        self.subscribers.clear();
    }
}
