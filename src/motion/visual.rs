//! Derived visual state: progress in, style parameters out.
//!
//! Each channel (opacity, translate, scale, rotation, blur) has its own
//! optional curve; channels without a curve stay at the identity value.
//! Presets reproduce the scroll choreography of the brochure sections.

use serde::Serialize;

use crate::motion::curve::{CurveError, InterpolationCurve};
use crate::motion::lerp;

/// Per-frame presentation parameters for one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualState {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    /// Degrees.
    pub rotation: f32,
    /// Blur radius in pixels.
    pub blur: f32,
}

impl VisualState {
    pub const IDENTITY: VisualState = VisualState {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotation: 0.0,
        blur: 0.0,
    };

    /// Hidden pre-entrance state: transparent, pushed down by `offset_y`,
    /// blurred by `blur`.
    pub fn hidden(offset_y: f32, blur: f32) -> Self {
        Self {
            opacity: 0.0,
            translate_y: offset_y,
            blur,
            ..Self::IDENTITY
        }
    }

    /// Channel-wise interpolation towards `to`.
    pub fn mix(&self, to: &VisualState, t: f32) -> VisualState {
        VisualState {
            opacity: lerp(self.opacity, to.opacity, t),
            translate_x: lerp(self.translate_x, to.translate_x, t),
            translate_y: lerp(self.translate_y, to.translate_y, t),
            scale: lerp(self.scale, to.scale, t),
            rotation: lerp(self.rotation, to.rotation, t),
            blur: lerp(self.blur, to.blur, t),
        }
    }

    /// Inline style declaration for a DOM-like presentation layer.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.2}px, {:.2}px) scale({:.3}) rotate({:.2}deg); filter: blur({:.2}px)",
            self.opacity, self.translate_x, self.translate_y, self.scale, self.rotation, self.blur
        )
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Independent curves over one shared progress value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualCurves {
    pub opacity: Option<InterpolationCurve>,
    pub translate_x: Option<InterpolationCurve>,
    pub translate_y: Option<InterpolationCurve>,
    pub scale: Option<InterpolationCurve>,
    pub rotation: Option<InterpolationCurve>,
    pub blur: Option<InterpolationCurve>,
}

impl VisualCurves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_opacity(mut self, curve: InterpolationCurve) -> Self {
        self.opacity = Some(curve);
        self
    }

    pub fn with_translate_x(mut self, curve: InterpolationCurve) -> Self {
        self.translate_x = Some(curve);
        self
    }

    pub fn with_translate_y(mut self, curve: InterpolationCurve) -> Self {
        self.translate_y = Some(curve);
        self
    }

    pub fn with_scale(mut self, curve: InterpolationCurve) -> Self {
        self.scale = Some(curve);
        self
    }

    pub fn with_rotation(mut self, curve: InterpolationCurve) -> Self {
        self.rotation = Some(curve);
        self
    }

    pub fn with_blur(mut self, curve: InterpolationCurve) -> Self {
        self.blur = Some(curve);
        self
    }

    /// Evaluate every channel at `progress`.
    pub fn evaluate(&self, progress: f32) -> VisualState {
        let id = VisualState::IDENTITY;
        let at = |c: &Option<InterpolationCurve>, default: f32| {
            c.as_ref().map_or(default, |c| c.sample(progress))
        };
        VisualState {
            opacity: at(&self.opacity, id.opacity),
            translate_x: at(&self.translate_x, id.translate_x),
            translate_y: at(&self.translate_y, id.translate_y),
            scale: at(&self.scale, id.scale),
            rotation: at(&self.rotation, id.rotation),
            blur: at(&self.blur, id.blur),
        }
    }

    // ── Presets ─────────────────────────────────────────────────────────────

    /// Process step scrubbing over `["start 80%", "center center", "end 20%"]`:
    /// fade/scale/slide in, hold, fade/scale/slide out.
    pub fn process_step() -> Result<Self, CurveError> {
        const KEYS: [f32; 4] = [0.0, 0.3, 0.7, 1.0];
        let window = |values: [f32; 4]| {
            let pairs: Vec<(f32, f32)> = KEYS.iter().copied().zip(values).collect();
            InterpolationCurve::new(&pairs)
        };
        Ok(Self::new()
            .with_opacity(window([0.0, 1.0, 1.0, 0.0])?)
            .with_scale(window([0.98, 1.0, 1.0, 0.98])?)
            .with_translate_y(window([15.0, 0.0, 0.0, -15.0])?))
    }

    /// Hero headline: fades out over the first half of the hero's exit.
    pub fn hero_text() -> Result<Self, CurveError> {
        Ok(Self::new().with_opacity(InterpolationCurve::new(&[(0.0, 1.0), (0.5, 0.0)])?))
    }

    /// Hero video: drifts down 30% of `height` while settling from 110% scale.
    pub fn hero_video(height: f32) -> Result<Self, CurveError> {
        Ok(Self::new()
            .with_translate_y(InterpolationCurve::linear(0.0, 0.3 * height)?)
            .with_scale(InterpolationCurve::linear(1.1, 1.0)?))
    }

    /// Letterbox bars closing over the hero: `translate_y` carries the bar
    /// height as a fraction of the hero (0 → 15% by progress 0.6).
    pub fn hero_letterbox() -> Result<Self, CurveError> {
        Ok(Self::new()
            .with_translate_y(InterpolationCurve::new(&[(0.0, 0.0), (0.6, 0.15)])?)
            .with_opacity(InterpolationCurve::new(&[(0.0, 0.0), (0.3, 1.0)])?))
    }

    /// Vertical parallax drift from `from` to `to` pixels over the window.
    pub fn parallax(from: f32, to: f32) -> Result<Self, CurveError> {
        Ok(Self::new().with_translate_y(InterpolationCurve::linear(from, to)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_curves_yield_identity() {
        assert_eq!(VisualCurves::new().evaluate(0.37), VisualState::IDENTITY);
    }

    #[test]
    fn process_step_window() {
        let c = VisualCurves::process_step().unwrap();
        let before = c.evaluate(-1.0);
        assert_eq!(before.opacity, 0.0);
        assert_eq!(before.scale, 0.98);
        assert_eq!(before.translate_y, 15.0);

        let hold = c.evaluate(0.5);
        assert_eq!(hold.opacity, 1.0);
        assert_eq!(hold.scale, 1.0);
        assert_eq!(hold.translate_y, 0.0);

        let after = c.evaluate(2.0);
        assert_eq!(after.opacity, 0.0);
        assert_eq!(after.translate_y, -15.0);
    }

    #[test]
    fn hero_text_fades_by_midpoint() {
        let c = VisualCurves::hero_text().unwrap();
        assert_eq!(c.evaluate(0.0).opacity, 1.0);
        assert!((c.evaluate(0.25).opacity - 0.5).abs() < 1e-6);
        assert_eq!(c.evaluate(0.9).opacity, 0.0);
    }

    #[test]
    fn mix_and_css() {
        let hidden = VisualState::hidden(20.0, 12.0);
        let half = hidden.mix(&VisualState::IDENTITY, 0.5);
        assert!((half.opacity - 0.5).abs() < 1e-6);
        assert!((half.translate_y - 10.0).abs() < 1e-6);
        assert!((half.blur - 6.0).abs() < 1e-6);
        let css = VisualState::IDENTITY.to_css();
        assert!(css.starts_with("opacity: 1.000;"));
        assert!(css.contains("blur(0.00px)"));
    }
}
