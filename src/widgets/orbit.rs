//! Orbit selector: a ring of services that rotates the selection to the top.
//!
//! N nodes sit at fixed angles `i * 360/N` (clockwise from 12 o'clock) on a
//! ring. Selecting node `i` springs the ring to `(360 − angle_i) mod 360`, which
//! brings that node to the top. Node contents counter-rotate by the ring's
//! *animated* value every frame so labels stay upright mid-flight.
//!
//! ```text
//!            ● ← selected (0°)
//!        ●         ●
//!          ●     ●
//! ```

use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::motion::spring::{Spring, SpringConfig};
use crate::motion::Point;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrbitError {
    #[error("an orbit needs at least one node")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitNode {
    pub id: usize,
    pub label: String,
    pub angle_degrees: f32,
    pub detail: String,
}

/// Snapshot of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitState {
    pub selected: usize,
    /// Animated ring rotation normalised to `[0, 360)`.
    pub ring_rotation_degrees: f32,
}

/// Normalise degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f32) -> f32 {
    let d = deg.rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}

/// Shortest signed turn from `from` to `to`, in `(-180, 180]`.
fn shortest_turn(from: f32, to: f32) -> f32 {
    let d = normalize_degrees(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

pub struct OrbitSelector {
    nodes: Vec<OrbitNode>,
    selected: usize,
    ring: Spring,
}

impl OrbitSelector {
    /// Build from `(label, detail)` pairs; node 0 starts selected at 0°.
    pub fn new<L, D>(items: &[(L, D)]) -> Result<Self, OrbitError>
    where
        L: AsRef<str>,
        D: AsRef<str>,
    {
        Self::with_spring(items, SpringConfig::ORBIT)
    }

    pub fn with_spring<L, D>(items: &[(L, D)], spring: SpringConfig) -> Result<Self, OrbitError>
    where
        L: AsRef<str>,
        D: AsRef<str>,
    {
        if items.is_empty() {
            return Err(OrbitError::Empty);
        }
        let step = 360.0 / items.len() as f32;
        let nodes = items
            .iter()
            .enumerate()
            .map(|(id, (label, detail))| OrbitNode {
                id,
                label: label.as_ref().to_string(),
                angle_degrees: id as f32 * step,
                detail: detail.as_ref().to_string(),
            })
            .collect();
        Ok(Self {
            nodes,
            selected: 0,
            ring: Spring::new(spring, 0.0),
        })
    }

    pub fn nodes(&self) -> &[OrbitNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Node whose detail the content panel shows.
    pub fn selected_node(&self) -> &OrbitNode {
        &self.nodes[self.selected]
    }

    pub fn state(&self) -> OrbitState {
        OrbitState {
            selected: self.selected,
            ring_rotation_degrees: self.ring_rotation(),
        }
    }

    /// Settled rotation that brings `id` to the top.
    pub fn target_rotation(&self, id: usize) -> Option<f32> {
        self.nodes
            .get(id)
            .map(|n| normalize_degrees(360.0 - n.angle_degrees))
    }

    /// Select `id` from any input path. Returns `true` if the selection
    /// changed; re-selecting the current node and unknown ids are no-ops.
    pub fn select(&mut self, id: usize) -> bool {
        let Some(target) = self.target_rotation(id) else {
            debug!("orbit: ignoring unknown node {id}");
            return false;
        };
        if id == self.selected {
            return false;
        }
        self.selected = id;
        // Travel the shortest arc from where the ring is right now.
        let current = self.ring.value();
        self.ring.set_target(current + shortest_turn(current, target));
        debug!("orbit: selected {id} ({}), ring → {target:.1}°", self.nodes[id].label);
        true
    }

    /// Pointer hover path (pointer-capable surfaces only).
    pub fn hover(&mut self, id: usize) -> bool {
        self.select(id)
    }

    /// Explicit activation: click, tap, Enter/Space.
    pub fn activate(&mut self, id: usize) -> bool {
        self.select(id)
    }

    /// Keyboard: next node clockwise.
    pub fn select_next(&mut self) -> bool {
        self.select((self.selected + 1) % self.nodes.len())
    }

    /// Keyboard: previous node.
    pub fn select_previous(&mut self) -> bool {
        let n = self.nodes.len();
        self.select((self.selected + n - 1) % n)
    }

    /// Advance the ring spring; returns the unwrapped animated rotation.
    pub fn tick(&mut self, dt: f32) -> f32 {
        self.ring.step(dt)
    }

    pub fn is_animating(&self) -> bool {
        self.ring.is_animating()
    }

    /// Animated rotation, unwrapped (may leave `[0, 360)` mid-flight).
    pub fn animated_rotation(&self) -> f32 {
        self.ring.value()
    }

    /// Animated rotation normalised to `[0, 360)`.
    pub fn ring_rotation(&self) -> f32 {
        normalize_degrees(self.ring.value())
    }

    /// Rotation to apply to node `id`'s contents so they stay upright.
    pub fn node_content_rotation(&self, id: usize) -> Option<f32> {
        self.nodes
            .get(id)
            .map(|n| -(self.ring.value() + n.angle_degrees))
    }

    /// On-screen position of node `id` for a ring centred at `center`.
    pub fn node_position(&self, id: usize, center: Point, radius: f32) -> Option<Point> {
        let node = self.nodes.get(id)?;
        let theta = (self.ring.value() + node.angle_degrees).to_radians();
        Some(Point::new(
            center.x + radius * theta.sin(),
            center.y - radius * theta.cos(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn services() -> OrbitSelector {
        OrbitSelector::new(&[
            ("Liquid Elastomers", "Seamless membranes."),
            ("Custom Fabrication", "Copper and zinc."),
            ("Thermal Modeling", "Infrared mapping."),
            ("Structural Engineering", "Load analysis."),
            ("Generational Warranty", "25-50 year coverage."),
        ])
        .unwrap()
    }

    fn settle(orbit: &mut OrbitSelector) {
        for _ in 0..2000 {
            orbit.tick(FRAME);
            if !orbit.is_animating() {
                return;
            }
        }
        panic!("orbit never settled");
    }

    fn circular_distance(a: f32, b: f32) -> f32 {
        shortest_turn(a, b).abs()
    }

    #[test]
    fn rejects_empty_ring() {
        let none: [(&str, &str); 0] = [];
        assert_eq!(OrbitSelector::new(&none).err(), Some(OrbitError::Empty));
    }

    #[test]
    fn angles_are_evenly_spaced() {
        let o = services();
        let angles: Vec<f32> = o.nodes().iter().map(|n| n.angle_degrees).collect();
        assert_eq!(angles, vec![0.0, 72.0, 144.0, 216.0, 288.0]);
        assert_eq!(o.state(), OrbitState { selected: 0, ring_rotation_degrees: 0.0 });
    }

    #[test]
    fn settled_rotation_brings_selection_to_top() {
        let mut o = services();
        for id in [3, 1, 4, 0, 2, 2, 4] {
            o.select(id);
            settle(&mut o);
            let expected = normalize_degrees(360.0 - o.nodes()[id].angle_degrees);
            let got = o.state().ring_rotation_degrees;
            assert!(
                circular_distance(got, expected) < 1e-3,
                "node {id}: got {got}, expected {expected}"
            );
            let top = o.node_position(id, Point::ZERO, 100.0).unwrap();
            assert!(top.x.abs() < 0.01 && (top.y + 100.0).abs() < 0.01);
        }
    }

    #[test]
    fn reselecting_is_a_no_op() {
        let mut o = services();
        assert!(o.select(2));
        settle(&mut o);
        let before = o.state();
        assert!(!o.select(2));
        assert!(!o.is_animating());
        assert_eq!(o.state(), before);
    }

    #[test]
    fn unknown_node_is_ignored() {
        let mut o = services();
        assert!(!o.select(99));
        assert_eq!(o.selected(), 0);
    }

    #[test]
    fn labels_stay_upright_every_frame() {
        let mut o = services();
        o.activate(3);
        for _ in 0..120 {
            o.tick(FRAME);
            for node in o.nodes() {
                let content = o.node_content_rotation(node.id).unwrap();
                let total = o.animated_rotation() + node.angle_degrees + content;
                assert!(total.abs() < 1e-3);
            }
        }
    }

    #[test]
    fn counter_rotation_tracks_animation_not_target() {
        let mut o = services();
        o.select(1);
        o.tick(FRAME);
        let mid = o.node_content_rotation(1).unwrap();
        // Ring heading to -72 (shortest arc to 288°); after one frame it has
        // barely moved, so the content is still near -72.
        assert!(mid < -60.0 && mid > -72.0);
    }

    #[test]
    fn keyboard_navigation_wraps() {
        let mut o = services();
        assert!(o.select_previous());
        assert_eq!(o.selected(), 4);
        assert!(o.select_next());
        assert_eq!(o.selected(), 0);
        assert!(o.hover(1));
        assert_eq!(o.selected_node().label, "Custom Fabrication");
    }
}
