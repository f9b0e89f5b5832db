use engine::Rect;
use glam::IVec2;

use crate::input::Intent;

/// A player-steered rectangle kept inside `area`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    bounds: Rect,
    speed: i32,
    area: Rect,
}

impl Actor {
    pub fn new(bounds: Rect, speed: i32, area: Rect) -> Self {
        Self {
            bounds,
            speed,
            area,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move `speed` pixels along each requested axis.
    ///
    /// Axes are independent, so diagonals are not normalised. A step is taken
    /// while the leading edge is still strictly inside the area, checked
    /// before moving, which lets the actor end up to `speed - 1` pixels past
    /// the edge.
    pub fn step(&mut self, intent: &Intent) {
        let mut delta = IVec2::ZERO;
        if intent.down && self.bounds.bottom() < self.area.bottom() {
            delta.y += self.speed;
        }
        if intent.up && self.bounds.top() > self.area.top() {
            delta.y -= self.speed;
        }
        if intent.right && self.bounds.right() < self.area.right() {
            delta.x += self.speed;
        }
        if intent.left && self.bounds.left() > self.area.left() {
            delta.x -= self.speed;
        }
        self.bounds.translate(delta);
    }
}
