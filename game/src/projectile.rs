use engine::Rect;
use glam::IVec2;

/// A shot flying right at a fixed speed. Leaving the play area is handled by
/// whoever owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projectile {
    bounds: Rect,
    speed: i32,
}

impl Projectile {
    pub fn new(bounds: Rect, speed: i32) -> Self {
        Self { bounds, speed }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn advance(&mut self) {
        self.bounds.translate(IVec2::new(self.speed, 0));
    }
}
