use glam::IVec2;

/// Integer axis-aligned rectangle in window pixels.
///
/// The position is mutable, the size is fixed once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pos: IVec2,
    size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Rectangle of `size` whose center lands on `center`.
    ///
    /// Odd sizes round the top-left corner down, matching integer division.
    pub fn from_center(center: IVec2, size: IVec2) -> Self {
        Self {
            pos: center - half(size),
            size,
        }
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn left(&self) -> i32 {
        self.pos.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn center(&self) -> IVec2 {
        self.pos + half(self.size)
    }

    /// Midpoint of the right edge.
    pub fn mid_right(&self) -> IVec2 {
        IVec2::new(self.right(), self.pos.y + self.size.y.div_euclid(2))
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.pos += delta;
    }

    /// Strict overlap test. Touching edges and empty rectangles never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }
}

fn half(v: IVec2) -> IVec2 {
    IVec2::new(v.x.div_euclid(2), v.y.div_euclid(2))
}
