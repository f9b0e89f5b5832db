//! Sprite rendering.
//!
//! Games draw into a [`Canvas`]. The engine records a frame into a
//! [`DrawList`] and hands the whole list to [`Graphics::present`], so a frame
//! is either shown complete or not at all.

pub mod graphics;
pub mod vertex;

use glam::UVec2;

use crate::geometry::Rect;

pub use graphics::Graphics;

/// RGBA colour, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Handle to a texture uploaded by [`Graphics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// A loaded image: its texture plus its size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub texture: TextureId,
    pub size: UVec2,
}

impl Sprite {
    pub fn new(texture: TextureId, width: u32, height: u32) -> Self {
        Self {
            texture,
            size: UVec2::new(width, height),
        }
    }
}

pub trait Canvas {
    /// Fill the whole frame with `color`, discarding anything drawn so far.
    fn clear(&mut self, color: Color);

    /// Draw `sprite` stretched over `dest`. Later blits land on top.
    fn blit(&mut self, sprite: &Sprite, dest: Rect);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blit {
    pub texture: TextureId,
    pub dest: Rect,
}

/// One recorded frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub background: Color,
    pub blits: Vec<Blit>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            blits: Vec::new(),
        }
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.background = color;
        self.blits.clear();
    }

    fn blit(&mut self, sprite: &Sprite, dest: Rect) {
        self.blits.push(Blit {
            texture: sprite.texture,
            dest,
        });
    }
}
