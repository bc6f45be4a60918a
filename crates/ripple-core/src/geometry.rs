#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Builds a rect from horizontal edges, keeping the width non-negative.
    pub fn from_x_span(left: f32, right: f32, y: f32, h: f32) -> Self {
        Self {
            x: left,
            y,
            w: (right - left).max(0.0),
            h,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn center(&self) -> Vec2 {
        Vec2 {
            x: self.x + self.w * 0.5,
            y: self.y + self.h * 0.5,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.w,
            height: self.h,
        }
    }

    /// Shrinks the rect horizontally by `pad` on both sides.
    pub fn inset_x(&self, pad: f32) -> Rect {
        let w = (self.w - pad * 2.0).max(0.0);
        Rect {
            x: self.x + pad,
            y: self.y,
            w,
            h: self.h,
        }
    }
}
