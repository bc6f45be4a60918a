//! Immediate-mode 2D canvas used by widget renderers.
//!
//! Renderers draw through the [`Canvas`] trait. [`DrawScope`] is the
//! recording implementation: it keeps the issued commands so a host can
//! replay them onto a real surface, and tests can inspect them.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use ripple_core::{Color, Rect, Size, Vec2};

pub trait Canvas {
    fn size(&self) -> Size;
    /// Erases everything drawn so far.
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, radius: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// A drawing surface whose context may not be available yet, e.g. before
/// the backing element has been laid out.
pub trait Surface {
    /// Runs `draw` against the surface's context. Returns `false`, without
    /// calling `draw`, when no context could be acquired.
    fn with_context(&mut self, draw: &mut dyn FnMut(&mut dyn Canvas)) -> bool;
    fn resize(&mut self, size: Size);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Ellipse {
        center: Vec2,
        rx: f32,
        ry: f32,
        color: Color,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DrawScope {
    pub commands: Vec<DrawCommand>,
    pub size: Size,
}

impl DrawScope {
    pub fn new(size: Size) -> Self {
        Self {
            commands: Vec::new(),
            size,
        }
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color,
            radius: radius.max(0.0),
        });
    }
    pub fn draw_ellipse(&mut self, center: Vec2, rx: f32, ry: f32, color: Color) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            rx: rx.max(0.0),
            ry: ry.max(0.0),
            color,
        });
    }
    pub fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_ellipse(center, radius, radius, color);
    }

    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, color, .. } => Some((*rect, *color)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Ellipse {
                center, rx, color, ..
            } => Some((*center, *rx, *color)),
            _ => None,
        })
    }
}

impl Canvas for DrawScope {
    fn size(&self) -> Size {
        self.size
    }
    fn clear(&mut self) {
        self.commands.clear();
    }
    fn fill_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.draw_rect(rect, color, radius);
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_circle(center, radius, color);
    }
}

/// Shared handle to a recording surface. Clones observe the same commands,
/// so the host (or a test) can keep one while the widget draws into another.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    scope: Rc<RefCell<DrawScope>>,
    failures_left: Rc<Cell<u32>>,
    acquisitions: Rc<Cell<u32>>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            scope: Rc::new(RefCell::new(DrawScope::new(size))),
            ..Self::default()
        }
    }

    /// Makes the next `n` acquisitions fail, as if the context were lost.
    pub fn fail_next(&self, n: u32) {
        self.failures_left.set(n);
    }

    /// Number of acquisition attempts, successful or not.
    pub fn acquisitions(&self) -> u32 {
        self.acquisitions.get()
    }

    pub fn scope(&self) -> Ref<'_, DrawScope> {
        self.scope.borrow()
    }

    pub fn commands(&self) -> Vec<DrawCommand> {
        self.scope.borrow().commands.clone()
    }
}

impl Surface for RecordingSurface {
    fn with_context(&mut self, draw: &mut dyn FnMut(&mut dyn Canvas)) -> bool {
        self.acquisitions.set(self.acquisitions.get() + 1);
        let failures = self.failures_left.get();
        if failures > 0 {
            self.failures_left.set(failures - 1);
            log::debug!("canvas context unavailable ({} more failures queued)", failures - 1);
            return false;
        }
        let mut scope = self.scope.borrow_mut();
        draw(&mut *scope);
        true
    }

    fn resize(&mut self, size: Size) {
        self.scope.borrow_mut().size = size;
    }
}
