use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    fn primary(kind: PointerKind, event: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            id: PointerId(0),
            kind,
            event,
            position: Vec2 { x, y },
            modifiers: Modifiers::default(),
        }
    }

    pub fn mouse_down(x: f32, y: f32) -> Self {
        Self::primary(
            PointerKind::Mouse,
            PointerEventKind::Down(PointerButton::Primary),
            x,
            y,
        )
    }

    pub fn mouse_move(x: f32, y: f32) -> Self {
        Self::primary(PointerKind::Mouse, PointerEventKind::Move, x, y)
    }

    pub fn mouse_up(x: f32, y: f32) -> Self {
        Self::primary(
            PointerKind::Mouse,
            PointerEventKind::Up(PointerButton::Primary),
            x,
            y,
        )
    }

    pub fn touch_start(x: f32, y: f32) -> Self {
        Self::primary(
            PointerKind::Touch,
            PointerEventKind::Down(PointerButton::Primary),
            x,
            y,
        )
    }

    pub fn touch_move(x: f32, y: f32) -> Self {
        Self::primary(PointerKind::Touch, PointerEventKind::Move, x, y)
    }

    pub fn touch_end(x: f32, y: f32) -> Self {
        Self::primary(
            PointerKind::Touch,
            PointerEventKind::Up(PointerButton::Primary),
            x,
            y,
        )
    }

    pub fn is_primary_down(&self) -> bool {
        matches!(self.event, PointerEventKind::Down(PointerButton::Primary))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win key on Windows
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
            is_repeat: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}
