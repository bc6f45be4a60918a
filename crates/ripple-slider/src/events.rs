use ripple_core::{KeyEvent, PointerEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderEventKind {
    /// A pointer interaction began.
    Start,
    /// The value changed while interacting.
    Input,
    /// The value was committed.
    Change,
    /// A pointer interaction ended.
    End,
    Focus,
    Blur,
}

/// The host event that caused a slider event, if any.
#[derive(Clone, Debug, PartialEq)]
pub enum OriginalEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderEvent {
    pub kind: SliderEventKind,
    pub value: f32,
    pub second_value: Option<f32>,
    pub original_event: Option<OriginalEvent>,
    default_prevented: bool,
}

impl SliderEvent {
    pub fn new(
        kind: SliderEventKind,
        value: f32,
        second_value: Option<f32>,
        original_event: Option<OriginalEvent>,
    ) -> Self {
        Self {
            kind,
            value,
            second_value,
            original_event,
            default_prevented: false,
        }
    }

    /// Only meaningful for `Start`: cancels the interaction that is about
    /// to begin.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
