//! Native events coming in from the surface and synthetic events going out
//! to the host's callbacks.

use field_core::FieldId;

/// An event reported by the host's text surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NativeEvent {
    Focus,
    Blur,
    KeyDown { key: String },
    /// The surface's selection changed (`select` / `selectionchange`).
    Select,
    /// A pointer gesture finished, possibly moving the caret.
    PointerUp,
    BeforeInput {
        input_type: Option<String>,
        data: Option<String>,
    },
    /// The surface's content changed. `value` is whatever the surface now
    /// displays, which for a masked field is meaningless.
    Input {
        input_type: Option<String>,
        data: Option<String>,
        value: String,
    },
}

impl NativeEvent {
    /// Events after which the surface's selection reflects where the next
    /// edit will land.
    pub fn captures_selection(&self) -> bool {
        matches!(
            self,
            NativeEvent::Focus
                | NativeEvent::KeyDown { .. }
                | NativeEvent::Select
                | NativeEvent::PointerUp
                | NativeEvent::BeforeInput { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            NativeEvent::Focus => "focus",
            NativeEvent::Blur => "blur",
            NativeEvent::KeyDown { .. } => "keydown",
            NativeEvent::Select => "select",
            NativeEvent::PointerUp => "pointerup",
            NativeEvent::BeforeInput { .. } => "beforeinput",
            NativeEvent::Input { .. } => "input",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEventKind {
    Change,
    Input,
}

/// The element an event is reported against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventTarget {
    pub name: Option<String>,
    /// Always the true value, never the mask.
    pub value: String,
}

/// Synthetic event forwarded to `on_change` / `on_input`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEvent {
    pub kind: FieldEventKind,
    pub field: FieldId,
    pub input_type: Option<String>,
    pub data: Option<String>,
    pub target: EventTarget,
    pub current_target: EventTarget,
}

impl FieldEvent {
    pub fn new(
        kind: FieldEventKind,
        field: FieldId,
        name: Option<&str>,
        value: &str,
        input_type: Option<&str>,
        data: Option<&str>,
    ) -> Self {
        let target = EventTarget {
            name: name.map(str::to_string),
            value: value.to_string(),
        };
        Self {
            kind,
            field,
            input_type: input_type.map(str::to_string),
            data: data.map(str::to_string),
            current_target: target.clone(),
            target,
        }
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.target.value
    }
}

/// What a field did with a native event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Nothing to do for this event (or the field is disabled).
    Ignored,
    /// The pre-edit selection was cached.
    SelectionCaptured,
    /// The value was edited and the host notified.
    Edited,
}
