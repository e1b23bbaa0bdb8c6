//! Field configuration as handed down by the host form, plus the attributes a
//! field renders back onto its surface.

use crate::event::FieldEvent;
use std::rc::Rc;

pub type FieldCallback = Rc<dyn Fn(&FieldEvent)>;

/// Props of a field, mirroring what a plain text input accepts.
///
/// Hosts re-render with fresh props; callbacks are reference counted so props
/// stay cheap to clone.
#[derive(Clone, Default)]
pub struct FieldProps {
    /// Declared `type`; `password` selects the masked controller.
    pub input_type: Option<String>,
    /// Controlled value.
    pub value: Option<String>,
    /// Uncontrolled initial value.
    pub default_value: Option<String>,
    pub on_change: Option<FieldCallback>,
    pub on_input: Option<FieldCallback>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub autocomplete: Option<String>,
    pub disabled: bool,
    pub required: bool,
}

impl FieldProps {
    pub fn password() -> Self {
        Self::typed("password")
    }

    pub fn typed(input_type: &str) -> Self {
        Self {
            input_type: Some(input_type.to_string()),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_autocomplete(mut self, hint: impl Into<String>) -> Self {
        self.autocomplete = Some(hint.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn on_change(mut self, f: impl Fn(&FieldEvent) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn on_input(mut self, f: impl Fn(&FieldEvent) + 'static) -> Self {
        self.on_input = Some(Rc::new(f));
        self
    }

    /// Controlled value first, then the uncontrolled default, then empty.
    pub fn initial_value(&self) -> String {
        self.value
            .as_deref()
            .or(self.default_value.as_deref())
            .unwrap_or_default()
            .to_string()
    }

    /// Invoke `on_change` then `on_input`.
    pub(crate) fn notify(&self, change: &FieldEvent, input: &FieldEvent) {
        if let Some(cb) = &self.on_change {
            cb(change);
        }
        if let Some(cb) = &self.on_input {
            cb(input);
        }
    }
}

impl std::fmt::Debug for FieldProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Values are deliberately left out: they may be secrets.
        f.debug_struct("FieldProps")
            .field("input_type", &self.input_type)
            .field("controlled", &self.value.is_some())
            .field("name", &self.name)
            .field("autocomplete", &self.autocomplete)
            .field("disabled", &self.disabled)
            .field("required", &self.required)
            .field("on_change", &self.on_change.is_some())
            .field("on_input", &self.on_input.is_some())
            .finish()
    }
}

/// Attributes a field renders onto its surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedAttributes {
    /// The surface's own `type`. Always `text` for masked fields.
    pub input_type: String,
    /// What the surface displays.
    pub value: String,
    pub autocomplete: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub required: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controlled_value_wins_over_default() {
        let props = FieldProps::password()
            .with_default_value("dflt")
            .with_value("ctrl");
        assert_eq!(props.initial_value(), "ctrl");
    }

    #[test]
    fn missing_values_start_empty() {
        assert_eq!(FieldProps::password().initial_value(), "");
        assert_eq!(
            FieldProps::password()
                .with_default_value("dflt")
                .initial_value(),
            "dflt"
        );
    }

    #[test]
    fn debug_output_hides_values() {
        let props = FieldProps::password().with_value("hunter2");
        let dbg = format!("{props:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("controlled: true"));
    }
}
