//! Pass-through field for every declared type other than `password`.

use crate::event::{DispatchOutcome, FieldEvent, FieldEventKind, NativeEvent};
use crate::frame::FrameQueue;
use crate::props::{FieldProps, RenderedAttributes};
use field_core::{FieldId, SelectionRange, SelectionSurface, char_len};

#[derive(Debug)]
pub struct PlainField {
    id: FieldId,
    props: FieldProps,
    value: String,
    last_external: Option<String>,
}

impl PlainField {
    pub fn mount<Su: SelectionSurface + ?Sized>(
        id: FieldId,
        props: FieldProps,
        surface: &mut Su,
    ) -> Self {
        let value = props.initial_value();
        surface.set_text(&value);
        log::debug!(target: "field.form", "{id}: mounted plain field");
        Self {
            id,
            last_external: props.value.clone(),
            props,
            value,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn update_props<Su: SelectionSurface + ?Sized>(
        &mut self,
        props: FieldProps,
        surface: &mut Su,
        frames: &mut FrameQueue,
    ) -> bool {
        self.props = props;
        let Some(external) = self.props.value.clone() else {
            self.last_external = None;
            return false;
        };
        if self.last_external.as_deref() == Some(external.as_str()) {
            return false;
        }
        self.last_external = Some(external.clone());
        if self.value == external {
            return false;
        }

        surface.set_text(&external);
        frames.schedule(self.id, SelectionRange::collapsed(char_len(&external)));
        self.value = external;
        true
    }

    /// The surface holds the real text, so its value is forwarded as-is.
    pub fn handle(&mut self, event: &NativeEvent) -> DispatchOutcome {
        if self.props.disabled {
            return DispatchOutcome::Ignored;
        }
        let NativeEvent::Input {
            input_type,
            data,
            value,
        } = event
        else {
            return DispatchOutcome::Ignored;
        };

        self.value = value.clone();
        let change = FieldEvent::new(
            FieldEventKind::Change,
            self.id,
            self.props.name.as_deref(),
            value,
            input_type.as_deref(),
            data.as_deref(),
        );
        let input = FieldEvent {
            kind: FieldEventKind::Input,
            ..change.clone()
        };
        self.props.notify(&change, &input);
        DispatchOutcome::Edited
    }

    pub fn attributes(&self) -> RenderedAttributes {
        RenderedAttributes {
            input_type: self
                .props
                .input_type
                .clone()
                .unwrap_or_else(|| "text".to_string()),
            value: self.value.clone(),
            autocomplete: self.props.autocomplete.clone(),
            name: self.props.name.clone(),
            placeholder: self.props.placeholder.clone(),
            disabled: self.props.disabled,
            required: self.props.required,
        }
    }
}
