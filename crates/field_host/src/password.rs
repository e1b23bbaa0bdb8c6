//! The masked password field.
//!
//! Wires a [`FieldStore`] entry to a [`SelectionSurface`]: the surface only
//! ever receives the masked projection, while the host's callbacks only ever
//! see the true value.

use crate::event::{DispatchOutcome, FieldEvent, FieldEventKind, NativeEvent};
use crate::frame::FrameQueue;
use crate::props::{FieldProps, RenderedAttributes};
use field_core::{FieldId, FieldStore, InputKind, SelectionRange, SelectionSurface, char_len};

#[derive(Debug)]
pub struct PasswordField {
    id: FieldId,
    props: FieldProps,
    default_autocomplete: String,
}

impl PasswordField {
    /// Create the store entry and paint the initial mask.
    pub fn mount<St, Su>(
        id: FieldId,
        props: FieldProps,
        default_autocomplete: &str,
        store: &mut St,
        surface: &mut Su,
    ) -> Self
    where
        St: FieldStore + ?Sized,
        Su: SelectionSurface + ?Sized,
    {
        store.ensure_initial(id, props.initial_value());
        // Records the controlled value as seen; it already equals the initial value.
        store.sync_external(id, props.value.as_deref());
        surface.set_text(store.masked(id).unwrap_or_default());

        log::debug!(
            target: "field.form",
            "{id}: mounted password field (controlled: {})",
            props.value.is_some()
        );

        Self {
            id,
            props,
            default_autocomplete: default_autocomplete.to_string(),
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    /// Take new props from a host re-render.
    ///
    /// A controlled value that differs from the true value resets the field,
    /// repaints the mask and moves the caret to the end. Returns `true` on reset.
    pub fn update_props<St, Su>(
        &mut self,
        props: FieldProps,
        store: &mut St,
        surface: &mut Su,
        frames: &mut FrameQueue,
    ) -> bool
    where
        St: FieldStore + ?Sized,
        Su: SelectionSurface + ?Sized,
    {
        self.props = props;
        if !store.sync_external(self.id, self.props.value.as_deref()) {
            return false;
        }

        let masked = store.masked(self.id).unwrap_or_default();
        let end = SelectionRange::collapsed(char_len(masked));
        surface.set_text(masked);
        frames.schedule(self.id, end);
        true
    }

    /// React to one native event from the surface.
    pub fn handle<St, Su>(
        &mut self,
        event: &NativeEvent,
        store: &mut St,
        surface: &mut Su,
        frames: &mut FrameQueue,
    ) -> DispatchOutcome
    where
        St: FieldStore + ?Sized,
        Su: SelectionSurface + ?Sized,
    {
        if self.props.disabled {
            log::debug!(target: "field.edit", "{}: {} ignored, field disabled", self.id, event.name());
            return DispatchOutcome::Ignored;
        }

        if event.captures_selection() {
            store.capture_selection(self.id, surface.selection());
            return DispatchOutcome::SelectionCaptured;
        }

        let NativeEvent::Input {
            input_type, data, ..
        } = event
        else {
            return DispatchOutcome::Ignored;
        };

        let outcome = store.apply_input(
            self.id,
            InputKind::parse(input_type.as_deref()),
            data.as_deref(),
        );

        surface.set_text(store.masked(self.id).unwrap_or_default());
        frames.schedule(self.id, outcome.selection());

        let name = self.props.name.as_deref();
        let change = FieldEvent::new(
            FieldEventKind::Change,
            self.id,
            name,
            &outcome.value,
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

    /// Attributes for the surface. The surface is always `type="text"`:
    /// native password obscuring would fight the caret tracking.
    pub fn attributes<St: FieldStore + ?Sized>(&self, store: &St) -> RenderedAttributes {
        RenderedAttributes {
            input_type: "text".to_string(),
            value: store.masked(self.id).unwrap_or_default().to_string(),
            autocomplete: Some(
                self.props
                    .autocomplete
                    .clone()
                    .unwrap_or_else(|| self.default_autocomplete.clone()),
            ),
            name: self.props.name.clone(),
            placeholder: self.props.placeholder.clone(),
            disabled: self.props.disabled,
            required: self.props.required,
        }
    }
}
