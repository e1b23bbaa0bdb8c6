//! A form owning every mounted field, its surface and the shared store.
//!
//! Events are routed by [`FieldId`]; the declared `type` of each field picks a
//! masked or a plain implementation once, at mount.

use crate::config::FieldConfig;
use crate::event::{DispatchOutcome, NativeEvent};
use crate::field_type::{FieldType, field_type};
use crate::frame::FrameQueue;
use crate::password::PasswordField;
use crate::plain::PlainField;
use crate::props::{FieldProps, RenderedAttributes};
use field_core::{FieldId, MaskedValueStore, SelectionSurface};
use std::collections::BTreeMap;

#[derive(Debug)]
pub enum FormError {
    DuplicateField(FieldId),
    UnknownField(FieldId),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::DuplicateField(id) => write!(f, "{id} is already mounted"),
            FormError::UnknownField(id) => write!(f, "{id} is not mounted"),
        }
    }
}

impl std::error::Error for FormError {}

#[derive(Debug)]
pub enum FormField {
    Password(PasswordField),
    Plain(PlainField),
}

impl FormField {
    pub fn field_type(&self) -> FieldType {
        match self {
            FormField::Password(_) => FieldType::Password,
            FormField::Plain(_) => FieldType::Plain,
        }
    }
}

#[derive(Debug)]
struct Mounted<S> {
    field: FormField,
    surface: S,
}

#[derive(Debug)]
pub struct Form<S> {
    config: FieldConfig,
    store: MaskedValueStore,
    frames: FrameQueue,
    fields: BTreeMap<FieldId, Mounted<S>>,
}

impl<S: SelectionSurface> Form<S> {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            store: MaskedValueStore::with_options(config.store_options()),
            config,
            frames: FrameQueue::new(),
            fields: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn store(&self) -> &MaskedValueStore {
        &self.store
    }

    pub fn mount(&mut self, id: FieldId, props: FieldProps, mut surface: S) -> Result<(), FormError> {
        if self.fields.contains_key(&id) {
            return Err(FormError::DuplicateField(id));
        }

        let field = match field_type(props.input_type.as_deref()) {
            FieldType::Password => FormField::Password(PasswordField::mount(
                id,
                props,
                &self.config.default_autocomplete,
                &mut self.store,
                &mut surface,
            )),
            FieldType::Plain => FormField::Plain(PlainField::mount(id, props, &mut surface)),
        };
        self.fields.insert(id, Mounted { field, surface });
        Ok(())
    }

    /// Remove a field, dropping its stored value and any pending restoration.
    pub fn unmount(&mut self, id: FieldId) -> Option<S> {
        let mounted = self.fields.remove(&id)?;
        self.store.remove(id);
        self.frames.cancel(id);
        log::debug!(target: "field.form", "{id}: unmounted");
        Some(mounted.surface)
    }

    pub fn dispatch(&mut self, id: FieldId, event: &NativeEvent) -> Result<DispatchOutcome, FormError> {
        let Some(mounted) = self.fields.get_mut(&id) else {
            log::warn!(target: "field.form", "{id}: {} for unmounted field", event.name());
            return Err(FormError::UnknownField(id));
        };

        let outcome = match &mut mounted.field {
            FormField::Password(field) => {
                field.handle(event, &mut self.store, &mut mounted.surface, &mut self.frames)
            }
            FormField::Plain(field) => field.handle(event),
        };
        Ok(outcome)
    }

    /// Push re-rendered props. Returns `true` if a controlled value reset the field.
    pub fn update_props(&mut self, id: FieldId, props: FieldProps) -> Result<bool, FormError> {
        let mounted = self.fields.get_mut(&id).ok_or(FormError::UnknownField(id))?;
        let reset = match &mut mounted.field {
            FormField::Password(field) => {
                field.update_props(props, &mut self.store, &mut mounted.surface, &mut self.frames)
            }
            FormField::Plain(field) => {
                field.update_props(props, &mut mounted.surface, &mut self.frames)
            }
        };
        Ok(reset)
    }

    /// Frame tick: apply every pending caret restoration. Returns how many ran.
    pub fn run_frame(&mut self) -> usize {
        let pending = self.frames.take();
        let mut applied = 0;
        for (id, range) in pending {
            // Unmounted since scheduling.
            let Some(mounted) = self.fields.get_mut(&id) else {
                continue;
            };
            mounted.surface.set_selection(range);
            applied += 1;
        }
        if applied > 0 {
            log::trace!(target: "field.frame", "restored {applied} caret(s)");
        }
        applied
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// The true value of a field, whichever kind it is.
    pub fn value(&self, id: FieldId) -> Option<&str> {
        match &self.fields.get(&id)?.field {
            FormField::Password(_) => self.store.get(id),
            FormField::Plain(field) => Some(field.value()),
        }
    }

    pub fn field_type(&self, id: FieldId) -> Option<FieldType> {
        self.fields.get(&id).map(|m| m.field.field_type())
    }

    pub fn attributes(&self, id: FieldId) -> Option<RenderedAttributes> {
        match &self.fields.get(&id)?.field {
            FormField::Password(field) => Some(field.attributes(&self.store)),
            FormField::Plain(field) => Some(field.attributes()),
        }
    }

    pub fn surface(&self, id: FieldId) -> Option<&S> {
        self.fields.get(&id).map(|m| &m.surface)
    }

    pub fn surface_mut(&mut self, id: FieldId) -> Option<&mut S> {
        self.fields.get_mut(&id).map(|m| &mut m.surface)
    }

    pub fn field_ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.keys().copied()
    }
}
