//! Scripted user sessions against a single headless field.
//!
//! A session mounts one field on a [`TextSurface`], replays user steps the
//! way a browser would report them (`keydown`, `beforeinput`, surface edit,
//! `input`, frame tick) and records one trace line per step.
//!
//! ```toml
//! [field]
//! type = "password"
//! default_value = "abc"
//!
//! [[step]]
//! op = "type"
//! text = "d"
//!
//! [[step]]
//! op = "expect"
//! value = "abcd"
//! masked = "****"
//! selection = [4, 4]
//! ```

use crate::config::{ConfigError, FieldConfig};
use crate::event::{FieldEvent, NativeEvent};
use crate::form::{Form, FormError};
use crate::props::FieldProps;
use crate::surface::TextSurface;
use field_core::{FieldId, SelectionRange, SelectionSurface};
use serde::Deserialize;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

const SESSION_FIELD: FieldId = FieldId::from_raw(1);

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionScript {
    #[serde(default)]
    pub config: FieldConfig,
    #[serde(default)]
    pub field: FieldSpec,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// Props of the session's field, minus the callbacks.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub autocomplete: Option<String>,
    pub disabled: bool,
    pub required: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Focus,
    Select {
        start: usize,
        end: usize,
    },
    /// One `insertText` per character, with a frame after each.
    Type {
        text: String,
    },
    Paste {
        text: String,
    },
    Backspace,
    Delete,
    Cut,
    /// A raw edit with an arbitrary tag. `frame = false` leaves the caret
    /// restoration pending.
    Native {
        input_type: Option<String>,
        data: Option<String>,
        #[serde(default = "default_true")]
        frame: bool,
    },
    /// The host re-renders with a new controlled value (absent: uncontrolled).
    SetValue {
        value: Option<String>,
    },
    Frame,
    Expect {
        value: Option<String>,
        masked: Option<String>,
        selection: Option<[usize; 2]>,
        events: Option<usize>,
    },
}

fn default_true() -> bool {
    true
}

#[derive(Debug)]
pub enum SessionError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Config(ConfigError),
    Form(FormError),
    Expectation { step: usize, message: String },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Io { path, source } => {
                write!(f, "failed to read session {}: {source}", path.display())
            }
            SessionError::Parse(err) => write!(f, "invalid session: {err}"),
            SessionError::Config(err) => write!(f, "{err}"),
            SessionError::Form(err) => write!(f, "{err}"),
            SessionError::Expectation { step, message } => {
                write!(f, "step {step}: expectation failed: {message}")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io { source, .. } => Some(source),
            SessionError::Parse(err) => Some(err),
            SessionError::Config(err) => Some(err),
            SessionError::Form(err) => Some(err),
            SessionError::Expectation { .. } => None,
        }
    }
}

impl From<toml::de::Error> for SessionError {
    fn from(err: toml::de::Error) -> Self {
        SessionError::Parse(err)
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        SessionError::Config(err)
    }
}

impl From<FormError> for SessionError {
    fn from(err: FormError) -> Self {
        SessionError::Form(err)
    }
}

impl SessionScript {
    pub fn from_toml_str(src: &str) -> Result<Self, SessionError> {
        let script: SessionScript = toml::from_str(src)?;
        script.config.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let src = fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    /// Use `config` unless the script carries its own `[config]` table.
    pub fn with_fallback_config(mut self, config: &FieldConfig) -> Self {
        if self.config == FieldConfig::default() {
            self.config = config.clone();
        }
        self
    }
}

impl FieldSpec {
    fn props(&self, value: Option<String>, sink: &Rc<RefCell<Vec<FieldEvent>>>) -> FieldProps {
        let on_change = Rc::clone(sink);
        let on_input = Rc::clone(sink);
        FieldProps {
            input_type: self.input_type.clone(),
            value,
            default_value: self.default_value.clone(),
            name: self.name.clone(),
            placeholder: self.placeholder.clone(),
            autocomplete: self.autocomplete.clone(),
            disabled: self.disabled,
            required: self.required,
            ..FieldProps::default()
        }
        .on_change(move |e| on_change.borrow_mut().push(e.clone()))
        .on_input(move |e| on_input.borrow_mut().push(e.clone()))
    }
}

/// Result of a replayed session.
#[derive(Clone, Debug, Default)]
pub struct SessionTrace {
    pub lines: Vec<String>,
    pub events: Vec<FieldEvent>,
}

pub fn run_session(script: &SessionScript) -> Result<SessionTrace, SessionError> {
    script.config.validate()?;

    let sink = Rc::new(RefCell::new(Vec::new()));
    let mut form: Form<TextSurface> = Form::new(script.config.clone());
    form.mount(
        SESSION_FIELD,
        script.field.props(script.field.value.clone(), &sink),
        TextSurface::new(),
    )?;

    let mut lines = vec![format!(
        "mount {} -> {}",
        script.field.input_type.as_deref().unwrap_or("text"),
        describe(&form)?
    )];

    for (idx, step) in script.steps.iter().enumerate() {
        let seen = sink.borrow().len();
        let label = match step {
            Step::Focus => {
                form.dispatch(SESSION_FIELD, &NativeEvent::Focus)?;
                "focus".to_string()
            }
            Step::Select { start, end } => {
                let range = SelectionRange::new(*start, *end);
                surface_mut(&mut form)?.select(range);
                form.dispatch(SESSION_FIELD, &NativeEvent::Select)?;
                format!("select {range}")
            }
            Step::Type { text } => {
                for ch in text.chars() {
                    let data = ch.to_string();
                    user_edit(&mut form, Some(&data), Some("insertText"), Some(&data), true)?;
                }
                format!("type {text:?}")
            }
            Step::Paste { text } => {
                user_edit(&mut form, None, Some("insertFromPaste"), Some(text), true)?;
                format!("paste {text:?}")
            }
            Step::Backspace => {
                user_edit(&mut form, Some("Backspace"), Some("deleteContentBackward"), None, true)?;
                "backspace".to_string()
            }
            Step::Delete => {
                user_edit(&mut form, Some("Delete"), Some("deleteContentForward"), None, true)?;
                "delete".to_string()
            }
            Step::Cut => {
                user_edit(&mut form, None, Some("deleteByCut"), None, true)?;
                "cut".to_string()
            }
            Step::Native {
                input_type,
                data,
                frame,
            } => {
                user_edit(&mut form, None, input_type.as_deref(), data.as_deref(), *frame)?;
                let tag = input_type.as_deref().unwrap_or("<none>");
                match data {
                    Some(data) => format!("native {tag} {data:?}"),
                    None => format!("native {tag}"),
                }
            }
            Step::SetValue { value } => {
                let props = script.field.props(value.clone(), &sink);
                let reset = form.update_props(SESSION_FIELD, props)?;
                match value {
                    Some(value) => format!("set_value {value:?} reset={reset}"),
                    None => format!("set_value <uncontrolled> reset={reset}"),
                }
            }
            Step::Frame => {
                let applied = form.run_frame();
                format!("frame applied={applied}")
            }
            Step::Expect {
                value,
                masked,
                selection,
                events,
            } => {
                check_expectation(&form, idx, value, masked, selection, events, sink.borrow().len())?;
                lines.push("expect ok".to_string());
                continue;
            }
        };

        let emitted = sink.borrow().len() - seen;
        log::debug!(target: "field.session", "step {idx}: {label}");
        lines.push(format!("{label} -> {} events={emitted}", describe(&form)?));
    }

    let events = sink.borrow().clone();
    Ok(SessionTrace { lines, events })
}

fn surface(form: &Form<TextSurface>) -> Result<&TextSurface, SessionError> {
    Ok(form
        .surface(SESSION_FIELD)
        .ok_or(FormError::UnknownField(SESSION_FIELD))?)
}

fn surface_mut(form: &mut Form<TextSurface>) -> Result<&mut TextSurface, SessionError> {
    Ok(form
        .surface_mut(SESSION_FIELD)
        .ok_or(FormError::UnknownField(SESSION_FIELD))?)
}

fn user_edit(
    form: &mut Form<TextSurface>,
    key: Option<&str>,
    input_type: Option<&str>,
    data: Option<&str>,
    frame: bool,
) -> Result<(), SessionError> {
    if let Some(key) = key {
        let keydown = NativeEvent::KeyDown {
            key: key.to_string(),
        };
        form.dispatch(SESSION_FIELD, &keydown)?;
    }
    let before = surface(form)?.before_input(input_type, data);
    form.dispatch(SESSION_FIELD, &before)?;
    let input = surface_mut(form)?.user_edit(input_type, data);
    form.dispatch(SESSION_FIELD, &input)?;
    if frame {
        form.run_frame();
    }
    Ok(())
}

fn describe(form: &Form<TextSurface>) -> Result<String, SessionError> {
    let surface = surface(form)?;
    Ok(format!(
        "value={:?} display={:?} sel={} pending={}",
        form.value(SESSION_FIELD).unwrap_or_default(),
        surface.text(),
        surface.selection(),
        form.pending_frames()
    ))
}

fn check_expectation(
    form: &Form<TextSurface>,
    step: usize,
    value: &Option<String>,
    masked: &Option<String>,
    selection: &Option<[usize; 2]>,
    events: &Option<usize>,
    seen_events: usize,
) -> Result<(), SessionError> {
    let fail = |message: String| Err(SessionError::Expectation { step, message });
    let surface = surface(form)?;

    if let Some(expected) = value {
        let actual = form.value(SESSION_FIELD).unwrap_or_default();
        if actual != expected.as_str() {
            return fail(format!("value {actual:?} != {expected:?}"));
        }
    }
    if let Some(expected) = masked
        && surface.text() != expected.as_str()
    {
        return fail(format!("display {:?} != {expected:?}", surface.text()));
    }
    if let Some([start, end]) = *selection {
        let expected = SelectionRange::new(start, end);
        if surface.selection() != expected {
            return fail(format!("selection {} != {expected}", surface.selection()));
        }
    }
    if let Some(expected) = *events
        && seen_events != expected
    {
        return fail(format!("{seen_events} events != {expected}"));
    }
    Ok(())
}
