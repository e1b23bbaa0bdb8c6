//! Host layer for masked password fields.
//!
//! [`field_core`] owns the true values and the edit algebra; this crate owns
//! everything around it: props and callbacks, native event routing, the
//! per-frame caret restoration queue, a headless [`TextSurface`], host
//! configuration and scripted sessions used by the replay tool and the
//! fixture tests.

pub mod config;
pub mod event;
pub mod field_type;
pub mod form;
pub mod frame;
pub mod password;
pub mod plain;
pub mod props;
pub mod session;
pub mod surface;

pub use config::{ConfigError, DEFAULT_AUTOCOMPLETE, FieldConfig};
pub use event::{DispatchOutcome, EventTarget, FieldEvent, FieldEventKind, NativeEvent};
pub use field_type::{FieldType, field_type};
pub use form::{Form, FormError, FormField};
pub use frame::FrameQueue;
pub use password::PasswordField;
pub use plain::PlainField;
pub use props::{FieldCallback, FieldProps, RenderedAttributes};
pub use session::{FieldSpec, SessionError, SessionScript, SessionTrace, Step, run_session};
pub use surface::TextSurface;
