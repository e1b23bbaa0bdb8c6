/// What kind of field a declared `type` attribute mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// `type="password"`: masked by the controller.
    Password,
    /// Everything else: rendered as a plain pass-through field.
    Plain,
}

pub fn field_type(declared: Option<&str>) -> FieldType {
    match declared.map(str::trim).filter(|s| !s.is_empty()) {
        Some(t) if t.eq_ignore_ascii_case("password") => FieldType::Password,
        _ => FieldType::Plain, // missing type defaults to text
    }
}
