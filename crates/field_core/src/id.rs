//! Opaque identifier for masked fields.
//!
//! A plain `u64` keeps the core independent of whatever id scheme the host
//! framework uses for its widgets. Hosts convert at the call boundary.

/// Identifier for one field within a [`MaskedValueStore`](crate::MaskedValueStore).
///
/// The value has no meaning inside this crate; it is only a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u64);

impl FieldId {
    /// Create a `FieldId` from a raw value handed out by the host.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for FieldId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<FieldId> for u64 {
    #[inline]
    fn from(id: FieldId) -> Self {
        id.as_raw()
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_converts_from_host_integers() {
        assert_eq!(FieldId::from(7u32), FieldId::from_raw(7));
        assert_eq!(u64::from(FieldId::from(9u64)), 9);
    }

    #[test]
    fn field_id_display_is_stable() {
        assert_eq!(FieldId::from_raw(3).to_string(), "field#3");
    }
}
