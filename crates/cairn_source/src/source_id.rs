//! Opaque handle for source files registered in a [`SourceRegistry`](crate::SourceRegistry).

use serde::{Deserialize, Serialize};

/// Opaque handle for a source file in the [`SourceRegistry`](crate::SourceRegistry).
///
/// Each registered source gets a unique `SourceId`; re-registering a name
/// keeps its existing id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SourceId(u32);

impl SourceId {
    /// Creates a `SourceId` from a raw `u32` value.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw `u32` value of this `SourceId`.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_as_raw_roundtrip() {
        let id = SourceId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
    }

    #[test]
    fn serde_roundtrip() {
        let id = SourceId::from_raw(7);
        let json = serde_json::to_string(&id).unwrap();
        let back: SourceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
