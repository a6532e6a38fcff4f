//! Card instance identification.
//!
//! Every physical card in a game has a unique `InstanceId`, allocated when the
//! deck is materialized. Two cards with the same kind and value (two $1M notes,
//! three Pass Go cards) are still distinct instances, so removal and movement
//! always refer to exactly one card.
//!
//! ```
//! use monopoly_deal::core::InstanceId;
//!
//! let a = InstanceId::new(7);
//! let b = InstanceId::new(8);
//! assert_ne!(a, b);
//! assert_eq!(a.raw(), 7);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for one physical card in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
