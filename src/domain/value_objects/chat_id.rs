use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Largest identifier accepted on the wire.
///
/// Matches the JavaScript `Number.MAX_SAFE_INTEGER` bound (2^53 - 1) so IDs
/// survive round-trips through JSON clients without losing precision.
pub const MAX_SAFE_ID: i64 = (1 << 53) - 1;

/// Unique identifier for a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(i64);

impl ChatId {
    /// Wrap a raw value, enforcing the positive-and-bounded invariant.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidChatId(format!(
                "must be positive, got {}",
                value
            )));
        }
        if value >= MAX_SAFE_ID {
            return Err(DomainError::InvalidChatId(format!("too large: {}", value)));
        }
        Ok(Self(value))
    }

    /// Wrap a store-generated sequence value without bounds checks.
    ///
    /// Only the store's monotonic counter may call this; wire input goes
    /// through [`ChatId::new`] or [`FromStr`].
    pub(crate) fn from_sequence(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ChatId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| {
            DomainError::InvalidChatId(format!("must be a positive integer, got '{}'", s))
        })?;
        Self::new(value)
    }
}
