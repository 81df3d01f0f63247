use std::fmt;

use uuid::Uuid;

/// Correlation id that follows one trade through its
/// evaluate -> settle -> record lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TradeId(Uuid);

impl TradeId {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TradeId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}
