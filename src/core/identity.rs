//! Identity atoms.
//!
//! TodoId: record identifier issued by the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CoreError, InvalidId};

/// Todo record identifier - positive integer.
///
/// Ids are issued by the store, strictly increasing, and never reused after
/// deletion. Only the store mints new ones.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Validate an externally supplied raw id.
    pub fn new(raw: u64) -> Result<Self, CoreError> {
        if raw == 0 {
            Err(InvalidId {
                raw: raw.to_string(),
                reason: "must be positive".into(),
            }
            .into())
        } else {
            Ok(Self(raw))
        }
    }

    /// Mint an id from the store's counter. The counter starts at 1 and only
    /// ever increments, so zero never reaches here.
    pub(crate) fn issue(counter: u64) -> Self {
        debug_assert!(counter > 0);
        Self(counter)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TodoId({})", self.0)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u64 = s.parse().map_err(|_| InvalidId {
            raw: s.to_string(),
            reason: "not a positive integer".into(),
        })?;
        Self::new(raw)
    }
}
