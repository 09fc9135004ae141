// SPDX-License-Identifier: MPL-2.0
//! What happens when a new toast is requested while one is already showing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Handling of `show` calls that arrive while a toast is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// The new message immediately replaces the current one.
    #[default]
    Replace,
    /// The new message is discarded until the current toast has fully faded out.
    DropWhileActive,
}

impl Policy {
    /// Returns the other policy, used by the demo's toggle button.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Policy::Replace => Policy::DropWhileActive,
            Policy::DropWhileActive => Policy::Replace,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Replace => write!(f, "replace"),
            Policy::DropWhileActive => write!(f, "drop"),
        }
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "replace" => Ok(Policy::Replace),
            "drop" | "drop-while-active" => Ok(Policy::DropWhileActive),
            other => Err(format!("invalid policy: {other} (expected `replace` or `drop`)")),
        }
    }
}
