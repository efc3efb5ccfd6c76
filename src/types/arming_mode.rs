// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor arming mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Arming mode reported by the vendor API.
///
/// The vendor reports `"all"` when every sensor is armed, `"some"` when the
/// perimeter only is armed, and `"none"` when the system is disarmed.
/// Anything else is kept verbatim in [`ArmingMode::Unknown`].
///
/// # Examples
///
/// ```
/// use alarm_panel_hap::types::ArmingMode;
///
/// let mode: ArmingMode = "some".parse().unwrap();
/// assert_eq!(mode, ArmingMode::Home);
/// assert_eq!(mode.as_str(), "some");
///
/// let odd: ArmingMode = "maintenance".parse().unwrap();
/// assert_eq!(odd, ArmingMode::Unknown("maintenance".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArmingMode {
    /// All sensors armed (`"all"`).
    Away,
    /// Partially armed (`"some"`).
    Home,
    /// Disarmed (`"none"`).
    Disarmed,
    /// A mode this crate does not recognize.
    Unknown(String),
}

impl ArmingMode {
    /// Returns the vendor string for this mode.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Away => "all",
            Self::Home => "some",
            Self::Disarmed => "none",
            Self::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for ArmingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArmingMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for ArmingMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "all" => Self::Away,
            "some" => Self::Home,
            "none" => Self::Disarmed,
            _ => Self::Unknown(value),
        }
    }
}

impl From<ArmingMode> for String {
    fn from(mode: ArmingMode) -> Self {
        match mode {
            ArmingMode::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
