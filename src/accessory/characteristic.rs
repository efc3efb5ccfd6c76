// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Service and characteristic identifiers.

use std::fmt;

/// Accessory service type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Security system service.
    SecuritySystem,
}

impl Service {
    /// Returns the framework UUID of this service type.
    #[must_use]
    pub const fn uuid(self) -> &'static str {
        match self {
            Self::SecuritySystem => "0000007E-0000-1000-8000-0026BB765291",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecuritySystem => f.write_str("SecuritySystem"),
        }
    }
}

/// Characteristic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    /// Security system current state, read-only.
    SecuritySystemCurrentState,
    /// Security system target state, read/write.
    SecuritySystemTargetState,
}

impl Characteristic {
    /// Returns the framework UUID of this characteristic type.
    #[must_use]
    pub const fn uuid(self) -> &'static str {
        match self {
            Self::SecuritySystemCurrentState => "00000066-0000-1000-8000-0026BB765291",
            Self::SecuritySystemTargetState => "00000067-0000-1000-8000-0026BB765291",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecuritySystemCurrentState => f.write_str("SecuritySystemCurrentState"),
            Self::SecuritySystemTargetState => f.write_str("SecuritySystemTargetState"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuids_are_distinct() {
        assert_ne!(
            Characteristic::SecuritySystemCurrentState.uuid(),
            Characteristic::SecuritySystemTargetState.uuid()
        );
        assert!(Service::SecuritySystem.uuid().starts_with("0000007E"));
    }
}
