// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor alarm commands.
//!
//! | Command | Target | Vendor call |
//! |---------|--------|-------------|
//! | [`AlarmCommand::ArmAway`] | [`ArmTarget::Away`] | [`AlarmDevice::arm_away`] |
//! | [`AlarmCommand::ArmHome`] | [`ArmTarget::Stay`] | [`AlarmDevice::arm_home`] |
//! | [`AlarmCommand::Disarm`] | [`ArmTarget::Disarm`] | [`AlarmDevice::disarm`] |
//!
//! # Examples
//!
//! ```
//! use alarm_panel_hap::command::AlarmCommand;
//! use alarm_panel_hap::types::ArmTarget;
//!
//! let cmd = AlarmCommand::for_target(ArmTarget::Stay);
//! assert_eq!(cmd, AlarmCommand::ArmHome);
//! assert_eq!(cmd.action(), "Arming (Home)");
//! ```

use std::fmt;

use crate::device::AlarmDevice;
use crate::error::CommandError;
use crate::types::ArmTarget;

/// One of the three commands an alarm base station accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlarmCommand {
    /// Arm every sensor.
    ArmAway,
    /// Arm the perimeter only.
    ArmHome,
    /// Disarm.
    Disarm,
}

impl AlarmCommand {
    /// Returns the command that drives the device towards `target`.
    #[must_use]
    pub const fn for_target(target: ArmTarget) -> Self {
        match target {
            ArmTarget::Away => Self::ArmAway,
            ArmTarget::Disarm => Self::Disarm,
            ArmTarget::Stay => Self::ArmHome,
        }
    }

    /// Returns the human-readable action used in logs.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::ArmAway => "Arming (Away)",
            Self::ArmHome => "Arming (Home)",
            Self::Disarm => "Disarming",
        }
    }

    /// Sends this command through the device's command sink.
    ///
    /// # Errors
    ///
    /// Returns whatever the vendor client reports.
    pub async fn send<D: AlarmDevice>(self, device: &D) -> Result<(), CommandError> {
        match self {
            Self::ArmAway => device.arm_away().await,
            Self::ArmHome => device.arm_home().await,
            Self::Disarm => device.disarm().await,
        }
    }
}

impl fmt::Display for AlarmCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ArmAway => "arm-away",
            Self::ArmHome => "arm-home",
            Self::Disarm => "disarm",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_map_to_commands() {
        assert_eq!(AlarmCommand::for_target(ArmTarget::Away), AlarmCommand::ArmAway);
        assert_eq!(AlarmCommand::for_target(ArmTarget::Stay), AlarmCommand::ArmHome);
        assert_eq!(AlarmCommand::for_target(ArmTarget::Disarm), AlarmCommand::Disarm);
    }

    #[test]
    fn display_uses_vendor_names() {
        assert_eq!(AlarmCommand::ArmAway.to_string(), "arm-away");
        assert_eq!(AlarmCommand::ArmHome.to_string(), "arm-home");
        assert_eq!(AlarmCommand::Disarm.to_string(), "disarm");
    }

    #[test]
    fn actions() {
        assert_eq!(AlarmCommand::ArmAway.action(), "Arming (Away)");
        assert_eq!(AlarmCommand::Disarm.action(), "Disarming");
    }
}
