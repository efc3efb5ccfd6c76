// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Security system characteristic values.
//!
//! The accessory framework exchanges these as raw `u8` values. This module
//! provides the typed counterparts and the normalization applied to target
//! state writes before they reach the vendor.

use std::fmt;

use crate::error::ValueError;

/// Value of the security system current state characteristic.
///
/// # Examples
///
/// ```
/// use alarm_panel_hap::types::CurrentState;
///
/// assert_eq!(CurrentState::Disarmed.as_u8(), 3);
/// assert_eq!(CurrentState::AlarmTriggered.to_string(), "alarm-triggered");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentState {
    /// Armed with occupants at home.
    StayArm,
    /// Armed while away.
    AwayArm,
    /// Armed for the night.
    NightArm,
    /// Not armed.
    Disarmed,
    /// The alarm is sounding.
    AlarmTriggered,
}

impl CurrentState {
    /// Returns the framework numeric value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::StayArm => 0,
            Self::AwayArm => 1,
            Self::NightArm => 2,
            Self::Disarmed => 3,
            Self::AlarmTriggered => 4,
        }
    }
}

impl fmt::Display for CurrentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StayArm => "stay-arm",
            Self::AwayArm => "away-arm",
            Self::NightArm => "night-arm",
            Self::Disarmed => "disarmed",
            Self::AlarmTriggered => "alarm-triggered",
        };
        f.write_str(name)
    }
}

/// Value of the security system target state characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetState {
    /// Arm with occupants at home.
    StayArm,
    /// Arm while away.
    AwayArm,
    /// Arm for the night.
    NightArm,
    /// Disarm.
    Disarm,
}

impl TargetState {
    /// Returns the framework numeric value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::StayArm => 0,
            Self::AwayArm => 1,
            Self::NightArm => 2,
            Self::Disarm => 3,
        }
    }

    /// Maps the requested state onto one the vendor can reach.
    ///
    /// The vendor has no night mode, so [`TargetState::NightArm`] becomes
    /// [`ArmTarget::Stay`].
    #[must_use]
    pub const fn normalize(self) -> ArmTarget {
        match self {
            Self::AwayArm => ArmTarget::Away,
            Self::Disarm => ArmTarget::Disarm,
            Self::StayArm | Self::NightArm => ArmTarget::Stay,
        }
    }
}

impl TryFrom<u8> for TargetState {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::StayArm),
            1 => Ok(Self::AwayArm),
            2 => Ok(Self::NightArm),
            3 => Ok(Self::Disarm),
            other => Err(ValueError::InvalidTargetState(other)),
        }
    }
}

/// A target the vendor commands can actually reach.
///
/// This is the only kind of value the panel keeps as its pending target.
///
/// # Examples
///
/// ```
/// use alarm_panel_hap::types::{ArmTarget, CurrentState, TargetState};
///
/// assert_eq!(TargetState::NightArm.normalize(), ArmTarget::Stay);
/// assert!(ArmTarget::Away.is_reached_by(CurrentState::AwayArm));
/// assert!(!ArmTarget::Disarm.is_reached_by(CurrentState::AlarmTriggered));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmTarget {
    /// Arm home (partial).
    Stay,
    /// Arm away (full).
    Away,
    /// Disarm.
    Disarm,
}

impl ArmTarget {
    /// Returns the current state that satisfies this target.
    #[must_use]
    pub const fn as_current_state(self) -> CurrentState {
        match self {
            Self::Stay => CurrentState::StayArm,
            Self::Away => CurrentState::AwayArm,
            Self::Disarm => CurrentState::Disarmed,
        }
    }

    /// Returns the framework target value for this target.
    #[must_use]
    pub const fn as_target_state(self) -> TargetState {
        match self {
            Self::Stay => TargetState::StayArm,
            Self::Away => TargetState::AwayArm,
            Self::Disarm => TargetState::Disarm,
        }
    }

    /// Returns `true` if the device being in `state` satisfies this target.
    #[must_use]
    pub fn is_reached_by(self, state: CurrentState) -> bool {
        self.as_current_state() == state
    }
}

impl fmt::Display for ArmTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stay => "stay",
            Self::Away => "away",
            Self::Disarm => "disarm",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_state_values() {
        assert_eq!(CurrentState::StayArm.as_u8(), 0);
        assert_eq!(CurrentState::AwayArm.as_u8(), 1);
        assert_eq!(CurrentState::NightArm.as_u8(), 2);
        assert_eq!(CurrentState::Disarmed.as_u8(), 3);
        assert_eq!(CurrentState::AlarmTriggered.as_u8(), 4);
    }

    #[test]
    fn target_state_rejects_out_of_range() {
        assert_eq!(
            TargetState::try_from(4_u8),
            Err(ValueError::InvalidTargetState(4))
        );
    }

    #[test]
    fn night_arm_normalizes_to_stay() {
        assert_eq!(TargetState::NightArm.normalize(), ArmTarget::Stay);
        assert_eq!(TargetState::StayArm.normalize(), ArmTarget::Stay);
        assert_eq!(TargetState::AwayArm.normalize(), ArmTarget::Away);
        assert_eq!(TargetState::Disarm.normalize(), ArmTarget::Disarm);
    }

    #[test]
    fn arm_target_maps_to_current_state() {
        assert_eq!(ArmTarget::Stay.as_current_state(), CurrentState::StayArm);
        assert_eq!(ArmTarget::Away.as_current_state(), CurrentState::AwayArm);
        assert_eq!(ArmTarget::Disarm.as_current_state(), CurrentState::Disarmed);
    }

    #[test]
    fn alarm_triggered_reaches_no_target() {
        assert!(!ArmTarget::Stay.is_reached_by(CurrentState::AlarmTriggered));
        assert!(!ArmTarget::Away.is_reached_by(CurrentState::AlarmTriggered));
        assert!(!ArmTarget::Disarm.is_reached_by(CurrentState::AlarmTriggered));
    }
}
