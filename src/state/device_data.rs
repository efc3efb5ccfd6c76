// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alarm device snapshot.

use serde::{Deserialize, Serialize};

use crate::types::{AlarmState, ArmingMode};

/// Alarm activity attached to a snapshot while the alarm sounds or counts down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmInfo {
    /// The activity tag.
    pub state: AlarmState,
    /// Zones that caused the activity, when the vendor reports them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faulted_devices: Vec<String>,
}

impl AlarmInfo {
    /// Creates alarm info with the given tag and no faulted devices.
    #[must_use]
    pub fn new(state: AlarmState) -> Self {
        Self {
            state,
            faulted_devices: Vec::new(),
        }
    }
}

/// One state snapshot pushed by the vendor for an alarm base station.
///
/// Snapshots are immutable; a new one is delivered every time the vendor
/// reports a change.
///
/// # Examples
///
/// ```
/// use alarm_panel_hap::state::AlarmDeviceData;
/// use alarm_panel_hap::types::{AlarmState, ArmingMode};
///
/// let data: AlarmDeviceData = serde_json::from_str(
///     r#"{"mode":"all","alarmInfo":{"state":"entry-delay"},"batteryLevel":100}"#,
/// )
/// .unwrap();
///
/// assert_eq!(data.mode, ArmingMode::Away);
/// assert_eq!(data.alarm_state(), Some(&AlarmState::EntryDelay));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmDeviceData {
    /// Arming mode.
    pub mode: ArmingMode,
    /// Alarm activity, absent while the alarm is quiet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alarm_info: Option<AlarmInfo>,
}

impl AlarmDeviceData {
    /// Creates a snapshot without alarm activity.
    #[must_use]
    pub fn new(mode: ArmingMode) -> Self {
        Self {
            mode,
            alarm_info: None,
        }
    }

    /// Attaches alarm activity with the given tag.
    #[must_use]
    pub fn with_alarm(mut self, state: AlarmState) -> Self {
        self.alarm_info = Some(AlarmInfo::new(state));
        self
    }

    /// Returns the alarm activity tag, if any.
    #[must_use]
    pub fn alarm_state(&self) -> Option<&AlarmState> {
        self.alarm_info.as_ref().map(|info| &info.state)
    }
}

impl Default for AlarmDeviceData {
    fn default() -> Self {
        Self::new(ArmingMode::Disarmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snapshot_without_alarm() {
        let data: AlarmDeviceData = serde_json::from_str(r#"{"mode":"some"}"#).unwrap();
        assert_eq!(data.mode, ArmingMode::Home);
        assert!(data.alarm_info.is_none());
    }

    #[test]
    fn parses_unknown_mode_and_tag() {
        let data: AlarmDeviceData =
            serde_json::from_str(r#"{"mode":"weird","alarmInfo":{"state":"tamper"}}"#).unwrap();
        assert_eq!(data.mode, ArmingMode::Unknown("weird".to_string()));
        assert_eq!(
            data.alarm_state(),
            Some(&AlarmState::Other("tamper".to_string()))
        );
    }

    #[test]
    fn parses_faulted_devices() {
        let data: AlarmDeviceData = serde_json::from_str(
            r#"{"mode":"all","alarmInfo":{"state":"burglar-alarm","faultedDevices":["zid-1"]}}"#,
        )
        .unwrap();
        let info = data.alarm_info.unwrap();
        assert_eq!(info.state, AlarmState::BurglarAlarm);
        assert_eq!(info.faulted_devices, vec!["zid-1".to_string()]);
    }

    #[test]
    fn builder_attaches_alarm() {
        let data = AlarmDeviceData::new(ArmingMode::Away).with_alarm(AlarmState::Panic);
        assert_eq!(data.alarm_state(), Some(&AlarmState::Panic));
    }
}
