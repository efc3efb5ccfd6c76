// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel configuration.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::AlarmState;

const BURGLAR_ONLY: &[AlarmState] = &[AlarmState::BurglarAlarm];
const ENTRY_DELAY_AND_BURGLAR: &[AlarmState] = &[AlarmState::EntryDelay, AlarmState::BurglarAlarm];

/// Configuration for a security panel accessory.
///
/// Deserializes from the platform's JSON configuration. Keys that belong
/// to other accessories of the platform are ignored.
///
/// # Examples
///
/// ```
/// use alarm_panel_hap::PanelConfig;
/// use alarm_panel_hap::types::AlarmState;
///
/// let config = PanelConfig::from_json(r#"{"alarmOnEntryDelay": true, "hideLights": true}"#)?;
/// assert!(config.alarm_on_entry_delay);
/// assert!(config.alarm_states().contains(&AlarmState::EntryDelay));
///
/// let config = PanelConfig::default().with_alarm_on_entry_delay(false);
/// assert_eq!(config.alarm_states(), &[AlarmState::BurglarAlarm]);
/// # Ok::<(), alarm_panel_hap::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Whether an entry delay countdown reports as a triggered alarm.
    #[serde(default)]
    pub alarm_on_entry_delay: bool,
}

impl PanelConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the input is not valid JSON or a
    /// known key has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        serde_json::from_str(json)
            .map_err(ConfigError::from)
            .map_err(Into::into)
    }

    /// Sets whether an entry delay reports as a triggered alarm.
    #[must_use]
    pub fn with_alarm_on_entry_delay(mut self, enabled: bool) -> Self {
        self.alarm_on_entry_delay = enabled;
        self
    }

    /// Returns the alarm activity tags that count as a triggered alarm.
    #[must_use]
    pub fn alarm_states(&self) -> &'static [AlarmState] {
        if self.alarm_on_entry_delay {
            ENTRY_DELAY_AND_BURGLAR
        } else {
            BURGLAR_ONLY
        }
    }

    /// Returns `true` if the tag counts as a triggered alarm.
    #[must_use]
    pub fn is_alarm_state(&self, state: &AlarmState) -> bool {
        self.alarm_states().contains(state)
    }
}
