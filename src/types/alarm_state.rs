// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alarm activity tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag carried by the vendor's alarm activity info.
///
/// Unrecognized tags are preserved in [`AlarmState::Other`] so they never
/// fail deserialization of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlarmState {
    /// Entry delay countdown is running.
    EntryDelay,
    /// Burglar alarm is sounding.
    BurglarAlarm,
    /// Fire alarm is sounding.
    FireAlarm,
    /// Carbon monoxide alarm is sounding.
    CoAlarm,
    /// Panic button was pressed.
    Panic,
    /// A monitoring agent verified a CO or fire alarm.
    UserVerifiedCoOrFireAlarm,
    /// A monitoring agent verified a burglar alarm.
    UserVerifiedBurglarAlarm,
    /// Any other tag.
    Other(String),
}

impl AlarmState {
    /// Returns the vendor tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::EntryDelay => "entry-delay",
            Self::BurglarAlarm => "burglar-alarm",
            Self::FireAlarm => "fire-alarm",
            Self::CoAlarm => "co-alarm",
            Self::Panic => "panic",
            Self::UserVerifiedCoOrFireAlarm => "user-verified-co-or-fire-alarm",
            Self::UserVerifiedBurglarAlarm => "user-verified-burglar-alarm",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for AlarmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for AlarmState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "entry-delay" => Self::EntryDelay,
            "burglar-alarm" => Self::BurglarAlarm,
            "fire-alarm" => Self::FireAlarm,
            "co-alarm" => Self::CoAlarm,
            "panic" => Self::Panic,
            "user-verified-co-or-fire-alarm" => Self::UserVerifiedCoOrFireAlarm,
            "user-verified-burglar-alarm" => Self::UserVerifiedBurglarAlarm,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for AlarmState {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<AlarmState> for String {
    fn from(state: AlarmState) -> Self {
        match state {
            AlarmState::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags() {
        assert_eq!(AlarmState::from("entry-delay"), AlarmState::EntryDelay);
        assert_eq!(AlarmState::from("burglar-alarm"), AlarmState::BurglarAlarm);
        assert_eq!(AlarmState::from("co-alarm"), AlarmState::CoAlarm);
    }

    #[test]
    fn unknown_tag_is_preserved() {
        let state = AlarmState::from("water-leak");
        assert_eq!(state, AlarmState::Other("water-leak".to_string()));
        assert_eq!(state.as_str(), "water-leak");
    }

    #[test]
    fn json_round_trip_uses_vendor_tag() {
        let json = serde_json::to_string(&AlarmState::UserVerifiedBurglarAlarm).unwrap();
        assert_eq!(json, "\"user-verified-burglar-alarm\"");
        let back: AlarmState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AlarmState::UserVerifiedBurglarAlarm);
    }
}
