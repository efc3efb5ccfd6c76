// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deduplication of consecutive snapshots on their arming mode.

use crate::state::AlarmDeviceData;
use crate::types::ArmingMode;

/// Lets a snapshot through only when its mode differs from the previous one.
///
/// The first snapshot always passes. Alarm activity is not compared, so a
/// snapshot that only adds or clears alarm info is filtered out.
///
/// # Examples
///
/// ```
/// use alarm_panel_hap::event::ModeFilter;
/// use alarm_panel_hap::state::AlarmDeviceData;
/// use alarm_panel_hap::types::ArmingMode;
///
/// let mut filter = ModeFilter::new();
/// assert!(filter.is_distinct(&AlarmDeviceData::new(ArmingMode::Away)));
/// assert!(!filter.is_distinct(&AlarmDeviceData::new(ArmingMode::Away)));
/// assert!(filter.is_distinct(&AlarmDeviceData::new(ArmingMode::Disarmed)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModeFilter {
    last: Option<ArmingMode>,
}

impl ModeFilter {
    /// Creates a filter that has seen nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the snapshot's mode and returns whether it changed.
    pub fn is_distinct(&mut self, data: &AlarmDeviceData) -> bool {
        if self.last.as_ref() == Some(&data.mode) {
            return false;
        }
        self.last = Some(data.mode.clone());
        true
    }
}
