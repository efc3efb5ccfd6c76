// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Latest known device state.

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::event::DeviceDataBus;

use super::AlarmDeviceData;

/// Latest snapshot of an alarm device plus the bus that announces new ones.
///
/// Vendor clients embed this to back [`AlarmDevice::data`](crate::AlarmDevice::data)
/// and [`AlarmDevice::subscribe`](crate::AlarmDevice::subscribe).
///
/// # Examples
///
/// ```
/// use alarm_panel_hap::state::{AlarmDeviceData, AlarmDeviceState};
/// use alarm_panel_hap::types::ArmingMode;
///
/// let state = AlarmDeviceState::new(AlarmDeviceData::new(ArmingMode::Disarmed));
/// let mut rx = state.subscribe();
///
/// state.update(AlarmDeviceData::new(ArmingMode::Away));
///
/// assert_eq!(state.snapshot().mode, ArmingMode::Away);
/// assert_eq!(rx.try_recv().unwrap().mode, ArmingMode::Away);
/// ```
#[derive(Debug)]
pub struct AlarmDeviceState {
    latest: RwLock<AlarmDeviceData>,
    bus: DeviceDataBus,
}

impl AlarmDeviceState {
    /// Creates a state holder seeded with an initial snapshot.
    #[must_use]
    pub fn new(initial: AlarmDeviceData) -> Self {
        Self {
            latest: RwLock::new(initial),
            bus: DeviceDataBus::new(),
        }
    }

    /// Returns a clone of the latest snapshot.
    #[must_use]
    pub fn snapshot(&self) -> AlarmDeviceData {
        self.latest.read().clone()
    }

    /// Stores a new snapshot, then announces it to subscribers.
    pub fn update(&self, data: AlarmDeviceData) {
        *self.latest.write() = data.clone();
        self.bus.publish(data);
    }

    /// Subscribes to snapshots published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AlarmDeviceData> {
        self.bus.subscribe()
    }

    /// Returns the number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }
}

impl Default for AlarmDeviceState {
    fn default() -> Self {
        Self::new(AlarmDeviceData::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArmingMode;

    #[test]
    fn update_replaces_snapshot() {
        let state = AlarmDeviceState::default();
        assert_eq!(state.snapshot().mode, ArmingMode::Disarmed);

        state.update(AlarmDeviceData::new(ArmingMode::Home));
        assert_eq!(state.snapshot().mode, ArmingMode::Home);
    }

    #[test]
    fn update_without_subscribers_still_stores() {
        let state = AlarmDeviceState::default();
        assert_eq!(state.subscriber_count(), 0);

        state.update(AlarmDeviceData::new(ArmingMode::Away));
        assert_eq!(state.snapshot().mode, ArmingMode::Away);
    }

    #[test]
    fn subscribers_only_see_later_updates() {
        let state = AlarmDeviceState::default();
        state.update(AlarmDeviceData::new(ArmingMode::Home));

        let mut rx = state.subscribe();
        assert!(rx.try_recv().is_err());

        state.update(AlarmDeviceData::new(ArmingMode::Away));
        assert_eq!(rx.try_recv().unwrap().mode, ArmingMode::Away);
    }
}
