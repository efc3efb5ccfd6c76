// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broadcast bus for device snapshots.

use tokio::sync::broadcast;

use crate::state::AlarmDeviceData;

/// Default channel capacity for the data bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Bus that fans device snapshots out to every subscriber.
///
/// Backed by tokio's broadcast channel. A subscriber that falls more than
/// the capacity behind loses the oldest snapshots and gets
/// `RecvError::Lagged` on its next receive.
///
/// # Examples
///
/// ```
/// use alarm_panel_hap::event::DeviceDataBus;
/// use alarm_panel_hap::state::AlarmDeviceData;
/// use alarm_panel_hap::types::ArmingMode;
///
/// let bus = DeviceDataBus::new();
/// let mut rx = bus.subscribe();
///
/// bus.publish(AlarmDeviceData::new(ArmingMode::Home));
/// assert_eq!(rx.try_recv().unwrap().mode, ArmingMode::Home);
/// ```
#[derive(Debug)]
pub struct DeviceDataBus {
    sender: broadcast::Sender<AlarmDeviceData>,
}

impl DeviceDataBus {
    /// Creates a new bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new bus with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to snapshots published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AlarmDeviceData> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes a snapshot to all subscribers.
    ///
    /// Without subscribers the snapshot is dropped.
    pub fn publish(&self, data: AlarmDeviceData) {
        let _ = self.sender.send(data);
    }
}

impl Default for DeviceDataBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DeviceDataBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArmingMode;

    #[test]
    fn new_bus_has_no_subscribers() {
        let bus = DeviceDataBus::new();
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn drop_subscriber_decrements_count() {
        let bus = DeviceDataBus::new();

        let rx = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        drop(rx);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn publish_delivers_to_multiple_subscribers() {
        let bus = DeviceDataBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(AlarmDeviceData::new(ArmingMode::Away));

        assert_eq!(rx1.recv().await.unwrap().mode, ArmingMode::Away);
        assert_eq!(rx2.recv().await.unwrap().mode, ArmingMode::Away);
    }

    #[test]
    fn clone_shares_same_channel() {
        let bus1 = DeviceDataBus::new();
        let bus2 = bus1.clone();

        let _rx = bus1.subscribe();
        assert_eq!(bus2.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn slow_subscriber_lags() {
        let bus = DeviceDataBus::with_capacity(2);
        let mut rx = bus.subscribe();

        for _ in 0..3 {
            bus.publish(AlarmDeviceData::new(ArmingMode::Home));
        }

        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Lagged(1))
        ));
    }
}
