// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for hosts that announce pushed values.

use crate::accessory::{Characteristic, Service};
use crate::subscription::SubscriptionId;

/// Trait for types that let observers watch pushed characteristic values.
///
/// # Examples
///
/// ```
/// use alarm_panel_hap::accessory::CharacteristicRegistry;
/// use alarm_panel_hap::subscription::Subscribable;
///
/// let registry = CharacteristicRegistry::new();
/// let sub_id = registry.on_value_updated(|service, characteristic, value| {
///     println!("{service}/{characteristic} = {value}");
/// });
///
/// assert!(registry.unsubscribe(sub_id));
/// ```
pub trait Subscribable {
    /// Subscribes to values pushed through the host.
    ///
    /// Values returned by on-demand reads are not reported.
    fn on_value_updated<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Service, Characteristic, u8) + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
