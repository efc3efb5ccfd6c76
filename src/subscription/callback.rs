// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for characteristic value updates.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::accessory::{Characteristic, Service};

/// Unique identifier for a subscription.
///
/// IDs are unique within the lifetime of the registry that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Callback invoked with every pushed characteristic value.
type ValueCallback = Arc<dyn Fn(Service, Characteristic, u8) + Send + Sync>;

/// Registry of value update callbacks.
///
/// Thread-safe through `parking_lot::RwLock`. Callbacks are cloned out of
/// the lock before being invoked, so a callback may subscribe or
/// unsubscribe without deadlocking.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    value_callbacks: RwLock<HashMap<SubscriptionId, ValueCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            value_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Registers a callback for pushed values.
    pub fn on_value_updated<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Service, Characteristic, u8) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.value_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.value_callbacks.write().remove(&id).is_some()
    }

    /// Calls every registered callback with the pushed value.
    pub fn dispatch(&self, service: Service, characteristic: Characteristic, value: u8) {
        let callbacks: Vec<ValueCallback> = self.value_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(service, characteristic, value);
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value_callbacks.read().len()
    }

    /// Returns `true` if no callback is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("value_callbacks", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU8;

    #[test]
    fn subscription_ids_are_unique() {
        let registry = CallbackRegistry::new();
        let id1 = registry.on_value_updated(|_, _, _| {});
        let id2 = registry.on_value_updated(|_, _, _| {});
        assert_ne!(id1, id2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn dispatch_reaches_callbacks() {
        let registry = CallbackRegistry::new();
        let seen = Arc::new(AtomicU8::new(u8::MAX));
        let seen_clone = Arc::clone(&seen);

        registry.on_value_updated(move |_, characteristic, value| {
            assert_eq!(characteristic, Characteristic::SecuritySystemTargetState);
            seen_clone.store(value, Ordering::SeqCst);
        });

        registry.dispatch(
            Service::SecuritySystem,
            Characteristic::SecuritySystemTargetState,
            0,
        );
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unsubscribe_removes_callback() {
        let registry = CallbackRegistry::new();
        let id = registry.on_value_updated(|_, _, _| panic!("should not be called"));

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.dispatch(
            Service::SecuritySystem,
            Characteristic::SecuritySystemCurrentState,
            3,
        );
    }

    #[test]
    fn subscription_id_display() {
        assert_eq!(SubscriptionId::new(42).to_string(), "Sub(42)");
    }
}
