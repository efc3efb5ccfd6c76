// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-process accessory host.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::{AccessoryHost, Characteristic, ReadHandler, Service, WriteHandler};
use crate::error::{Error, Result};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};

#[derive(Clone)]
struct Binding {
    service: Service,
    read: ReadHandler,
    write: Option<WriteHandler>,
}

/// Accessory host that keeps characteristic bindings in memory.
///
/// Bridges embed it behind their own transport: controller reads map to
/// [`read`](Self::read), controller writes to [`write`](Self::write), and
/// pushed values reach observers registered through [`Subscribable`].
///
/// Handlers are cloned out of the lock before being called, so a handler
/// may push values through the same registry.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use alarm_panel_hap::accessory::{AccessoryHost, Characteristic, CharacteristicRegistry, Service};
///
/// let registry = CharacteristicRegistry::new();
/// registry.register_characteristic(
///     Characteristic::SecuritySystemCurrentState,
///     Service::SecuritySystem,
///     Arc::new(|| 3_u8),
///     None,
/// );
///
/// assert_eq!(registry.read(Characteristic::SecuritySystemCurrentState)?, 3);
/// assert!(registry.write(Characteristic::SecuritySystemCurrentState, 1).is_err());
/// # Ok::<(), alarm_panel_hap::Error>(())
/// ```
pub struct CharacteristicRegistry {
    bindings: RwLock<HashMap<Characteristic, Binding>>,
    last_values: RwLock<HashMap<Characteristic, u8>>,
    callbacks: CallbackRegistry,
}

impl CharacteristicRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: RwLock::new(HashMap::new()),
            last_values: RwLock::new(HashMap::new()),
            callbacks: CallbackRegistry::new(),
        }
    }

    fn binding(&self, characteristic: Characteristic) -> Result<Binding> {
        self.bindings
            .read()
            .get(&characteristic)
            .cloned()
            .ok_or(Error::CharacteristicNotRegistered(characteristic))
    }

    /// Reads a characteristic through its read handler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CharacteristicNotRegistered`] if nothing is bound.
    pub fn read(&self, characteristic: Characteristic) -> Result<u8> {
        let binding = self.binding(characteristic)?;
        Ok((binding.read)())
    }

    /// Writes a characteristic through its write handler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CharacteristicNotRegistered`] if nothing is bound,
    /// [`Error::CharacteristicNotWritable`] if the binding is read-only, or
    /// whatever the write handler rejects the value with.
    pub fn write(&self, characteristic: Characteristic, value: u8) -> Result<()> {
        let binding = self.binding(characteristic)?;
        let write = binding
            .write
            .ok_or(Error::CharacteristicNotWritable(characteristic))?;
        write(value)
    }

    /// Returns the service a characteristic is bound to.
    #[must_use]
    pub fn service_of(&self, characteristic: Characteristic) -> Option<Service> {
        self.bindings
            .read()
            .get(&characteristic)
            .map(|binding| binding.service)
    }

    /// Returns `true` if the characteristic has a binding.
    #[must_use]
    pub fn is_registered(&self, characteristic: Characteristic) -> bool {
        self.bindings.read().contains_key(&characteristic)
    }

    /// Returns `true` if the characteristic accepts writes.
    #[must_use]
    pub fn is_writable(&self, characteristic: Characteristic) -> bool {
        self.bindings
            .read()
            .get(&characteristic)
            .is_some_and(|binding| binding.write.is_some())
    }

    /// Returns the last value pushed for a characteristic.
    #[must_use]
    pub fn last_value(&self, characteristic: Characteristic) -> Option<u8> {
        self.last_values.read().get(&characteristic).copied()
    }
}

impl AccessoryHost for CharacteristicRegistry {
    fn register_characteristic(
        &self,
        characteristic: Characteristic,
        service: Service,
        read: ReadHandler,
        write: Option<WriteHandler>,
    ) {
        tracing::debug!(
            %characteristic,
            %service,
            writable = write.is_some(),
            "Registering characteristic"
        );
        self.bindings.write().insert(
            characteristic,
            Binding {
                service,
                read,
                write,
            },
        );
    }

    fn update_value(&self, service: Service, characteristic: Characteristic, value: u8) {
        tracing::trace!(%characteristic, value, "Pushing characteristic value");
        self.last_values.write().insert(characteristic, value);
        self.callbacks.dispatch(service, characteristic, value);
    }
}

impl Subscribable for CharacteristicRegistry {
    fn on_value_updated<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Service, Characteristic, u8) + Send + Sync + 'static,
    {
        self.callbacks.on_value_updated(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}

impl Default for CharacteristicRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CharacteristicRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacteristicRegistry")
            .field("bindings", &self.bindings.read().keys().collect::<Vec<_>>())
            .field("last_values", &*self.last_values.read())
            .finish_non_exhaustive()
    }
}
