// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Security panel accessory.
//!
//! [`SecurityPanel`] maps an [`AlarmDevice`] onto the security system
//! service of an accessory host:
//!
//! - the current state characteristic is derived from the latest snapshot,
//! - the target state characteristic reads the pending target, or the
//!   arming mode when nothing is pending,
//! - target state writes turn into vendor commands.
//!
//! The pending target is forgotten as soon as a current state read shows
//! the device got there.
//!
//! # Night mode
//!
//! The vendor has no night mode. A night arm request is carried out as a
//! stay arm, and [`NIGHT_MODE_CORRECTION_DELAY`] later the target state
//! characteristic is pushed back to stay arm so controllers stop showing
//! night. The correction is never cancelled: if another write lands in
//! between, controllers still receive the stay arm push.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::accessory::{AccessoryHost, Characteristic, ReadHandler, Service, WriteHandler};
use crate::command::AlarmCommand;
use crate::config::PanelConfig;
use crate::device::AlarmDevice;
use crate::error::{Error, Result};
use crate::event::ModeFilter;
use crate::state::AlarmDeviceData;
use crate::types::{ArmTarget, ArmingMode, CurrentState, TargetState};

/// Delay before a night arm request is corrected to stay arm.
pub const NIGHT_MODE_CORRECTION_DELAY: Duration = Duration::from_millis(100);

/// Derives the security system current state from a snapshot.
///
/// Alarm activity whose tag is in [`PanelConfig::alarm_states`] wins over
/// the arming mode. Unknown modes read as disarmed.
///
/// # Examples
///
/// ```
/// use alarm_panel_hap::{PanelConfig, current_state};
/// use alarm_panel_hap::state::AlarmDeviceData;
/// use alarm_panel_hap::types::{AlarmState, ArmingMode, CurrentState};
///
/// let config = PanelConfig::default();
/// let entry = AlarmDeviceData::new(ArmingMode::Away).with_alarm(AlarmState::EntryDelay);
///
/// assert_eq!(current_state(&entry, &config), CurrentState::AwayArm);
/// assert_eq!(
///     current_state(&entry, &config.with_alarm_on_entry_delay(true)),
///     CurrentState::AlarmTriggered
/// );
/// ```
#[must_use]
pub fn current_state(data: &AlarmDeviceData, config: &PanelConfig) -> CurrentState {
    if data
        .alarm_state()
        .is_some_and(|state| config.is_alarm_state(state))
    {
        return CurrentState::AlarmTriggered;
    }
    mode_target(&data.mode).as_current_state()
}

/// The target an arming mode corresponds to, ignoring alarm activity.
fn mode_target(mode: &ArmingMode) -> ArmTarget {
    match mode {
        ArmingMode::Away => ArmTarget::Away,
        ArmingMode::Home => ArmTarget::Stay,
        ArmingMode::Disarmed | ArmingMode::Unknown(_) => ArmTarget::Disarm,
    }
}

struct PanelInner<D: AlarmDevice> {
    device: Arc<D>,
    host: Weak<dyn AccessoryHost>,
    config: PanelConfig,
    pending: Mutex<Option<ArmTarget>>,
    runtime: Handle,
}

impl<D: AlarmDevice> PanelInner<D> {
    /// Current state of `data`, forgetting the pending target once reached.
    fn reconcile_current_state(&self, data: &AlarmDeviceData) -> CurrentState {
        let state = current_state(data, &self.config);
        let mut pending = self.pending.lock();
        if pending.is_some_and(|target| target.is_reached_by(state)) {
            tracing::debug!(device = %self.device.name(), %state, "Target state reached");
            *pending = None;
        }
        state
    }

    fn target_for(&self, data: &AlarmDeviceData) -> ArmTarget {
        let pending = *self.pending.lock();
        pending.unwrap_or_else(|| mode_target(&data.mode))
    }

    fn handle_mode_change(&self, data: &AlarmDeviceData) {
        let target = {
            let mut pending = self.pending.lock();
            let target = pending.unwrap_or_else(|| mode_target(&data.mode));
            *pending = Some(target);
            target
        };
        let device = self.device.name();
        tracing::debug!(
            device = %device,
            mode = %data.mode,
            %target,
            "Arming mode changed"
        );
    }

    fn push_values(&self, data: &AlarmDeviceData) {
        let Some(host) = self.host.upgrade() else {
            return;
        };
        host.update_value(
            Service::SecuritySystem,
            Characteristic::SecuritySystemCurrentState,
            self.reconcile_current_state(data).as_u8(),
        );
        host.update_value(
            Service::SecuritySystem,
            Characteristic::SecuritySystemTargetState,
            self.target_for(data).as_target_state().as_u8(),
        );
    }

    fn set_target_state(&self, requested: TargetState) {
        let target = requested.normalize();
        if requested == TargetState::NightArm {
            self.schedule_night_correction(target.as_target_state());
        }

        let current = current_state(&self.device.data(), &self.config);
        {
            let mut pending = self.pending.lock();
            if target.is_reached_by(current) {
                *pending = None;
                return;
            }
            *pending = Some(target);
        }

        let command = AlarmCommand::for_target(target);
        tracing::info!(
            device = %self.device.name(),
            action = %command,
            "{} {}",
            command.action(),
            self.device.name()
        );

        let device = Arc::clone(&self.device);
        self.runtime.spawn(async move {
            if let Err(e) = command.send(&*device).await {
                tracing::warn!(
                    device = %device.name(),
                    action = %command,
                    error = %e,
                    "Alarm command failed"
                );
            }
        });
    }

    fn schedule_night_correction(&self, corrected: TargetState) {
        let host = self.host.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(NIGHT_MODE_CORRECTION_DELAY).await;
            if let Some(host) = host.upgrade() {
                host.update_value(
                    Service::SecuritySystem,
                    Characteristic::SecuritySystemTargetState,
                    corrected.as_u8(),
                );
            }
        });
    }
}

/// Security system accessory backed by a vendor alarm device.
///
/// Creating the panel registers the current state (read-only) and target
/// state (read/write) characteristics with the host. The host owns those
/// handlers; the panel only keeps a weak reference back to it, so dropping
/// the host stops all pushes.
///
/// # Examples
///
/// ```ignore
/// use std::sync::Arc;
/// use alarm_panel_hap::{PanelConfig, SecurityPanel};
/// use alarm_panel_hap::accessory::{Characteristic, CharacteristicRegistry};
///
/// let host = Arc::new(CharacteristicRegistry::new());
/// let panel = SecurityPanel::new(Arc::new(base_station), &host, PanelConfig::default())?;
/// let listener = panel.start();
///
/// // Arm away
/// host.write(Characteristic::SecuritySystemTargetState, 1)?;
/// ```
pub struct SecurityPanel<D: AlarmDevice> {
    inner: Arc<PanelInner<D>>,
}

impl<D: AlarmDevice> SecurityPanel<D> {
    /// Creates the panel and registers its characteristics with `host`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRuntime`] when called outside a Tokio runtime;
    /// commands and the night mode correction run on that runtime.
    pub fn new<H>(device: Arc<D>, host: &Arc<H>, config: PanelConfig) -> Result<Self>
    where
        H: AccessoryHost + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let host_ref: Weak<H> = Arc::downgrade(host);
        let host_ref: Weak<dyn AccessoryHost> = host_ref;

        let inner = Arc::new(PanelInner {
            device,
            host: host_ref,
            config,
            pending: Mutex::new(None),
            runtime,
        });

        let reader = Arc::clone(&inner);
        let read_current: ReadHandler =
            Arc::new(move || reader.reconcile_current_state(&reader.device.data()).as_u8());
        host.register_characteristic(
            Characteristic::SecuritySystemCurrentState,
            Service::SecuritySystem,
            read_current,
            None,
        );

        let reader = Arc::clone(&inner);
        let read_target: ReadHandler = Arc::new(move || {
            reader
                .target_for(&reader.device.data())
                .as_target_state()
                .as_u8()
        });
        let writer = Arc::clone(&inner);
        let write_target: WriteHandler = Arc::new(move |value: u8| -> Result<()> {
            writer.set_target_state(TargetState::try_from(value)?);
            Ok(())
        });
        host.register_characteristic(
            Characteristic::SecuritySystemTargetState,
            Service::SecuritySystem,
            read_target,
            Some(write_target),
        );

        Ok(Self { inner })
    }

    /// Starts following the device's snapshot stream.
    ///
    /// The latest snapshot is processed first, then every delivered one in
    /// arrival order. A snapshot whose mode differs from the previous one
    /// updates the pending target; every snapshot pushes both
    /// characteristics to the host. The task ends when the device closes
    /// its stream.
    #[must_use = "dropping the handle detaches the listener"]
    pub fn start(&self) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        let mut rx = inner.device.subscribe();
        let initial = inner.device.data();

        self.inner.runtime.spawn(async move {
            let mut filter = ModeFilter::new();
            let mut next = Some(initial);

            loop {
                let data = match next.take() {
                    Some(data) => data,
                    None => match rx.recv().await {
                        Ok(data) => data,
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(
                                device = %inner.device.name(),
                                skipped,
                                "Device data stream lagged"
                            );
                            continue;
                        }
                        Err(RecvError::Closed) => {
                            tracing::debug!(device = %inner.device.name(), "Device data stream closed");
                            break;
                        }
                    },
                };

                if filter.is_distinct(&data) {
                    inner.handle_mode_change(&data);
                }
                inner.push_values(&data);
            }
        })
    }

    /// Reads the current state, forgetting the pending target once reached.
    #[must_use]
    pub fn current_state(&self) -> CurrentState {
        self.inner
            .reconcile_current_state(&self.inner.device.data())
    }

    /// Reads the target state.
    #[must_use]
    pub fn target_state(&self) -> TargetState {
        self.inner
            .target_for(&self.inner.device.data())
            .as_target_state()
    }

    /// Requests a new target state.
    ///
    /// Dispatches at most one vendor command on the runtime the panel was
    /// created on, without waiting for it.
    pub fn set_target_state(&self, target: TargetState) {
        self.inner.set_target_state(target);
    }

    /// Returns the pending target, if any.
    #[must_use]
    pub fn pending_target(&self) -> Option<ArmTarget> {
        *self.inner.pending.lock()
    }

    /// Returns the underlying device.
    #[must_use]
    pub fn device(&self) -> &Arc<D> {
        &self.inner.device
    }

    /// Returns the panel configuration.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.inner.config
    }
}

impl<D: AlarmDevice> std::fmt::Debug for SecurityPanel<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityPanel")
            .field("device", &self.inner.device.name())
            .field("config", &self.inner.config)
            .field("pending", &*self.inner.pending.lock())
            .finish_non_exhaustive()
    }
}
