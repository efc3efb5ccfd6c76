// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the alarm panel adapter.
//!
//! This module provides the error hierarchy used across the crate: value
//! validation at the characteristic boundary, configuration parsing and
//! accessory host misuse, plus the failures a vendor command sink reports.

use thiserror::Error;

use crate::accessory::Characteristic;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A characteristic value failed validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// No handler is registered for the characteristic.
    #[error("characteristic {0} is not registered")]
    CharacteristicNotRegistered(Characteristic),

    /// The characteristic was registered without a write handler.
    #[error("characteristic {0} is read-only")]
    CharacteristicNotWritable(Characteristic),

    /// The panel was created outside of a Tokio runtime.
    #[error("no Tokio runtime available")]
    NoRuntime,
}

/// Errors related to characteristic value validation.
///
/// These occur when the accessory framework hands over a raw numeric value
/// that does not map to a known state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Raw value is not a valid security system target state.
    #[error("invalid target state value: {0}")]
    InvalidTargetState(u8),
}

/// Errors reported by a vendor command sink.
///
/// The panel never awaits these on the write path; they are only logged
/// by the task that dispatched the command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The vendor API rejected the command.
    #[error("command rejected: {0}")]
    Rejected(String),

    /// The vendor API could not be reached.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The vendor API did not answer in time.
    #[error("request timed out after {0} ms")]
    Timeout(u64),
}

/// Errors related to loading the panel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
