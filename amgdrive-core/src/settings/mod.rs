//! Settings and telemetry store
//!
//! A fixed-capacity key/value map where every entry carries a dirty flag.
//! Writers mark changed values dirty; the telemetry path drains the dirty
//! entries and forwards them as `KEY=value` notifications.

pub mod keys;
pub mod store;

pub use store::{
    SettingKey, SettingPair, SettingValue, SettingsError, SettingsStore, MAX_KEY_LEN,
    MAX_VALUE_LEN,
};
