//! Dirty-flag key/value store
//!
//! Each entry maps a key to `(value, dirty)`. Values are kept as text so
//! the same store can carry numbers and mode names, and so a drained entry
//! is ready to be sent as-is.

use core::fmt::{self, Write};

use heapless::{String, Vec};

/// Maximum key length in bytes
pub const MAX_KEY_LEN: usize = 32;

/// Maximum value length in bytes
pub const MAX_VALUE_LEN: usize = 16;

/// Setting key
pub type SettingKey = String<MAX_KEY_LEN>;

/// Setting value
pub type SettingValue = String<MAX_VALUE_LEN>;

/// Errors from settings store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// No free slot for a new key
    Full,
    /// Key longer than [`MAX_KEY_LEN`]
    KeyTooLong,
    /// Value longer than [`MAX_VALUE_LEN`]
    ValueTooLong,
    /// Key not present
    Missing,
    /// Stored value is not a number
    InvalidNumber,
}

/// A key and its value, as handed to the telemetry path
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingPair {
    pub key: SettingKey,
    pub value: SettingValue,
}

impl fmt::Display for SettingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    key: SettingKey,
    value: SettingValue,
    dirty: bool,
}

/// Fixed-capacity settings store with change tracking
///
/// Holds up to `N` keys. Entries keep insertion order, which is also the
/// order [`drain_dirty`](Self::drain_dirty) reports them in.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore<const N: usize> {
    entries: Vec<Entry, N>,
}

impl<const N: usize> SettingsStore<N> {
    /// Create an empty store
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite a value
    ///
    /// The key is marked dirty only when it is new or its value differs
    /// from the stored one. Returns whether anything changed. On error the
    /// store is left untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool, SettingsError> {
        let new_value = SettingValue::try_from(value).map_err(|_| SettingsError::ValueTooLong)?;

        if let Some(entry) = self.entry_mut(key) {
            if entry.value == new_value {
                return Ok(false);
            }
            entry.value = new_value;
            entry.dirty = true;
            return Ok(true);
        }

        let key = SettingKey::try_from(key).map_err(|_| SettingsError::KeyTooLong)?;
        let entry = Entry {
            key,
            value: new_value,
            dirty: true,
        };
        self.entries.push(entry).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Settings store full ({} keys)", N);
            SettingsError::Full
        })?;
        Ok(true)
    }

    /// Store a number using its shortest round-trip decimal form
    ///
    /// Very small and very large magnitudes fall back to exponent notation
    /// so they still fit in [`MAX_VALUE_LEN`].
    pub fn set_f32(&mut self, key: &str, value: f32) -> Result<bool, SettingsError> {
        let mut text = SettingValue::new();
        if write!(text, "{}", value).is_err() {
            text.clear();
            write!(text, "{:e}", value).map_err(|_| SettingsError::ValueTooLong)?;
        }
        self.set(key, &text)
    }

    /// Get a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry(key).map(|e| e.value.as_str())
    }

    /// Get a value parsed as a number
    pub fn get_f32(&self, key: &str) -> Result<f32, SettingsError> {
        let value = self.get(key).ok_or(SettingsError::Missing)?;
        value
            .trim()
            .parse::<f32>()
            .map_err(|_| SettingsError::InvalidNumber)
    }

    /// Flag an existing key for propagation without changing its value
    pub fn mark_dirty(&mut self, key: &str) -> Result<(), SettingsError> {
        let entry = self.entry_mut(key).ok_or(SettingsError::Missing)?;
        entry.dirty = true;
        Ok(())
    }

    /// Check if a key has changes waiting to be drained
    pub fn is_dirty(&self, key: &str) -> bool {
        self.entry(key).is_some_and(|e| e.dirty)
    }

    /// Check if any key has changes waiting to be drained
    pub fn has_dirty(&self) -> bool {
        self.entries.iter().any(|e| e.dirty)
    }

    /// Take every dirty entry and clear its flag
    pub fn drain_dirty(&mut self) -> Vec<SettingPair, N> {
        let mut pairs = Vec::new();
        for entry in self.entries.iter_mut().filter(|e| e.dirty) {
            entry.dirty = false;
            let pushed = pairs.push(SettingPair {
                key: entry.key.clone(),
                value: entry.value.clone(),
            });
            // At most N entries exist
            debug_assert!(pushed.is_ok());
        }
        pairs
    }

    fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key.as_str() == key)
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key.as_str() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_marks_dirty() {
        let mut store: SettingsStore<4> = SettingsStore::new();
        assert!(store.is_empty());

        assert_eq!(store.set("MODE", "D"), Ok(true));
        assert_eq!(store.get("MODE"), Some("D"));
        assert!(store.is_dirty("MODE"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_same_value_stays_clean() {
        let mut store: SettingsStore<4> = SettingsStore::new();
        store.set("MODE", "D").unwrap();
        store.drain_dirty();

        assert_eq!(store.set("MODE", "D"), Ok(false));
        assert!(!store.is_dirty("MODE"));

        assert_eq!(store.set("MODE", "R"), Ok(true));
        assert!(store.is_dirty("MODE"));
    }

    #[test]
    fn test_drain_clears_flags() {
        let mut store: SettingsStore<4> = SettingsStore::new();
        store.set("A", "1").unwrap();
        store.set("B", "2").unwrap();
        store.set("C", "3").unwrap();
        store.drain_dirty();
        store.set("C", "4").unwrap();
        store.set("A", "5").unwrap();

        let pairs = store.drain_dirty();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].key.as_str(), "A");
        assert_eq!(pairs[0].value.as_str(), "5");
        assert_eq!(pairs[1].key.as_str(), "C");
        assert_eq!(pairs[1].value.as_str(), "4");

        assert!(!store.has_dirty());
        assert!(store.drain_dirty().is_empty());
    }

    #[test]
    fn test_drain_full_store() {
        let mut store: SettingsStore<3> = SettingsStore::new();
        store.set("A", "1").unwrap();
        store.set("B", "2").unwrap();
        store.set("C", "3").unwrap();

        let pairs = store.drain_dirty();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2].key.as_str(), "C");
        assert!(!store.has_dirty());
    }

    #[test]
    fn test_mark_dirty() {
        let mut store: SettingsStore<4> = SettingsStore::new();
        store.set("A", "1").unwrap();
        store.drain_dirty();

        assert_eq!(store.mark_dirty("A"), Ok(()));
        assert!(store.is_dirty("A"));
        assert_eq!(store.mark_dirty("B"), Err(SettingsError::Missing));
    }

    #[test]
    fn test_capacity_limit() {
        let mut store: SettingsStore<2> = SettingsStore::new();
        store.set("A", "1").unwrap();
        store.set("B", "2").unwrap();
        assert_eq!(store.set("C", "3"), Err(SettingsError::Full));

        // Existing keys can still be updated
        assert_eq!(store.set("A", "9"), Ok(true));
        assert_eq!(store.get("C"), None);
    }

    #[test]
    fn test_length_limits() {
        let mut store: SettingsStore<2> = SettingsStore::new();
        let long_key = "ABCDEFGHIJKLMNOPQRSTUVWXYZ_0123456";
        assert!(long_key.len() > MAX_KEY_LEN);
        assert_eq!(store.set(long_key, "1"), Err(SettingsError::KeyTooLong));
        assert_eq!(
            store.set("A", "12345678901234567"),
            Err(SettingsError::ValueTooLong)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_numbers() {
        let mut store: SettingsStore<4> = SettingsStore::new();
        store.set_f32("MAX_POWER", 87.5).unwrap();
        assert_eq!(store.get("MAX_POWER"), Some("87.5"));
        assert_eq!(store.get_f32("MAX_POWER"), Ok(87.5));

        store.set_f32("MAX_POWER", 50.0).unwrap();
        assert_eq!(store.get("MAX_POWER"), Some("50"));

        store.set("MODE", "N").unwrap();
        assert_eq!(store.get_f32("MODE"), Err(SettingsError::InvalidNumber));
        assert_eq!(store.get_f32("NOPE"), Err(SettingsError::Missing));
    }

    #[test]
    fn test_tiny_numbers_use_exponent() {
        let mut store: SettingsStore<2> = SettingsStore::new();
        store.set_f32("CUMULATED_POWER", 1.5e-20).unwrap();
        assert_eq!(store.get("CUMULATED_POWER"), Some("1.5e-20"));
        assert_eq!(store.get_f32("CUMULATED_POWER"), Ok(1.5e-20));
    }

    #[test]
    fn test_pair_display() {
        let pair = SettingPair {
            key: SettingKey::try_from("CUMULATED_POWER").unwrap(),
            value: SettingValue::try_from("12.5").unwrap(),
        };
        let mut text: String<48> = String::new();
        write!(text, "{}", pair).unwrap();
        assert_eq!(text.as_str(), "CUMULATED_POWER=12.5");
    }
}
