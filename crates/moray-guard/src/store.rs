//! Settings source for the enforcement gate.
//!
//! The requirement is owned and mutated by an external administrative
//! collaborator; the gate only ever reads it. [`SettingsSource`]
//! abstracts that read, and [`InMemorySettings`] is the concrete store
//! used by tests and single-process deployments.

use crate::requirement::{TwoFactorRequirement, SETTING_KEY};
use std::collections::HashMap;
use std::sync::RwLock;

/// Read access to the site-wide settings store.
///
/// Implementations must be total: a missing or undecodable value
/// yields the default requirement, never an error. The gate reads the
/// value once per request; implementations must tolerate the value
/// changing between reads of different concurrent requests.
///
/// # Implementors
///
/// - [`InMemorySettings`] — `RwLock`-backed map for tests and
///   single-process deployments
/// - Database-backed stores in the panel application proper
pub trait SettingsSource: Send + Sync {
    /// Returns the currently configured two-factor requirement.
    fn two_factor_requirement(&self) -> TwoFactorRequirement;
}

/// Thread-safe, in-memory settings store.
///
/// Values are integer-coded scalars keyed by name, the same shape the
/// panel's persistent settings table uses. Reads vastly outnumber
/// writes; `RwLock` keeps concurrent request reads cheap.
///
/// # Example
///
/// ```
/// use moray_guard::{InMemorySettings, SettingsSource, TwoFactorRequirement, SETTING_KEY};
///
/// let settings = InMemorySettings::new();
/// assert_eq!(settings.two_factor_requirement(), TwoFactorRequirement::Disabled);
///
/// settings.put(SETTING_KEY, TwoFactorRequirement::Everyone.as_setting());
/// assert_eq!(settings.two_factor_requirement(), TwoFactorRequirement::Everyone);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySettings {
    values: RwLock<HashMap<String, i64>>,
}

impl InMemorySettings {
    /// Creates an empty store; every setting reads as its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn put(&self, key: impl Into<String>, value: i64) {
        match self.values.write() {
            Ok(mut values) => {
                values.insert(key.into(), value);
            }
            Err(e) => {
                tracing::error!("settings store lock poisoned on put: {e}");
            }
        }
    }

    /// Returns the raw value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        match self.values.read() {
            Ok(values) => values.get(key).copied(),
            Err(e) => {
                tracing::error!("settings store lock poisoned on get: {e}");
                None
            }
        }
    }
}

impl SettingsSource for InMemorySettings {
    fn two_factor_requirement(&self) -> TwoFactorRequirement {
        TwoFactorRequirement::from_setting(self.get(SETTING_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn empty_store_reads_default() {
        let settings = InMemorySettings::new();
        assert_eq!(
            settings.two_factor_requirement(),
            TwoFactorRequirement::Disabled
        );
        assert_eq!(settings.get(SETTING_KEY), None);
    }

    #[test]
    fn last_put_wins() {
        let settings = InMemorySettings::new();
        settings.put(SETTING_KEY, 1);
        settings.put(SETTING_KEY, 2);
        assert_eq!(
            settings.two_factor_requirement(),
            TwoFactorRequirement::Everyone
        );
    }

    #[test]
    fn undecodable_value_reads_default() {
        let settings = InMemorySettings::new();
        settings.put(SETTING_KEY, 42);
        assert_eq!(
            settings.two_factor_requirement(),
            TwoFactorRequirement::Disabled
        );
    }

    #[test]
    fn unrelated_keys_do_not_collide() {
        let settings = InMemorySettings::new();
        settings.put("registration.enabled", 1);
        assert_eq!(
            settings.two_factor_requirement(),
            TwoFactorRequirement::Disabled
        );
        assert_eq!(settings.get("registration.enabled"), Some(1));
    }

    #[test]
    fn concurrent_reads_and_writes() {
        let settings = Arc::new(InMemorySettings::new());
        let writer = {
            let settings = Arc::clone(&settings);
            std::thread::spawn(move || {
                for value in 0..100 {
                    settings.put(SETTING_KEY, value % 3);
                }
            })
        };
        let reader = {
            let settings = Arc::clone(&settings);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    // Any decoded value is acceptable; the read must
                    // simply never fail or tear.
                    let _ = settings.two_factor_requirement();
                }
            })
        };
        writer.join().expect("writer thread");
        reader.join().expect("reader thread");
    }
}
