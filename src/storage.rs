//! Persisted budget profile.
//!
//! The profile is one JSON record under a fixed key in browser local
//! storage. It is written and removed wholesale. A stored value that no
//! longer deserializes is treated as if nothing had been saved.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MISC_PCT, PROFILE_STORAGE_KEY};
use crate::error::{AppError, Result};

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("local storage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }
}

/// In-process storage, used off the browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// The five budget inputs exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileFields {
    pub total_amount: String,
    pub savings_pct: String,
    pub investment_pct: String,
    pub personal_pct: String,
    pub misc_pct: String,
}

impl ProfileFields {
    /// State of the form after a profile is cleared.
    pub fn cleared() -> Self {
        Self {
            misc_pct: DEFAULT_MISC_PCT.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_pct: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_pct: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_pct: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misc_pct: Option<String>,
    pub timestamp: String,
}

impl StoredProfile {
    pub fn capture(fields: &ProfileFields, now: DateTime<Utc>) -> Self {
        Self {
            total_amount: Some(fields.total_amount.clone()),
            savings_pct: Some(fields.savings_pct.clone()),
            investment_pct: Some(fields.investment_pct.clone()),
            personal_pct: Some(fields.personal_pct.clone()),
            misc_pct: Some(fields.misc_pct.clone()),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Overlays the stored values on `current`; fields missing from the
    /// record keep their current value.
    pub fn apply_to(&self, current: &ProfileFields) -> ProfileFields {
        let pick = |stored: &Option<String>, current: &String| {
            stored.clone().unwrap_or_else(|| current.clone())
        };
        ProfileFields {
            total_amount: pick(&self.total_amount, &current.total_amount),
            savings_pct: pick(&self.savings_pct, &current.savings_pct),
            investment_pct: pick(&self.investment_pct, &current.investment_pct),
            personal_pct: pick(&self.personal_pct, &current.personal_pct),
            misc_pct: pick(&self.misc_pct, &current.misc_pct),
        }
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Save time in the browser's local time zone.
    pub fn saved_at_display(&self) -> String {
        self.saved_at_in(&Local)
    }

    pub fn saved_at_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match self.saved_at() {
            Some(at) => at
                .with_timezone(tz)
                .format("%-d/%-m/%Y, %-I:%M:%S %P")
                .to_string(),
            None => self.timestamp.clone(),
        }
    }
}

pub struct ProfileStore<S: KeyValueStore> {
    store: S,
}

impl ProfileStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Overwrites any previous profile.
    pub fn save(&self, fields: &ProfileFields, now: DateTime<Utc>) -> Result<StoredProfile> {
        let profile = StoredProfile::capture(fields, now);
        let raw = serde_json::to_string(&profile)?;
        self.store.set(PROFILE_STORAGE_KEY, &raw)?;
        log::info!("profile saved at {}", profile.timestamp);
        Ok(profile)
    }

    pub fn load(&self) -> Result<Option<StoredProfile>> {
        let Some(raw) = self.store.get(PROFILE_STORAGE_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<StoredProfile>(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                log::warn!("ignoring unreadable saved profile: {}", e);
                Ok(None)
            }
        }
    }

    /// Removes the profile and returns the form state to show afterwards.
    pub fn clear(&self) -> Result<ProfileFields> {
        self.store.remove(PROFILE_STORAGE_KEY)?;
        log::info!("profile cleared");
        Ok(ProfileFields::cleared())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn sample_fields() -> ProfileFields {
        ProfileFields {
            total_amount: "50000".into(),
            savings_pct: "20".into(),
            investment_pct: "30".into(),
            personal_pct: "35".into(),
            misc_pct: "15".into(),
        }
    }

    fn save_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 5).unwrap()
    }

    #[test]
    fn test_save_then_load_restores_fields() {
        let profiles = ProfileStore::new(MemoryStore::default());
        profiles.save(&sample_fields(), save_time()).unwrap();

        let loaded = profiles.load().unwrap().expect("profile present");
        let restored = loaded.apply_to(&ProfileFields::cleared());

        assert_eq!(restored, sample_fields());
        assert_eq!(loaded.saved_at(), Some(save_time()));
    }

    #[test]
    fn test_stored_json_uses_camel_case_and_iso_timestamp() {
        let profiles = ProfileStore::new(MemoryStore::default());
        profiles.save(&sample_fields(), save_time()).unwrap();

        let raw = profiles.store().get(PROFILE_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["totalAmount"], "50000");
        assert_eq!(value["miscPct"], "15");
        assert_eq!(value["timestamp"], "2026-10-19T09:30:05.000Z");
    }

    #[test]
    fn test_save_overwrites_previous_profile() {
        let profiles = ProfileStore::new(MemoryStore::default());
        profiles.save(&sample_fields(), save_time()).unwrap();

        let mut changed = sample_fields();
        changed.total_amount = "75000".into();
        profiles.save(&changed, save_time()).unwrap();

        let loaded = profiles.load().unwrap().unwrap();
        assert_eq!(loaded.total_amount.as_deref(), Some("75000"));
    }

    #[test]
    fn test_load_missing_profile() {
        let profiles = ProfileStore::new(MemoryStore::default());
        assert_eq!(profiles.load().unwrap(), None);
    }

    #[test]
    fn test_malformed_profile_reads_as_absent() {
        let profiles = ProfileStore::new(MemoryStore::default());
        profiles.store().set(PROFILE_STORAGE_KEY, "{not json").unwrap();
        assert_eq!(profiles.load().unwrap(), None);
    }

    #[test]
    fn test_partial_profile_leaves_missing_fields_untouched() {
        let profiles = ProfileStore::new(MemoryStore::default());
        profiles
            .store()
            .set(
                PROFILE_STORAGE_KEY,
                r#"{"totalAmount": "40000", "timestamp": "2026-10-19T09:30:05.000Z"}"#,
            )
            .unwrap();

        let current = ProfileFields {
            savings_pct: "25".into(),
            ..ProfileFields::cleared()
        };
        let restored = profiles.load().unwrap().unwrap().apply_to(&current);

        assert_eq!(restored.total_amount, "40000");
        assert_eq!(restored.savings_pct, "25");
        assert_eq!(restored.misc_pct, "15");
    }

    #[test]
    fn test_clear_removes_key_and_resets_fields() {
        let profiles = ProfileStore::new(MemoryStore::default());
        profiles.save(&sample_fields(), save_time()).unwrap();

        let fields = profiles.clear().unwrap();

        assert_eq!(profiles.store().get(PROFILE_STORAGE_KEY).unwrap(), None);
        assert_eq!(fields.misc_pct, "15");
        assert!(fields.total_amount.is_empty());
        assert!(fields.savings_pct.is_empty());
        assert!(fields.investment_pct.is_empty());
        assert!(fields.personal_pct.is_empty());
    }

    #[test]
    fn test_saved_at_formatting() {
        let profile = StoredProfile::capture(&sample_fields(), save_time());
        assert_eq!(profile.saved_at_in(&Utc), "19/10/2026, 9:30:05 am");

        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(profile.saved_at_in(&ist), "19/10/2026, 3:00:05 pm");
    }

    #[test]
    fn test_unparsable_timestamp_is_shown_raw() {
        let mut profile = StoredProfile::capture(&sample_fields(), save_time());
        profile.timestamp = "yesterday".into();
        assert_eq!(profile.saved_at_in(&Utc), "yesterday");
    }
}
