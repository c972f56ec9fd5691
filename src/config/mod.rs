use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::currency::CurrencyCode;
use crate::storage::{KeyValueStore, PREFERENCES_KEY};

/// Display theme. Dark is the default for fresh installs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// User preference document persisted under its own fixed key. A savings
/// goal of 0 means no goal is set; `currency` overrides locale detection
/// when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub savings_goal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,
}

impl Preferences {
    /// Reads the preference document, degrading to defaults when the key is
    /// missing or unreadable. Older builds stored the bare theme word under
    /// this key; that payload still loads.
    pub fn load(storage: &dyn KeyValueStore) -> Preferences {
        let raw = match storage.read(PREFERENCES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Preferences::default(),
            Err(err) => {
                warn!("failed to read preferences: {}", err);
                return Preferences::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(preferences) => preferences,
            Err(_) => legacy_theme(&raw).unwrap_or_else(|| {
                warn!("discarding malformed preference document");
                Preferences::default()
            }),
        }
    }

    /// Persists the document; failures are logged and swallowed so a broken
    /// backend never takes down the caller.
    pub fn save(&self, storage: &dyn KeyValueStore) {
        let payload = match serde_json::to_string_pretty(self) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("failed to serialize preferences: {}", err);
                return;
            }
        };
        if let Err(err) = storage.write(PREFERENCES_KEY, &payload) {
            warn!("failed to persist preferences: {}", err);
        }
    }
}

fn legacy_theme(raw: &str) -> Option<Preferences> {
    let theme = match raw.trim().trim_matches('"') {
        "dark" => Theme::Dark,
        "light" => Theme::Light,
        _ => return None,
    };
    Some(Preferences {
        theme,
        ..Preferences::default()
    })
}
