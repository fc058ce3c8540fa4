// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HomeScreenSettings {
    /// Show the unread dot only for mentions, notifications and rooms marked as unread.
    pub hide_unread_messages_badge: bool,
    pub mark_as_unread_enabled: bool,
    pub room_list_filters_enabled: bool,
}

impl Default for HomeScreenSettings {
    fn default() -> Self {
        HomeScreenSettings {
            hide_unread_messages_badge: false,
            mark_as_unread_enabled: true,
            room_list_filters_enabled: true,
        }
    }
}

impl HomeScreenSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() -> Result<()> {
        let settings = HomeScreenSettings::from_json(r#"{"hide_unread_messages_badge":true}"#)?;

        assert_eq!(
            settings,
            HomeScreenSettings {
                hide_unread_messages_badge: true,
                mark_as_unread_enabled: true,
                room_list_filters_enabled: true,
            }
        );
        assert_eq!(HomeScreenSettings::from_json("{}")?, HomeScreenSettings::default());
        Ok(())
    }

    #[test]
    fn test_persisted_settings_are_read_back() -> Result<()> {
        let settings = HomeScreenSettings {
            hide_unread_messages_badge: true,
            mark_as_unread_enabled: false,
            room_list_filters_enabled: false,
        };
        assert_eq!(HomeScreenSettings::from_json(&settings.to_json()?)?, settings);
        Ok(())
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(HomeScreenSettings::from_json(r#"{"mark_as_unread_enabled":"yes"}"#).is_err());
    }
}
