// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use roomlist_markup::AttributedString;
use url::Url;

use crate::domain::shared::models::RoomId;

/// A snapshot of the list related metadata of a room, as delivered by the SDK.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSummary {
    pub id: RoomId,
    pub name: String,
    pub avatar_url: Option<Url>,
    pub last_message: Option<AttributedString>,
    pub last_message_formatted_timestamp: Option<String>,
    pub has_unread_messages: bool,
    pub has_unread_mentions: bool,
    pub has_unread_notifications: bool,
    pub is_muted: bool,
    /// The user explicitly flagged the room as unread.
    pub is_marked_unread: bool,
    pub has_ongoing_call: bool,
}

impl RoomSummary {
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
            last_message: None,
            last_message_formatted_timestamp: None,
            has_unread_messages: false,
            has_unread_mentions: false,
            has_unread_notifications: false,
            is_muted: false,
            is_marked_unread: false,
            has_ongoing_call: false,
        }
    }
}

impl RoomSummary {
    pub fn set_avatar_url(mut self, avatar_url: Url) -> Self {
        self.avatar_url = Some(avatar_url);
        self
    }

    pub fn set_last_message(
        mut self,
        last_message: impl Into<AttributedString>,
        formatted_timestamp: impl Into<String>,
    ) -> Self {
        self.last_message = Some(last_message.into());
        self.last_message_formatted_timestamp = Some(formatted_timestamp.into());
        self
    }

    pub fn set_has_unread_messages(mut self, has_unread_messages: bool) -> Self {
        self.has_unread_messages = has_unread_messages;
        self
    }

    pub fn set_has_unread_mentions(mut self, has_unread_mentions: bool) -> Self {
        self.has_unread_mentions = has_unread_mentions;
        self
    }

    pub fn set_has_unread_notifications(mut self, has_unread_notifications: bool) -> Self {
        self.has_unread_notifications = has_unread_notifications;
        self
    }

    pub fn set_is_muted(mut self, is_muted: bool) -> Self {
        self.is_muted = is_muted;
        self
    }

    pub fn set_is_marked_unread(mut self, is_marked_unread: bool) -> Self {
        self.is_marked_unread = is_marked_unread;
        self
    }

    pub fn set_has_ongoing_call(mut self, has_ongoing_call: bool) -> Self {
        self.has_ongoing_call = has_ongoing_call;
        self
    }
}
