// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::room_list::models::RoomSummary;
use crate::dtos::{Badges, HomeScreenRoom, RowId};

pub struct RoomListRowMapper;

impl RoomListRowMapper {
    /// Builds the row for `summary`.
    ///
    /// Muting hides the mention badge and stops mentions and notifications from highlighting
    /// the row. A room that was explicitly marked as unread is highlighted regardless.
    pub fn map(
        summary: &RoomSummary,
        invalidated: bool,
        hide_unread_messages_badge: bool,
    ) -> HomeScreenRoom {
        assert!(
            !summary.id.is_empty(),
            "Room summaries are expected to carry a room id"
        );

        let id = if invalidated {
            RowId::Invalidated(summary.id.clone())
        } else {
            RowId::Room(summary.id.clone())
        };

        let has_unread_messages = !hide_unread_messages_badge && summary.has_unread_messages;

        let badges = Badges {
            is_dot_shown: has_unread_messages
                || summary.has_unread_mentions
                || summary.has_unread_notifications
                || summary.is_marked_unread,
            is_mention_shown: summary.has_unread_mentions && !summary.is_muted,
            is_mute_shown: summary.is_muted,
            is_call_shown: summary.has_ongoing_call,
        };

        let is_highlighted = summary.is_marked_unread
            || (!summary.is_muted
                && (summary.has_unread_notifications || summary.has_unread_mentions));

        HomeScreenRoom {
            id,
            room_id: Some(summary.id.clone()),
            name: summary.name.clone(),
            badges,
            is_highlighted,
            timestamp: summary.last_message_formatted_timestamp.clone(),
            last_message: summary.last_message.clone(),
            avatar_url: summary.avatar_url.clone(),
            is_placeholder: false,
        }
    }
}
