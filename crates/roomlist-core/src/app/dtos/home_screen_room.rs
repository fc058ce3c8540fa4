// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use roomlist_markup::AttributedString;
use url::Url;

use crate::deps::IDProvider;
use crate::domain::shared::models::RoomId;

use super::RowId;

pub const PLACEHOLDER_LAST_MESSAGE: &str = "Hidden last message";
const PLACEHOLDER_NAME: &str = "Placeholder room name";
const PLACEHOLDER_TIMESTAMP: &str = "Now";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Badges {
    pub is_dot_shown: bool,
    pub is_mention_shown: bool,
    pub is_mute_shown: bool,
    pub is_call_shown: bool,
}

/// A display-ready row of the home screen room list.
///
/// Rows are either built from a room summary or are placeholders. They are never modified after
/// creation, a changed summary produces a new row.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeScreenRoom {
    pub(crate) id: RowId,
    pub(crate) room_id: Option<RoomId>,
    pub(crate) name: String,
    pub(crate) badges: Badges,
    pub(crate) is_highlighted: bool,
    pub(crate) timestamp: Option<String>,
    pub(crate) last_message: Option<AttributedString>,
    pub(crate) avatar_url: Option<Url>,
    pub(crate) is_placeholder: bool,
}

impl HomeScreenRoom {
    pub fn placeholder(id_provider: &dyn IDProvider) -> Self {
        Self {
            id: RowId::Placeholder(id_provider.new_id()),
            room_id: None,
            name: PLACEHOLDER_NAME.to_string(),
            badges: Badges::default(),
            is_highlighted: false,
            timestamp: Some(PLACEHOLDER_TIMESTAMP.to_string()),
            last_message: Some(AttributedString::plain(PLACEHOLDER_LAST_MESSAGE)),
            avatar_url: None,
            is_placeholder: true,
        }
    }
}

impl HomeScreenRoom {
    pub fn id(&self) -> &RowId {
        &self.id
    }

    /// The room this row points to. `None` for placeholders.
    pub fn room_id(&self) -> Option<&RoomId> {
        self.room_id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn badges(&self) -> Badges {
        self.badges
    }

    pub fn is_highlighted(&self) -> bool {
        self.is_highlighted
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn last_message(&self) -> Option<&AttributedString> {
        self.last_message.as_ref()
    }

    pub fn avatar_url(&self) -> Option<&Url> {
        self.avatar_url.as_ref()
    }

    pub fn is_placeholder(&self) -> bool {
        self.is_placeholder
    }
}
