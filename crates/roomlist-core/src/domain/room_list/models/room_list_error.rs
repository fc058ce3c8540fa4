// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::RoomId;

#[derive(thiserror::Error, Debug)]
pub enum RoomListError {
    #[error("Room {0} is not part of the room list.")]
    UnknownRoom(RoomId),
    #[error("Marking rooms as unread is disabled.")]
    MarkAsUnreadDisabled,
    #[error(transparent)]
    Sdk(#[from] anyhow::Error),
}
