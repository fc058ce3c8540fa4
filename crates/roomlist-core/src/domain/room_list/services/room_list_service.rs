// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Range;

use anyhow::Result;

use crate::domain::room_list::models::RoomListFiltersState;
use crate::domain::shared::models::RoomId;

/// The side effects of the home screen that are carried out by the SDK.
#[cfg_attr(test, mockall::automock)]
pub trait RoomListService: Send + Sync {
    fn set_unread_flag(&self, room_id: &RoomId, is_unread: bool) -> Result<()>;
    /// Sends a read receipt for the latest event and clears the unread flag.
    fn mark_as_read(&self, room_id: &RoomId) -> Result<()>;
    fn leave_room(&self, room_id: &RoomId) -> Result<()>;

    /// Lets the SDK extend its sliding window around the rows the user is looking at.
    fn update_visible_range(&self, range: Range<usize>, is_scrolling: bool);
    fn apply_filters(&self, filters: &RoomListFiltersState, search_query: &str);
}
