// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room_list_error::RoomListError;
pub use room_list_filter::{RoomListFilter, RoomListFiltersState};
pub use room_list_mode::RoomListMode;
pub use room_list_update::RoomListUpdate;
pub use room_summary::RoomSummary;
pub use room_summary_entry::RoomSummaryEntry;
pub use room_summary_provider_state::RoomSummaryProviderState;

mod room_list_error;
mod room_list_filter;
mod room_list_mode;
mod room_list_update;
mod room_summary;
mod room_summary_entry;
mod room_summary_provider_state;
