// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use roomlist_markup::{AttributedRun, AttributedString, TextAttributes};
pub use url::Url;

pub use home_screen_actions::{
    HomeScreenViewAction, HomeScreenViewModelAction, HomeScreenViewUserMenuAction,
};
pub use home_screen_room::{Badges, HomeScreenRoom, PLACEHOLDER_LAST_MESSAGE};
pub use home_screen_view_state::{
    AlertInfo, BindingUpdate, HomeScreenViewState, HomeScreenViewStateBindings,
    LeaveRoomAlertItem, SecurityBannerMode, PLACEHOLDER_ROOMS_COUNT,
};
pub use row_id::RowId;

pub use crate::domain::{
    room_list::models::{
        RoomListError, RoomListFilter, RoomListFiltersState, RoomListMode, RoomListUpdate,
        RoomSummary, RoomSummaryEntry, RoomSummaryProviderState,
    },
    settings::models::HomeScreenSettings,
    shared::models::{RoomId, UserId},
};

mod home_screen_actions;
mod home_screen_room;
mod home_screen_view_state;
mod row_id;
