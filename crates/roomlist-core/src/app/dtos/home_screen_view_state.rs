// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::borrow::Cow;

use url::Url;

use crate::deps::{IDProvider, UUIDProvider};
use crate::domain::room_list::models::{RoomListFilter, RoomListFiltersState, RoomListMode};
use crate::domain::shared::models::{RoomId, UserId};

use super::HomeScreenRoom;

pub const PLACEHOLDER_ROOMS_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecurityBannerMode {
    #[default]
    None,
    Dismissed,
    SessionVerification,
    RecoveryKeyConfirmation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertInfo {
    pub id: String,
    pub title: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRoomAlertItem {
    pub room_id: RoomId,
    pub room_name: String,
}

/// State that the render layer writes back, like the contents of the search field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeScreenViewStateBindings {
    pub filters_state: RoomListFiltersState,
    pub search_query: String,
    pub is_search_field_focused: bool,
    pub alert_info: Option<AlertInfo>,
    pub leave_room_alert_item: Option<LeaveRoomAlertItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BindingUpdate {
    SearchQuery(String),
    SearchFieldFocused(bool),
    ActivateFilter(RoomListFilter),
    DeactivateFilter(RoomListFilter),
    ClearFilters,
    AlertInfo(Option<AlertInfo>),
    LeaveRoomAlertItem(Option<LeaveRoomAlertItem>),
}

impl BindingUpdate {
    /// Whether the update changes which rooms the SDK should deliver.
    pub fn affects_room_list_query(&self) -> bool {
        matches!(
            self,
            BindingUpdate::SearchQuery(_)
                | BindingUpdate::ActivateFilter(_)
                | BindingUpdate::DeactivateFilter(_)
                | BindingUpdate::ClearFilters
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeScreenViewState {
    pub user_id: UserId,
    pub user_display_name: Option<String>,
    pub user_avatar_url: Option<Url>,

    pub security_banner_mode: SecurityBannerMode,
    pub requires_extra_account_setup: bool,

    pub should_show_filters: bool,
    pub mark_as_unread_enabled: bool,

    pub has_pending_invitations: bool,
    pub has_unread_pending_invitations: bool,

    pub selected_room_id: Option<RoomId>,

    rooms: Vec<HomeScreenRoom>,
    room_list_mode: RoomListMode,
    bindings: HomeScreenViewStateBindings,
}

impl HomeScreenViewState {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            user_display_name: None,
            user_avatar_url: None,
            security_banner_mode: SecurityBannerMode::None,
            requires_extra_account_setup: false,
            should_show_filters: false,
            mark_as_unread_enabled: false,
            has_pending_invitations: false,
            has_unread_pending_invitations: false,
            selected_room_id: None,
            rooms: vec![],
            room_list_mode: RoomListMode::Skeletons,
            bindings: HomeScreenViewStateBindings::default(),
        }
    }
}

impl HomeScreenViewState {
    pub fn rooms(&self) -> &[HomeScreenRoom] {
        &self.rooms
    }

    pub fn replace_rooms(&mut self, rooms: Vec<HomeScreenRoom>) {
        self.rooms = rooms;
    }

    pub fn room(&self, room_id: &RoomId) -> Option<&HomeScreenRoom> {
        self.rooms
            .iter()
            .find(|room| room.room_id() == Some(room_id))
    }

    pub fn room_list_mode(&self) -> RoomListMode {
        self.room_list_mode
    }

    pub fn set_room_list_mode(&mut self, mode: RoomListMode) {
        self.room_list_mode = mode;
    }

    /// The rows to render. While loading these are freshly generated placeholders, `rooms` is
    /// ignored entirely in that case.
    pub fn visible_rooms(&self) -> Cow<'_, [HomeScreenRoom]> {
        self.visible_rooms_with(&UUIDProvider::new())
    }

    pub fn visible_rooms_with(&self, id_provider: &dyn IDProvider) -> Cow<'_, [HomeScreenRoom]> {
        if self.room_list_mode == RoomListMode::Skeletons {
            return Cow::Owned(Self::placeholder_rooms(id_provider));
        }
        Cow::Borrowed(&self.rooms)
    }

    pub fn placeholder_rooms(id_provider: &dyn IDProvider) -> Vec<HomeScreenRoom> {
        (0..PLACEHOLDER_ROOMS_COUNT)
            .map(|_| HomeScreenRoom::placeholder(id_provider))
            .collect()
    }

    /// Hides all rooms while the search field is focused but nothing has been typed yet.
    pub fn should_hide_room_list(&self) -> bool {
        self.bindings.is_search_field_focused && self.bindings.search_query.is_empty()
    }
}

impl HomeScreenViewState {
    pub fn bindings(&self) -> &HomeScreenViewStateBindings {
        &self.bindings
    }

    pub fn apply_binding(&mut self, update: BindingUpdate) {
        let bindings = &mut self.bindings;

        match update {
            BindingUpdate::SearchQuery(query) => bindings.search_query = query,
            BindingUpdate::SearchFieldFocused(is_focused) => {
                bindings.is_search_field_focused = is_focused
            }
            BindingUpdate::ActivateFilter(filter) => bindings.filters_state.activate(filter),
            BindingUpdate::DeactivateFilter(filter) => bindings.filters_state.deactivate(filter),
            BindingUpdate::ClearFilters => bindings.filters_state.clear(),
            BindingUpdate::AlertInfo(alert_info) => bindings.alert_info = alert_info,
            BindingUpdate::LeaveRoomAlertItem(item) => bindings.leave_room_alert_item = item,
        }
    }

    pub(crate) fn is_filtering(&self) -> bool {
        self.bindings.filters_state.is_filtering() || !self.bindings.search_query.is_empty()
    }
}
