// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, error, info, instrument, warn};

use crate::app::deps::{DynIDProvider, DynRoomListService, HomeScreenDependencies};
use crate::domain::room_list::models::{
    RoomListError, RoomListMode, RoomListUpdate, RoomSummaryEntry, RoomSummaryProviderState,
};
use crate::domain::settings::models::HomeScreenSettings;
use crate::domain::shared::models::{RoomId, UserId};
use crate::dtos::{
    AlertInfo, BindingUpdate, HomeScreenRoom, HomeScreenViewAction, HomeScreenViewModelAction,
    HomeScreenViewState, HomeScreenViewUserMenuAction, LeaveRoomAlertItem, SecurityBannerMode,
};

use super::RoomListRowMapper;

const LEAVE_ROOM_FAILED_ALERT_ID: &str = "leave-room-failed";

/// Owns the home screen state and keeps it in sync with the room list of the SDK.
pub struct HomeScreenService {
    id_provider: DynIDProvider,
    room_list_service: DynRoomListService,
    settings: HomeScreenSettings,
    state: HomeScreenViewState,
    entries: Vec<RoomSummaryEntry>,
    provider_state: RoomSummaryProviderState,
    is_migrating: bool,
}

impl HomeScreenService {
    pub fn new(
        user_id: impl Into<UserId>,
        settings: HomeScreenSettings,
        deps: HomeScreenDependencies,
    ) -> Self {
        let mut state = HomeScreenViewState::new(user_id);
        state.mark_as_unread_enabled = settings.mark_as_unread_enabled;
        state.should_show_filters = settings.room_list_filters_enabled;

        Self {
            id_provider: deps.id_provider,
            room_list_service: deps.room_list_service,
            settings,
            state,
            entries: vec![],
            provider_state: RoomSummaryProviderState::NotLoaded,
            is_migrating: false,
        }
    }

    pub fn state(&self) -> &HomeScreenViewState {
        &self.state
    }

    pub fn settings(&self) -> &HomeScreenSettings {
        &self.settings
    }
}

impl HomeScreenService {
    pub fn handle_room_list_update(&mut self, update: RoomListUpdate) {
        match update {
            RoomListUpdate::MigrationStateChanged { is_migrating } => {
                self.is_migrating = is_migrating;
            }
            RoomListUpdate::LoadingStateChanged(provider_state) => {
                self.provider_state = provider_state;
            }
            RoomListUpdate::EntriesChanged(entries) => {
                self.entries = entries;
                self.update_rooms();
            }
            RoomListUpdate::InvitesChanged {
                has_pending,
                has_unread,
            } => {
                self.state.has_pending_invitations = has_pending;
                self.state.has_unread_pending_invitations = has_unread;
            }
        }
        self.update_room_list_mode();
    }

    pub fn update_settings(&mut self, settings: HomeScreenSettings) {
        let needs_remapping =
            settings.hide_unread_messages_badge != self.settings.hide_unread_messages_badge;

        self.state.mark_as_unread_enabled = settings.mark_as_unread_enabled;
        self.state.should_show_filters = settings.room_list_filters_enabled;
        self.settings = settings;

        if needs_remapping {
            self.update_rooms();
        }
    }

    /// The only way for the render layer to change the bindings of the state.
    pub fn update_bindings(&mut self, update: BindingUpdate) {
        let affects_query = update.affects_room_list_query();
        self.state.apply_binding(update);

        if affects_query {
            let bindings = self.state.bindings();
            self.room_list_service
                .apply_filters(&bindings.filters_state, &bindings.search_query);
            self.update_room_list_mode();
        }
    }

    #[instrument(skip(self))]
    pub fn process_view_action(
        &mut self,
        action: HomeScreenViewAction,
    ) -> Result<Option<HomeScreenViewModelAction>, RoomListError> {
        let action = match action {
            HomeScreenViewAction::SelectRoom { room_id } => {
                self.state.selected_room_id = Some(room_id.clone());
                Some(HomeScreenViewModelAction::PresentRoom { room_id })
            }
            HomeScreenViewAction::ShowRoomDetails { room_id } => {
                Some(HomeScreenViewModelAction::PresentRoomDetails { room_id })
            }
            HomeScreenViewAction::LeaveRoom { room_id } => {
                self.start_leave_room_process(room_id)?;
                None
            }
            HomeScreenViewAction::ConfirmLeaveRoom { room_id } => {
                self.leave_room(&room_id)?;
                Some(HomeScreenViewModelAction::RoomLeft { room_id })
            }
            HomeScreenViewAction::UserMenu { action } => Some(match action {
                HomeScreenViewUserMenuAction::Settings => {
                    HomeScreenViewModelAction::PresentSettingsScreen
                }
                HomeScreenViewUserMenuAction::Feedback => {
                    HomeScreenViewModelAction::PresentFeedbackScreen
                }
                HomeScreenViewUserMenuAction::Logout => HomeScreenViewModelAction::Logout,
            }),
            HomeScreenViewAction::StartChat => {
                Some(HomeScreenViewModelAction::PresentStartChatScreen)
            }
            HomeScreenViewAction::VerifySession => {
                Some(HomeScreenViewModelAction::PresentSessionVerificationScreen)
            }
            HomeScreenViewAction::ConfirmRecoveryKey => {
                Some(HomeScreenViewModelAction::PresentSecureBackupSettings)
            }
            HomeScreenViewAction::SkipSessionVerification
            | HomeScreenViewAction::SkipRecoveryKeyConfirmation => {
                self.state.security_banner_mode = SecurityBannerMode::Dismissed;
                None
            }
            HomeScreenViewAction::UpdateVisibleItemRange {
                range,
                is_scrolling,
            } => {
                self.room_list_service
                    .update_visible_range(range, is_scrolling);
                None
            }
            HomeScreenViewAction::SelectInvites => {
                Some(HomeScreenViewModelAction::PresentInvitesScreen)
            }
            HomeScreenViewAction::GlobalSearch => {
                Some(HomeScreenViewModelAction::PresentGlobalSearch)
            }
            HomeScreenViewAction::MarkRoomAsUnread { room_id } => {
                if !self.settings.mark_as_unread_enabled {
                    return Err(RoomListError::MarkAsUnreadDisabled);
                }
                self.room_list_service
                    .set_unread_flag(&room_id, true)
                    .map_err(|err| {
                        error!("Failed marking room {room_id} as unread. {}", err.to_string());
                        err
                    })?;
                None
            }
            HomeScreenViewAction::MarkRoomAsRead { room_id } => {
                self.room_list_service
                    .mark_as_read(&room_id)
                    .map_err(|err| {
                        error!("Failed marking room {room_id} as read. {}", err.to_string());
                        err
                    })?;
                None
            }
        };

        Ok(action)
    }
}

impl HomeScreenService {
    fn update_rooms(&mut self) {
        let hide_unread_messages_badge = self.settings.hide_unread_messages_badge;

        let rooms = self
            .entries
            .iter()
            .map(|entry| match entry {
                RoomSummaryEntry::Empty => HomeScreenRoom::placeholder(self.id_provider.as_ref()),
                RoomSummaryEntry::Filled(summary) => {
                    RoomListRowMapper::map(summary, false, hide_unread_messages_badge)
                }
                RoomSummaryEntry::Invalidated(summary) => {
                    RoomListRowMapper::map(summary, true, hide_unread_messages_badge)
                }
            })
            .collect::<Vec<_>>();

        debug!("Replacing room list with {} rows.", rooms.len());
        self.state.replace_rooms(rooms);
    }

    fn update_room_list_mode(&mut self) {
        let mode = RoomListMode::resolve(
            self.is_migrating,
            self.provider_state,
            !self.state.rooms().is_empty(),
            self.state.is_filtering(),
        );

        if mode == self.state.room_list_mode() {
            return;
        }

        info!("Room list mode changed. {}", mode);
        self.state.set_room_list_mode(mode);
    }

    fn start_leave_room_process(&mut self, room_id: RoomId) -> Result<(), RoomListError> {
        let Some(room) = self.state.room(&room_id) else {
            warn!("Cannot leave room {room_id} since it is not in the room list.");
            return Err(RoomListError::UnknownRoom(room_id));
        };

        let item = LeaveRoomAlertItem {
            room_name: room.name().to_string(),
            room_id,
        };
        self.state
            .apply_binding(BindingUpdate::LeaveRoomAlertItem(Some(item)));
        Ok(())
    }

    fn leave_room(&mut self, room_id: &RoomId) -> Result<(), RoomListError> {
        self.state
            .apply_binding(BindingUpdate::LeaveRoomAlertItem(None));

        if let Err(err) = self.room_list_service.leave_room(room_id) {
            error!("Failed leaving room {room_id}. {}", err.to_string());
            self.state
                .apply_binding(BindingUpdate::AlertInfo(Some(AlertInfo {
                    id: LEAVE_ROOM_FAILED_ALERT_ID.to_string(),
                    title: "Failed leaving room".to_string(),
                    message: Some(err.to_string()),
                })));
            return Err(err.into());
        }

        if self.state.selected_room_id.as_ref() == Some(room_id) {
            self.state.selected_room_id = None;
        }
        Ok(())
    }
}
