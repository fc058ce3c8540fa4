// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Range;

use crate::domain::shared::models::RoomId;

/// Requests the home screen sends to whoever owns navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeScreenViewModelAction {
    PresentRoom { room_id: RoomId },
    PresentRoomDetails { room_id: RoomId },
    RoomLeft { room_id: RoomId },
    PresentSessionVerificationScreen,
    PresentSecureBackupSettings,
    PresentSettingsScreen,
    PresentFeedbackScreen,
    PresentStartChatScreen,
    PresentInvitesScreen,
    PresentGlobalSearch,
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeScreenViewUserMenuAction {
    Settings,
    Feedback,
    Logout,
}

/// User interactions dispatched by the render layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeScreenViewAction {
    SelectRoom { room_id: RoomId },
    ShowRoomDetails { room_id: RoomId },
    LeaveRoom { room_id: RoomId },
    ConfirmLeaveRoom { room_id: RoomId },
    UserMenu { action: HomeScreenViewUserMenuAction },
    StartChat,
    VerifySession,
    ConfirmRecoveryKey,
    SkipSessionVerification,
    SkipRecoveryKeyConfirmation,
    UpdateVisibleItemRange {
        range: Range<usize>,
        is_scrolling: bool,
    },
    SelectInvites,
    GlobalSearch,
    MarkRoomAsUnread { room_id: RoomId },
    MarkRoomAsRead { room_id: RoomId },
}
