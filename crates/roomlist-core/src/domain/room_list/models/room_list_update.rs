// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::{RoomSummaryEntry, RoomSummaryProviderState};

/// Changes pushed by the SDK that affect the home screen room list.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomListUpdate {
    /// The account data migration started or finished.
    MigrationStateChanged { is_migrating: bool },
    LoadingStateChanged(RoomSummaryProviderState),
    /// The full, ordered list of entries. Replaces whatever was delivered before.
    EntriesChanged(Vec<RoomSummaryEntry>),
    InvitesChanged { has_pending: bool, has_unread: bool },
}
