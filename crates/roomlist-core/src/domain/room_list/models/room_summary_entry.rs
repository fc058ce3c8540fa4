// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::RoomSummary;

/// A single slot of the room list as delivered by the room summary provider.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomSummaryEntry {
    /// The slot exists but its summary hasn't been loaded yet.
    Empty,
    Filled(RoomSummary),
    /// The summary is stale and its row must not reuse any cached state.
    Invalidated(RoomSummary),
}
