// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomSummaryProviderState {
    #[default]
    NotLoaded,
    Loaded {
        total_number_of_rooms: usize,
    },
}

impl RoomSummaryProviderState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}
