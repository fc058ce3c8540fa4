// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;

use super::RoomSummaryProviderState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum RoomListMode {
    #[strum(to_string = "Showing account migration")]
    Migration,
    #[default]
    #[strum(to_string = "Showing placeholders")]
    Skeletons,
    #[strum(to_string = "Showing empty state")]
    Empty,
    #[strum(to_string = "Showing rooms")]
    Rooms,
}

impl RoomListMode {
    /// Picks the mode for the current upstream state.
    ///
    /// `is_filtering` keeps the list in `Rooms` mode while a search or filter has no results,
    /// so that an empty result set isn't confused with an account without rooms.
    pub fn resolve(
        is_migrating: bool,
        provider_state: RoomSummaryProviderState,
        has_rooms: bool,
        is_filtering: bool,
    ) -> Self {
        if is_migrating {
            return Self::Migration;
        }
        if !provider_state.is_loaded() {
            return Self::Skeletons;
        }
        if has_rooms || is_filtering {
            Self::Rooms
        } else {
            Self::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description() {
        assert_eq!(RoomListMode::Migration.to_string(), "Showing account migration");
        assert_eq!(RoomListMode::Skeletons.to_string(), "Showing placeholders");
        assert_eq!(RoomListMode::Empty.to_string(), "Showing empty state");
        assert_eq!(RoomListMode::Rooms.to_string(), "Showing rooms");
    }

    #[test]
    fn test_resolve() {
        let loaded = RoomSummaryProviderState::Loaded {
            total_number_of_rooms: 3,
        };

        assert_eq!(
            RoomListMode::resolve(true, loaded, true, false),
            RoomListMode::Migration
        );
        assert_eq!(
            RoomListMode::resolve(false, RoomSummaryProviderState::NotLoaded, true, false),
            RoomListMode::Skeletons
        );
        assert_eq!(
            RoomListMode::resolve(false, loaded, true, false),
            RoomListMode::Rooms
        );
        assert_eq!(
            RoomListMode::resolve(false, loaded, false, false),
            RoomListMode::Empty
        );
        assert_eq!(
            RoomListMode::resolve(false, loaded, false, true),
            RoomListMode::Rooms
        );
    }
}
