// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomListFilter {
    Unreads,
    People,
    Rooms,
    Favourites,
}

impl RoomListFilter {
    /// Filters that can never match the same room at once.
    fn is_exclusive_with(&self, other: &RoomListFilter) -> bool {
        matches!(
            (self, other),
            (RoomListFilter::People, RoomListFilter::Rooms)
                | (RoomListFilter::Rooms, RoomListFilter::People)
        )
    }
}

/// The filters the user enabled, in activation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomListFiltersState {
    active_filters: Vec<RoomListFilter>,
}

impl RoomListFiltersState {
    pub fn active_filters(&self) -> &[RoomListFilter] {
        &self.active_filters
    }

    pub fn is_filtering(&self) -> bool {
        !self.active_filters.is_empty()
    }

    pub fn is_active(&self, filter: RoomListFilter) -> bool {
        self.active_filters.contains(&filter)
    }

    /// Activates `filter`, deactivating any filter that excludes it.
    pub fn activate(&mut self, filter: RoomListFilter) {
        if self.is_active(filter) {
            return;
        }
        self.active_filters
            .retain(|active| !active.is_exclusive_with(&filter));
        self.active_filters.push(filter);
    }

    pub fn deactivate(&mut self, filter: RoomListFilter) {
        self.active_filters.retain(|active| *active != filter);
    }

    pub fn clear(&mut self) {
        self.active_filters.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_parse_and_print() -> Result<(), strum::ParseError> {
        for filter in RoomListFilter::iter() {
            assert_eq!(RoomListFilter::from_str(&filter.to_string())?, filter);
        }
        assert_eq!(RoomListFilter::from_str("favourites")?, RoomListFilter::Favourites);
        assert!(RoomListFilter::from_str("Favourites").is_err());
        Ok(())
    }

    #[test]
    fn test_people_and_rooms_are_exclusive() {
        let mut state = RoomListFiltersState::default();
        assert!(!state.is_filtering());

        state.activate(RoomListFilter::Unreads);
        state.activate(RoomListFilter::People);
        state.activate(RoomListFilter::Rooms);

        assert_eq!(
            state.active_filters(),
            &[RoomListFilter::Unreads, RoomListFilter::Rooms]
        );

        state.deactivate(RoomListFilter::Unreads);
        assert_eq!(state.active_filters(), &[RoomListFilter::Rooms]);

        state.clear();
        assert!(!state.is_filtering());
    }

    #[test]
    fn test_activating_twice_keeps_a_single_entry() {
        let mut state = RoomListFiltersState::default();
        state.activate(RoomListFilter::Favourites);
        state.activate(RoomListFilter::Favourites);
        assert_eq!(state.active_filters(), &[RoomListFilter::Favourites]);
    }
}
