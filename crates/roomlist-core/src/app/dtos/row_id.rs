// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use crate::domain::shared::models::RoomId;

const INVALIDATED_PREFIX: &str = "invalidated-";

/// Identifies a row of the room list.
///
/// Rows of invalidated summaries get an id distinct from the room's own id, so that anything
/// the render layer cached for the previous row is thrown away.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowId {
    Room(RoomId),
    Invalidated(RoomId),
    Placeholder(String),
}

impl RowId {
    pub fn room_id(&self) -> Option<&RoomId> {
        match self {
            Self::Room(room_id) | Self::Invalidated(room_id) => Some(room_id),
            Self::Placeholder(_) => None,
        }
    }
}

impl Display for RowId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RowId::Room(room_id) => write!(f, "{room_id}"),
            RowId::Invalidated(room_id) => write!(f, "{INVALIDATED_PREFIX}{room_id}"),
            RowId::Placeholder(id) => write!(f, "{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let room_id = RoomId::from("!r1:example.org");

        assert_eq!(RowId::Room(room_id.clone()).to_string(), "!r1:example.org");
        assert_eq!(
            RowId::Invalidated(room_id.clone()).to_string(),
            "invalidated-!r1:example.org"
        );
        assert_eq!(RowId::Placeholder("p-1".to_string()).to_string(), "p-1");
        assert_ne!(RowId::Room(room_id.clone()), RowId::Invalidated(room_id));
    }
}
