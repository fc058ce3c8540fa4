// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use roomlist_utils::id_string;

id_string!(
    /// Identifies a room on the homeserver, e.g. `!abc:example.org`.
    RoomId
);

impl RoomId {
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}
