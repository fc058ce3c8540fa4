// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room_id::RoomId;
pub use user_id::UserId;

mod room_id;
mod user_id;
