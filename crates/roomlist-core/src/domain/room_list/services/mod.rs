// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room_list_service::RoomListService;

#[cfg(test)]
pub use room_list_service::MockRoomListService;

mod room_list_service;
