// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use home_screen_service::HomeScreenService;
pub use room_list_row_mapper::RoomListRowMapper;

mod home_screen_service;
mod room_list_row_mapper;
