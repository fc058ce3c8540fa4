// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::{dtos, services};
pub use domain::room_list::services::RoomListService;

pub mod app;
pub mod deps;

pub(crate) mod domain;
