// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_dependencies::{DynIDProvider, DynRoomListService, HomeScreenDependencies};

mod app_dependencies;
