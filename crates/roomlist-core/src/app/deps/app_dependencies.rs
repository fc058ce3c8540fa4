// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::deps::{IDProvider, UUIDProvider};
use crate::domain::room_list::services::RoomListService;

pub type DynIDProvider = Arc<dyn IDProvider>;
pub type DynRoomListService = Arc<dyn RoomListService>;

pub struct HomeScreenDependencies {
    /// Generates the ids of rows for entries that haven't been loaded yet.
    pub id_provider: DynIDProvider,
    pub room_list_service: DynRoomListService,
}

impl HomeScreenDependencies {
    pub fn new(room_list_service: DynRoomListService) -> Self {
        Self {
            id_provider: Arc::new(UUIDProvider::new()),
            room_list_service,
        }
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }
}
