// roomlist/roomlist-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::Mutex;
use uuid::Uuid;

/// Generates the ids of rows that aren't backed by a room.
pub trait IDProvider: Send + Sync {
    fn new_id(&self) -> String;
}

/// Random ids, unique across the lifetime of the app.
#[derive(Debug, Default, Clone, Copy)]
pub struct UUIDProvider;

impl UUIDProvider {
    pub const fn new() -> Self {
        UUIDProvider
    }
}

impl IDProvider for UUIDProvider {
    fn new_id(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}

/// Hands out `{prefix}-1`, `{prefix}-2`, …
pub struct IncrementingIDProvider {
    prefix: String,
    next_id: Mutex<u64>,
}

impl IncrementingIDProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, first_id: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next_id: Mutex::new(first_id),
        }
    }

    /// Makes the next generated id the first one again.
    pub fn reset(&self) {
        *self.next_id.lock() = 1;
    }
}

impl IDProvider for IncrementingIDProvider {
    fn new_id(&self) -> String {
        let mut next_id = self.next_id.lock();
        let id = format!("{}-{}", self.prefix, *next_id);
        *next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_incrementing_id_provider() {
        let provider = IncrementingIDProvider::new("placeholder");
        assert_eq!(provider.new_id(), "placeholder-1");
        assert_eq!(provider.new_id(), "placeholder-2");
        provider.reset();
        assert_eq!(provider.new_id(), "placeholder-1");
    }

    #[test]
    fn test_incrementing_id_provider_with_offset() {
        let provider = IncrementingIDProvider::starting_at("row", 40);
        assert_eq!(provider.new_id(), "row-40");
        assert_eq!(provider.new_id(), "row-41");
    }

    #[test]
    fn test_uuid_provider_returns_unique_ids() {
        let provider = UUIDProvider::new();
        let ids = (0..20).map(|_| provider.new_id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 20);
        assert!(ids.iter().all(|id| id.len() == 36));
    }
}
