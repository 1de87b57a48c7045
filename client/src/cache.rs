use std::collections::VecDeque;

use waymark_shared::TerritoryProfile;

/// Bounded, insertion-ordered cache of recently entered territories, used to
/// suppress repeat announcements while the player bounces across a border.
///
/// Oldest entries are evicted first; adding the territory that is already the
/// most recent entry is a no-op.
#[derive(Debug, Default)]
pub struct RecentTerritoryCache {
    entries: VecDeque<TerritoryProfile>,
    capacity: usize,
}

impl RecentTerritoryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a territory entry. With capacity 0 nothing is stored.
    pub fn add(&mut self, entry: TerritoryProfile) {
        if self.entries.back() == Some(&entry) {
            return;
        }
        while self.entries.len() >= self.capacity && !self.entries.is_empty() {
            self.entries.pop_front();
        }
        if self.capacity > 0 {
            self.entries.push_back(entry);
        }
    }

    /// Whether the territory was entered recently enough to still be cached.
    pub fn contains(&self, entry: &TerritoryProfile) -> bool {
        self.entries.contains(entry)
    }

    /// Change the capacity, trimming oldest entries as needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.entries.len() > capacity {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
