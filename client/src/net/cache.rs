//! Tag-invalidated response cache for backend reads.
//!
//! DESIGN
//! ======
//! Every read is keyed by endpoint + argument and declares the entity tags it
//! provides. Mutations name the tags they touch, and `invalidate` drops every
//! entry providing one of them so the next read goes back to the network.
//!
//! Values are stored as `serde_json::Value` so a single cache serves every
//! DTO type; callers deserialize on the way out.
//!
//! Each fetch carries a generation number. A read that is invalidated while
//! still in flight cannot repopulate the cache when it lands, which keeps
//! read-your-writes intact for the page that issued the mutation.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

/// Entity categories shared by reads (provides) and mutations (invalidates).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Admin,
    User,
    Flat,
    Booking,
    Payment,
    Review,
}

impl Tag {
    pub const ALL: [Tag; 6] = [Tag::Admin, Tag::User, Tag::Flat, Tag::Booking, Tag::Payment, Tag::Review];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Flat => "flat",
            Self::Booking => "booking",
            Self::Payment => "payment",
            Self::Review => "review",
        }
    }
}

/// Cache key: endpoint name plus its serialized argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub endpoint: &'static str,
    pub arg: String,
}

impl QueryKey {
    #[must_use]
    pub fn new(endpoint: &'static str, arg: impl Into<String>) -> Self {
        Self { endpoint, arg: arg.into() }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.endpoint, self.arg)
    }
}

/// Result of looking a key up before issuing a request.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    /// A cached value is available.
    Fresh(serde_json::Value),
    /// A request for this key is already running.
    InFlight,
    /// Nothing cached; the caller should fetch.
    Miss,
}

#[derive(Clone, Debug)]
enum EntryState {
    Pending,
    Ready(serde_json::Value),
}

#[derive(Clone, Debug)]
struct Entry {
    tags: Vec<Tag>,
    generation: u64,
    state: EntryState,
}

/// In-memory response cache. Single-threaded: the browser owns one instance.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
    next_generation: u64,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lookup(&self, key: &QueryKey) -> Lookup {
        match self.entries.get(key).map(|entry| &entry.state) {
            Some(EntryState::Ready(value)) => Lookup::Fresh(value.clone()),
            Some(EntryState::Pending) => Lookup::InFlight,
            None => Lookup::Miss,
        }
    }

    /// Mark `key` as being fetched and return the generation the eventual
    /// `complete`/`fail` call must present.
    pub fn begin(&mut self, key: QueryKey, tags: &[Tag]) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.entries.insert(key, Entry { tags: tags.to_vec(), generation, state: EntryState::Pending });
        generation
    }

    /// Store a fetched value. Returns `false` when the entry was invalidated
    /// or restarted since `begin`, in which case nothing is stored.
    pub fn complete(&mut self, key: &QueryKey, generation: u64, value: serde_json::Value) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) if entry.generation == generation => {
                entry.state = EntryState::Ready(value);
                true
            }
            _ => false,
        }
    }

    /// Drop a pending entry after a failed fetch so the next read retries.
    pub fn fail(&mut self, key: &QueryKey, generation: u64) {
        if self.entries.get(key).is_some_and(|entry| entry.generation == generation) {
            self.entries.remove(key);
        }
    }

    /// Remove every entry providing any of `tags`. Returns the removed keys.
    pub fn invalidate(&mut self, tags: &[Tag]) -> Vec<QueryKey> {
        let stale: Vec<QueryKey> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.tags.iter().any(|tag| tags.contains(tag)))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &stale {
            self.entries.remove(key);
        }
        stale
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Requests currently running, keyed by query and tagged with the generation
/// that started them. Readers of a key join the running request.
pub struct InFlight<F> {
    entries: HashMap<QueryKey, (u64, F)>,
}

impl<F> Default for InFlight<F> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<F: Clone> InFlight<F> {
    pub fn insert(&mut self, key: QueryKey, generation: u64, fetch: F) {
        self.entries.insert(key, (generation, fetch));
    }

    #[must_use]
    pub fn get(&self, key: &QueryKey) -> Option<F> {
        self.entries.get(key).map(|(_, fetch)| fetch.clone())
    }

    /// Remove `key` if it still belongs to `generation`. A request that was
    /// superseded leaves the newer one in place and returns `false`.
    pub fn finish(&mut self, key: &QueryKey, generation: u64) -> bool {
        if self.entries.get(key).is_some_and(|(current, _)| *current == generation) {
            self.entries.remove(key);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
