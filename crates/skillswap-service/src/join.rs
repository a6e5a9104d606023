//! Batch join helper used to assemble view models.
//!
//! The pattern is always the same: collect the distinct foreign ids from a
//! set of base rows, fetch the referenced rows in one query, index them by
//! id, then project each base row through the index.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::hash::Hash;

use uuid::Uuid;

use skillswap_core::result::AppResult;
use skillswap_entity::profile::Profile;
use skillswap_entity::skill::Skill;

/// A row that can be looked up by key.
pub trait Keyed {
    /// Key type.
    type Key: Eq + Hash + Copy;

    /// The row's key.
    fn key(&self) -> Self::Key;
}

impl Keyed for Profile {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.user_id
    }
}

impl Keyed for Skill {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

/// Rows indexed by key.
#[derive(Debug, Clone)]
pub struct Lookup<T: Keyed> {
    by_key: HashMap<T::Key, T>,
}

impl<T: Keyed> Lookup<T> {
    /// Index `rows` by key. Later duplicates replace earlier ones.
    pub fn from_rows(rows: impl IntoIterator<Item = T>) -> Self {
        Self {
            by_key: rows.into_iter().map(|row| (row.key(), row)).collect(),
        }
    }

    /// Lookup with no rows.
    pub fn empty() -> Self {
        Self {
            by_key: HashMap::new(),
        }
    }

    /// Row for `key`, if fetched.
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.by_key.get(key)
    }

    /// Number of indexed rows.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Whether no rows were indexed.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Distinct ids referenced by `rows`, in first-seen order.
///
/// `ids_of` may yield several ids per row (e.g. both swap participants).
pub fn distinct_ids<R, K, I, F>(rows: &[R], ids_of: F) -> Vec<K>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
    F: Fn(&R) -> I,
{
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for row in rows {
        for id in ids_of(row) {
            if seen.insert(id) {
                ordered.push(id);
            }
        }
    }
    ordered
}

/// Fetch the rows for `ids` with one call to `fetch` and index them.
///
/// An empty id set skips the fetch entirely.
pub async fn batch_join<T, F, Fut>(ids: Vec<T::Key>, fetch: F) -> AppResult<Lookup<T>>
where
    T: Keyed,
    F: FnOnce(Vec<T::Key>) -> Fut,
    Fut: Future<Output = AppResult<Vec<T>>>,
{
    if ids.is_empty() {
        return Ok(Lookup::empty());
    }
    let rows = fetch(ids).await?;
    Ok(Lookup::from_rows(rows))
}
