//! # Nutriverse Favorites
//!
//! Client-owned favorites bookkeeping.
//!
//! The favorites set is an externally-owned key-value entry: a JSON array of
//! food `id` strings persisted under one fixed storage key. It belongs
//! entirely to the presentation layer; the query engine in `nutriverse-core`
//! neither reads nor writes it, and no server-side persistence exists.
//!
//! [`FavoritesStore`] generalises that contract for native clients: the
//! storage key becomes a JSON file in a client-chosen directory, and
//! same-process collaborators can register observers that are notified after
//! every committed change (the subscribe/notify counterpart of the browser's
//! same-tab storage event).

use std::path::{Path, PathBuf};

/// Storage key under which the favorites set is persisted.
pub const STORAGE_KEY: &str = "nutriverse-favorites";

/// Observer invoked with the full id set after every committed change.
pub type Subscriber = Box<dyn Fn(&[String]) + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("failed to read favorites file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write favorites file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to parse favorites file: {0}")]
    Deserialization(serde_json::Error),
    #[error("failed to serialize favorites: {0}")]
    Serialization(serde_json::Error),
}

pub type FavoritesResult<T> = std::result::Result<T, FavoritesError>;

/// A client-local favorites set with subscribe/notify semantics.
///
/// Ids keep their insertion order, matching the array the browser layer
/// stores. All mutating operations persist before notifying subscribers, so
/// observers only ever see committed state.
pub struct FavoritesStore {
    path: PathBuf,
    ids: Vec<String>,
    subscribers: Vec<Subscriber>,
}

impl FavoritesStore {
    /// Opens the favorites set stored in `dir`, creating an empty set when no
    /// file exists yet.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError::FileRead` when an existing file cannot be
    /// read, or `FavoritesError::Deserialization` when its contents are not a
    /// JSON string array.
    pub fn open(dir: &Path) -> FavoritesResult<Self> {
        let path = dir.join(format!("{STORAGE_KEY}.json"));
        let ids = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(FavoritesError::Deserialization)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(FavoritesError::FileRead(e)),
        };

        Ok(Self {
            path,
            ids,
            subscribers: Vec::new(),
        })
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All favorited ids, insertion order preserved.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// True when `id` is in the set.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Registers an observer called with the full id set after every
    /// committed change.
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Adds `id` to the set. Returns `false` without touching storage when
    /// the id is already present.
    ///
    /// # Errors
    ///
    /// Returns a `FavoritesError` when persisting fails; the in-memory set is
    /// left unchanged in that case.
    pub fn add(&mut self, id: &str) -> FavoritesResult<bool> {
        if self.contains(id) {
            return Ok(false);
        }
        self.ids.push(id.to_owned());
        if let Err(e) = self.persist() {
            self.ids.pop();
            return Err(e);
        }
        self.notify();
        Ok(true)
    }

    /// Removes `id` from the set. Returns `false` without touching storage
    /// when the id is absent.
    ///
    /// # Errors
    ///
    /// Returns a `FavoritesError` when persisting fails; the in-memory set is
    /// left unchanged in that case.
    pub fn remove(&mut self, id: &str) -> FavoritesResult<bool> {
        let Some(position) = self.ids.iter().position(|existing| existing == id) else {
            return Ok(false);
        };
        let removed = self.ids.remove(position);
        if let Err(e) = self.persist() {
            self.ids.insert(position, removed);
            return Err(e);
        }
        self.notify();
        Ok(true)
    }

    /// Adds `id` when absent, removes it when present. Returns `true` when
    /// the id is now favorited.
    ///
    /// # Errors
    ///
    /// Returns a `FavoritesError` when persisting fails.
    pub fn toggle(&mut self, id: &str) -> FavoritesResult<bool> {
        if self.contains(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    /// Empties the set.
    ///
    /// # Errors
    ///
    /// Returns a `FavoritesError` when persisting fails.
    pub fn clear(&mut self) -> FavoritesResult<()> {
        if self.ids.is_empty() {
            return Ok(());
        }
        let previous = std::mem::take(&mut self.ids);
        if let Err(e) = self.persist() {
            self.ids = previous;
            return Err(e);
        }
        self.notify();
        Ok(())
    }

    fn persist(&self) -> FavoritesResult<()> {
        let json = serde_json::to_string(&self.ids).map_err(FavoritesError::Serialization)?;
        std::fs::write(&self.path, json).map_err(FavoritesError::FileWrite)
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.ids);
        }
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("path", &self.path)
            .field("ids", &self.ids)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
