//! Process-local store.
//!
//! Keeps every collection in memory behind a single lock. Serves tests and
//! development runs without a database; contents are lost on exit.

use std::sync::{
    Arc, RwLock, RwLockReadGuard, RwLockWriteGuard,
    atomic::{AtomicUsize, Ordering},
};

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::{
    lineup::LineUp,
    prelude::*,
    side::Side,
    site::Site,
    store::{Record, Repository, UserRepository},
    user::User,
};

#[derive(Debug, Default)]
pub struct Collections {
    users: Vec<User>,
    lineups: Vec<LineUp>,
    sides: Vec<Side>,
    sites: Vec<Site>,
}

/// In-memory [`crate::store::Store`] implementation.
///
/// Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<Collections>>,
    operations: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations served so far.
    pub fn operations(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        self.collections.read().map_err(|_| Error::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        self.collections.write().map_err(|_| Error::Poisoned)
    }
}

/// How a record kind lives inside [`MemoryStore`].
pub trait MemoryRecord: Record + Clone {
    fn collection(collections: &Collections) -> &Vec<Self>;

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self>;

    fn build(item: Self::Create, now: DateTime<Utc>) -> Self;

    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>);

    /// Unique constraints checked before an insert.
    fn check_create(_collections: &Collections, _item: &Self::Create) -> Result<()> {
        Ok(())
    }

    /// Unique constraints checked before an update.
    fn check_patch(_collections: &Collections, _id: &Uuid, _patch: &Self::Patch) -> Result<()> {
        Ok(())
    }
}

impl<T: MemoryRecord> Repository<T> for MemoryStore {
    fn create(&self, item: T::Create) -> Result<T> {
        let mut collections = self.write()?;
        T::check_create(&collections, &item)?;
        let record = T::build(item, Utc::now());
        T::collection_mut(&mut collections).push(record.clone());
        debug!("Created {} {}", T::NAME, record.id());
        Ok(record)
    }

    fn fetch_all(&self) -> Result<Vec<T>> {
        Ok(T::collection(&*self.read()?).clone())
    }

    fn fetch_by_id(&self, id: &Uuid) -> Result<T> {
        T::collection(&*self.read()?)
            .iter()
            .find(|record| record.id() == *id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn update(&self, id: &Uuid, patch: T::Patch) -> Result<T> {
        let mut collections = self.write()?;
        T::check_patch(&collections, id, &patch)?;
        let record = T::collection_mut(&mut collections)
            .iter_mut()
            .find(|record| record.id() == *id)
            .ok_or(Error::NotFound)?;
        record.apply(patch, Utc::now());
        Ok(record.clone())
    }

    fn delete(&self, id: &Uuid) -> Result<()> {
        let mut collections = self.write()?;
        let records = T::collection_mut(&mut collections);
        let before = records.len();
        records.retain(|record| record.id() != *id);
        if records.len() == before {
            return Err(Error::NotFound);
        }
        debug!("Deleted {} {id}", T::NAME);
        Ok(())
    }
}

impl UserRepository for MemoryStore {
    fn fetch_by_email(&self, email: &str) -> Result<User> {
        self.read()?
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned()
            .ok_or(Error::NotFound)
    }
}

impl MemoryRecord for User {
    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.users
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.users
    }

    fn build(item: Self::Create, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: item.username,
            email: item.email,
            hash: item.hash,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        self.updated_at = now;
    }

    fn check_create(collections: &Collections, item: &Self::Create) -> Result<()> {
        if collections.users.iter().any(|user| user.email == item.email) {
            return Err(Error::Duplicate);
        }
        Ok(())
    }

    fn check_patch(collections: &Collections, id: &Uuid, patch: &Self::Patch) -> Result<()> {
        let Some(email) = &patch.email else {
            return Ok(());
        };
        if collections
            .users
            .iter()
            .any(|user| user.id != *id && &user.email == email)
        {
            return Err(Error::Duplicate);
        }
        Ok(())
    }
}

impl MemoryRecord for LineUp {
    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.lineups
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.lineups
    }

    fn build(item: Self::Create, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: item.name,
            media: item.media,
            side_id: item.side_id,
            agent: item.agent,
            role_id: item.role_id,
            user_id: item.user_id,
            site_id: item.site_id,
            map: item.map,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(media) = patch.media {
            self.media = Some(media);
        }
        if let Some(side_id) = patch.side_id {
            self.side_id = side_id;
        }
        if let Some(agent) = patch.agent {
            self.agent = agent;
        }
        if let Some(role_id) = patch.role_id {
            self.role_id = role_id;
        }
        if let Some(site_id) = patch.site_id {
            self.site_id = site_id;
        }
        if let Some(map) = patch.map {
            self.map = map;
        }
        self.updated_at = now;
    }
}

impl MemoryRecord for Side {
    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.sides
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.sides
    }

    fn build(item: Self::Create, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: item.name,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = now;
    }
}

impl MemoryRecord for Site {
    fn collection(collections: &Collections) -> &Vec<Self> {
        &collections.sites
    }

    fn collection_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.sites
    }

    fn build(item: Self::Create, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: item.name,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = now;
    }
}
