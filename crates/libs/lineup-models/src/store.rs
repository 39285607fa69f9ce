//! Store traits.
//!
//! Handlers only ever talk to a [`Store`]; which backend sits behind it is
//! decided once at startup.

use uuid::Uuid;

use crate::{lineup::LineUp, prelude::*, side::Side, site::Site, user::User};

/// A stored record kind and the payloads used to create and modify it.
pub trait Record: Sized + Send + Sync + 'static {
    /// Insert payload.
    type Create: Send + 'static;
    /// Partial update payload.
    type Patch: Send + 'static;

    /// Collection name, used in logs.
    const NAME: &'static str;

    fn id(&self) -> Uuid;
}

/// Single-document operations over one record kind.
pub trait Repository<T: Record>: Send + Sync {
    fn create(&self, item: T::Create) -> Result<T>;

    fn fetch_all(&self) -> Result<Vec<T>>;

    /// Fails with [`Error::NotFound`] when no record has this id.
    fn fetch_by_id(&self, id: &Uuid) -> Result<T>;

    /// Applies `patch` and returns the updated record.
    fn update(&self, id: &Uuid, patch: T::Patch) -> Result<T>;

    /// Fails with [`Error::NotFound`] when no record has this id.
    fn delete(&self, id: &Uuid) -> Result<()>;
}

/// User access, including the lookup by unique email used at login.
pub trait UserRepository: Repository<User> {
    /// Fails with [`Error::NotFound`] when no user has this email.
    fn fetch_by_email(&self, email: &str) -> Result<User>;
}

/// Every collection the API serves.
pub trait Store:
    UserRepository + Repository<LineUp> + Repository<Side> + Repository<Site>
{
}

impl<T> Store for T where
    T: UserRepository + Repository<LineUp> + Repository<Side> + Repository<Site>
{
}
