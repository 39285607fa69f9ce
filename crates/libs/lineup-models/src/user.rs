//! User accounts.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::connection::DbConnection;
use crate::prelude::*;
use crate::schema::users;
use crate::store::{Record, Repository, UserRepository};

/// A registered user.
///
/// `hash` holds the salted password hash and is never serialized.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    pub hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user. Carries the already hashed password.
#[derive(Insertable, Debug, Clone, PartialEq, ToSchema)]
#[diesel(table_name = crate::schema::users)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub hash: String,
}

/// Profile changes to an existing user.
#[derive(AsChangeset, Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[diesel(table_name = crate::schema::users)]
pub struct UserPatch {
    #[validate(length(min = 1, max = 50))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

impl UserCreate {
    pub fn save(self, connection: &DbConnection) -> Result<User> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::insert_into(users::table)
            .values(&self)
            .returning(User::as_returning())
            .get_result(conn)?)
    }
}

impl User {
    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(users::table
            .select(User::as_select())
            .order(users::created_at.asc())
            .load(conn)?)
    }

    pub fn fetch_by_id(target: &Uuid, connection: &DbConnection) -> Result<Self> {
        let conn = &mut connection.pool.get()?;
        Ok(User::by_id(target)
            .select(User::as_select())
            .get_result(conn)?)
    }

    pub fn fetch_by_email(target: &str, connection: &DbConnection) -> Result<Self> {
        let conn = &mut connection.pool.get()?;
        Ok(User::by_email(target)
            .select(User::as_select())
            .get_result(conn)?)
    }

    pub fn update(target: &Uuid, patch: &UserPatch, connection: &DbConnection) -> Result<Self> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::update(User::by_id(target))
            .set((patch, users::updated_at.eq(Utc::now())))
            .returning(User::as_returning())
            .get_result(conn)?)
    }

    pub fn delete(target: &Uuid, connection: &DbConnection) -> Result<()> {
        let conn = &mut connection.pool.get()?;
        match diesel::delete(User::by_id(target)).execute(conn)? {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }

    #[diesel::dsl::auto_type(no_type_alias)]
    pub fn by_id(target: &Uuid) -> _ {
        users::table.filter(users::id.eq(target))
    }

    #[diesel::dsl::auto_type(no_type_alias)]
    pub fn by_email(target: &str) -> _ {
        users::table.filter(users::email.eq(target))
    }
}

impl Record for User {
    type Create = UserCreate;
    type Patch = UserPatch;

    const NAME: &'static str = "user";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Repository<User> for DbConnection {
    fn create(&self, item: UserCreate) -> Result<User> {
        item.save(self)
    }

    fn fetch_all(&self) -> Result<Vec<User>> {
        User::fetch_all(self)
    }

    fn fetch_by_id(&self, target: &Uuid) -> Result<User> {
        User::fetch_by_id(target, self)
    }

    fn update(&self, target: &Uuid, patch: UserPatch) -> Result<User> {
        User::update(target, &patch, self)
    }

    fn delete(&self, target: &Uuid) -> Result<()> {
        User::delete(target, self)
    }
}

impl UserRepository for DbConnection {
    fn fetch_by_email(&self, target: &str) -> Result<User> {
        User::fetch_by_email(target, self)
    }
}
