//! Map side a lineup is played from.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::connection::DbConnection;
use crate::prelude::*;
use crate::schema::sides;
use crate::store::{Record, Repository};

/// A side, e.g. attack or defense.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::sides)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Side {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new side.
#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[diesel(table_name = crate::schema::sides)]
pub struct SideCreate {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}

/// Changes to an existing side.
#[derive(AsChangeset, Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[diesel(table_name = crate::schema::sides)]
pub struct SidePatch {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
}

impl SideCreate {
    pub fn new(side_name: impl Into<String>) -> Self {
        Self {
            name: side_name.into(),
        }
    }

    pub fn save(self, connection: &DbConnection) -> Result<Side> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::insert_into(sides::table)
            .values(&self)
            .returning(Side::as_returning())
            .get_result(conn)?)
    }
}

impl Side {
    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(sides::table
            .select(Side::as_select())
            .order(sides::created_at.asc())
            .load(conn)?)
    }

    pub fn fetch_by_id(target: &Uuid, connection: &DbConnection) -> Result<Self> {
        let conn = &mut connection.pool.get()?;
        Ok(Side::by_id(target)
            .select(Side::as_select())
            .get_result(conn)?)
    }

    pub fn update(target: &Uuid, patch: &SidePatch, connection: &DbConnection) -> Result<Self> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::update(Side::by_id(target))
            .set((patch, sides::updated_at.eq(Utc::now())))
            .returning(Side::as_returning())
            .get_result(conn)?)
    }

    pub fn delete(target: &Uuid, connection: &DbConnection) -> Result<()> {
        let conn = &mut connection.pool.get()?;
        match diesel::delete(Side::by_id(target)).execute(conn)? {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }

    #[diesel::dsl::auto_type(no_type_alias)]
    pub fn by_id(target: &Uuid) -> _ {
        sides::table.filter(sides::id.eq(target))
    }
}

impl Record for Side {
    type Create = SideCreate;
    type Patch = SidePatch;

    const NAME: &'static str = "side";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Repository<Side> for DbConnection {
    fn create(&self, item: SideCreate) -> Result<Side> {
        item.save(self)
    }

    fn fetch_all(&self) -> Result<Vec<Side>> {
        Side::fetch_all(self)
    }

    fn fetch_by_id(&self, target: &Uuid) -> Result<Side> {
        Side::fetch_by_id(target, self)
    }

    fn update(&self, target: &Uuid, patch: SidePatch) -> Result<Side> {
        Side::update(target, &patch, self)
    }

    fn delete(&self, target: &Uuid) -> Result<()> {
        Side::delete(target, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_length_is_checked() {
        assert!(SideCreate::new("Attack").validate().is_ok());
        assert!(SideCreate::new("").validate().is_err());
        assert!(SideCreate::new("x".repeat(51)).validate().is_err());
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(SidePatch::default().validate().is_ok());
        let patch = SidePatch {
            name: Some(String::new()),
        };
        assert!(patch.validate().is_err());
    }
}
