//! Lineups: a named utility throw for an agent on a map.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::connection::DbConnection;
use crate::prelude::*;
use crate::schema::lineups;
use crate::store::{Record, Repository};
use crate::validation::alphanumeric;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::lineups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct LineUp {
    pub id: Uuid,
    pub name: String,
    /// Link to a screenshot or clip.
    pub media: Option<String>,
    pub side_id: Uuid,
    pub agent: String,
    pub role_id: Uuid,
    /// Author of the lineup.
    pub user_id: Option<Uuid>,
    pub site_id: Uuid,
    pub map: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new lineup.
///
/// `user_id` cannot be set by clients; the web layer fills it with the
/// authenticated author.
#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[diesel(table_name = crate::schema::lineups)]
#[serde(rename_all = "camelCase")]
pub struct LineUpCreate {
    #[validate(length(min = 3, max = 50), custom = "alphanumeric")]
    pub name: String,
    #[serde(default)]
    pub media: Option<String>,
    pub side_id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub agent: String,
    pub role_id: Uuid,
    #[serde(default, skip_deserializing)]
    pub user_id: Option<Uuid>,
    pub site_id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub map: String,
}

/// Changes to an existing lineup. The author never changes.
#[derive(AsChangeset, Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[diesel(table_name = crate::schema::lineups)]
#[serde(rename_all = "camelCase")]
pub struct LineUpPatch {
    #[validate(length(min = 3, max = 50), custom = "alphanumeric")]
    pub name: Option<String>,
    pub media: Option<String>,
    pub side_id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub agent: Option<String>,
    pub role_id: Option<Uuid>,
    pub site_id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub map: Option<String>,
}

impl LineUpCreate {
    pub fn save(self, connection: &DbConnection) -> Result<LineUp> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::insert_into(lineups::table)
            .values(&self)
            .returning(LineUp::as_returning())
            .get_result(conn)?)
    }
}

impl LineUp {
    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(lineups::table
            .select(LineUp::as_select())
            .order(lineups::created_at.asc())
            .load(conn)?)
    }

    pub fn fetch_by_id(target: &Uuid, connection: &DbConnection) -> Result<Self> {
        let conn = &mut connection.pool.get()?;
        Ok(LineUp::by_id(target)
            .select(LineUp::as_select())
            .get_result(conn)?)
    }

    pub fn update(target: &Uuid, patch: &LineUpPatch, connection: &DbConnection) -> Result<Self> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::update(LineUp::by_id(target))
            .set((patch, lineups::updated_at.eq(Utc::now())))
            .returning(LineUp::as_returning())
            .get_result(conn)?)
    }

    pub fn delete(target: &Uuid, connection: &DbConnection) -> Result<()> {
        let conn = &mut connection.pool.get()?;
        match diesel::delete(LineUp::by_id(target)).execute(conn)? {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }

    #[diesel::dsl::auto_type(no_type_alias)]
    pub fn by_id(target: &Uuid) -> _ {
        lineups::table.filter(lineups::id.eq(target))
    }

}

impl Record for LineUp {
    type Create = LineUpCreate;
    type Patch = LineUpPatch;

    const NAME: &'static str = "lineup";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Repository<LineUp> for DbConnection {
    fn create(&self, item: LineUpCreate) -> Result<LineUp> {
        item.save(self)
    }

    fn fetch_all(&self) -> Result<Vec<LineUp>> {
        LineUp::fetch_all(self)
    }

    fn fetch_by_id(&self, target: &Uuid) -> Result<LineUp> {
        LineUp::fetch_by_id(target, self)
    }

    fn update(&self, target: &Uuid, patch: LineUpPatch) -> Result<LineUp> {
        LineUp::update(target, &patch, self)
    }

    fn delete(&self, target: &Uuid) -> Result<()> {
        LineUp::delete(target, self)
    }
}
