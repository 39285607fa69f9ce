//! Bomb site a lineup targets.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::connection::DbConnection;
use crate::prelude::*;
use crate::schema::sites;
use crate::store::{Record, Repository};

/// A site, e.g. A, B or mid.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::sites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Site {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new site.
#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[diesel(table_name = crate::schema::sites)]
pub struct SiteCreate {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}

/// Changes to an existing site.
#[derive(AsChangeset, Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[diesel(table_name = crate::schema::sites)]
pub struct SitePatch {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
}

impl SiteCreate {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            name: site_name.into(),
        }
    }

    pub fn save(self, connection: &DbConnection) -> Result<Site> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::insert_into(sites::table)
            .values(&self)
            .returning(Site::as_returning())
            .get_result(conn)?)
    }
}

impl Site {
    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(sites::table
            .select(Site::as_select())
            .order(sites::created_at.asc())
            .load(conn)?)
    }

    pub fn fetch_by_id(target: &Uuid, connection: &DbConnection) -> Result<Self> {
        let conn = &mut connection.pool.get()?;
        Ok(Site::by_id(target)
            .select(Site::as_select())
            .get_result(conn)?)
    }

    pub fn update(target: &Uuid, patch: &SitePatch, connection: &DbConnection) -> Result<Self> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::update(Site::by_id(target))
            .set((patch, sites::updated_at.eq(Utc::now())))
            .returning(Site::as_returning())
            .get_result(conn)?)
    }

    pub fn delete(target: &Uuid, connection: &DbConnection) -> Result<()> {
        let conn = &mut connection.pool.get()?;
        match diesel::delete(Site::by_id(target)).execute(conn)? {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }

    #[diesel::dsl::auto_type(no_type_alias)]
    pub fn by_id(target: &Uuid) -> _ {
        sites::table.filter(sites::id.eq(target))
    }
}

impl Record for Site {
    type Create = SiteCreate;
    type Patch = SitePatch;

    const NAME: &'static str = "site";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Repository<Site> for DbConnection {
    fn create(&self, item: SiteCreate) -> Result<Site> {
        item.save(self)
    }

    fn fetch_all(&self) -> Result<Vec<Site>> {
        Site::fetch_all(self)
    }

    fn fetch_by_id(&self, target: &Uuid) -> Result<Site> {
        Site::fetch_by_id(target, self)
    }

    fn update(&self, target: &Uuid, patch: SitePatch) -> Result<Site> {
        Site::update(target, &patch, self)
    }

    fn delete(&self, target: &Uuid) -> Result<()> {
        Site::delete(target, self)
    }
}
