use crate::db::errors::RepositoryError;
use crate::db::schema::menu_items::dsl::*;
use crate::db::DbConnection;
use crate::models::menu::{MenuItem, NewMenuItem, UpdateMenuItem};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error;
use log::error;

#[derive(Clone)]
pub struct MenuOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl MenuOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    pub fn add_menu_item(&self, menu_item: NewMenuItem) -> Result<MenuItem, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("add_menu_item: failed to acquire DB connection: {}", e);
            e
        })?;

        diesel::insert_into(menu_items)
            .values(&menu_item)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "add_menu_item: error inserting menu item '{}': {}",
                    menu_item.name, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn update_menu_item(
        &self,
        itemid: i32,
        changed_menu_item: UpdateMenuItem,
    ) -> Result<MenuItem, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "update_menu_item: failed to acquire DB connection for id {}: {}",
                itemid, e
            );
            e
        })?;

        // An empty patch is a no-op; diesel rejects a changeset with no
        // fields, so answer with the current record instead.
        if changed_menu_item.is_empty() {
            return menu_items
                .find(itemid)
                .first::<MenuItem>(conn.connection())
                .map_err(|e| match e {
                    Error::NotFound => RepositoryError::NotFound(format!("menu_items: {itemid}")),
                    other => RepositoryError::DatabaseError(other),
                });
        }

        diesel::update(menu_items.filter(id.eq(itemid)))
            .set(&changed_menu_item)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "update_menu_item: error updating menu item with id {}: {}",
                    itemid, e
                );
                match e {
                    Error::NotFound => RepositoryError::NotFound(format!("menu_items: {itemid}")),
                    other => RepositoryError::DatabaseError(other),
                }
            })
    }
}
