use crate::db::errors::RepositoryError;
use crate::db::schema::restaurants::dsl::*;
use crate::db::DbConnection;
use crate::models::menu::MenuItem;
use crate::models::restaurant::{NewRestaurant, Restaurant};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use log::error;

#[derive(Clone)]
pub struct RestaurantOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl RestaurantOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    pub fn create_restaurant(
        &self,
        new_restaurant: NewRestaurant,
    ) -> Result<Restaurant, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("create_restaurant: failed to acquire DB connection: {}", e);
            e
        })?;

        diesel::insert_into(restaurants)
            .values(&new_restaurant)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "create_restaurant: error inserting restaurant '{}': {}",
                    new_restaurant.name, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn get_all_restaurants(&self) -> Result<Vec<Restaurant>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_all_restaurants: failed to acquire DB connection: {}",
                e
            );
            e
        })?;

        restaurants
            .load::<Restaurant>(conn.connection())
            .map_err(|e| {
                error!("get_all_restaurants: error fetching restaurants: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }

    /// The public menu: only rows with `is_available = true`. Unavailable
    /// items still exist and can still be ordered by id.
    pub fn get_available_menu(
        &self,
        search_restaurant_id: i32,
    ) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_available_menu: failed to acquire DB connection for restaurant_id {}: {}",
                search_restaurant_id, e
            );
            e
        })?;

        use crate::db::schema::menu_items::dsl::*;
        menu_items
            .filter(restaurant_id.eq(search_restaurant_id))
            .filter(is_available.eq(true))
            .load::<MenuItem>(conn.connection())
            .map_err(|e| {
                error!(
                    "get_available_menu: error fetching menu for restaurant_id {}: {}",
                    search_restaurant_id, e
                );
                RepositoryError::DatabaseError(e)
            })
    }
}
