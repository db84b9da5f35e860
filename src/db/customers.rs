use crate::db::errors::RepositoryError;
use crate::db::DbConnection;
use crate::models::customer::{Customer, NewCustomer};
use crate::models::order::Order;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use log::error;

#[derive(Clone)]
pub struct CustomerOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl CustomerOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    pub fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("create_customer: failed to acquire DB connection: {}", e);
            e
        })?;

        use crate::db::schema::customers::dsl::*;

        diesel::insert_into(customers)
            .values(&new_customer)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "create_customer: error inserting customer with email '{}': {}",
                    new_customer.email, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    /// Absent customers are not an error; callers render `None` as JSON null.
    pub fn get_customer(&self, customer_id: i32) -> Result<Option<Customer>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_customer: failed to acquire DB connection for id {}: {}",
                customer_id, e
            );
            e
        })?;

        use crate::db::schema::customers::dsl::*;
        customers
            .find(customer_id)
            .first::<Customer>(conn.connection())
            .optional()
            .map_err(|e| {
                error!(
                    "get_customer: error fetching customer with id {}: {}",
                    customer_id, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn get_customer_orders(
        &self,
        search_customer_id: i32,
    ) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_customer_orders: failed to acquire DB connection for customer_id {}: {}",
                search_customer_id, e
            );
            e
        })?;

        use crate::db::schema::orders::dsl::*;
        orders
            .filter(customer_id.eq(search_customer_id))
            .load::<Order>(conn.connection())
            .map_err(|e| {
                error!(
                    "get_customer_orders: error loading orders for customer_id {}: {}",
                    search_customer_id, e
                );
                RepositoryError::DatabaseError(e)
            })
    }
}
