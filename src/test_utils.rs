use crate::db::{establish_connection_pool, run_db_migrations, DbConnection, RepositoryError};
use crate::models::customer::NewCustomer;
use crate::models::menu::NewMenuItem;
use crate::models::restaurant::NewRestaurant;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use std::sync::Once;

// Fixture strategy:
// - One customer, one restaurant, two available menu items.
// - Unavailable items and extra customers are created inside the tests
//   that need them.
static TEST_THREADS_GUARD: Once = Once::new();

fn ensure_single_threaded_tests() {
    TEST_THREADS_GUARD.call_once(|| {
        let threads = test_threads_from_args().or_else(|| std::env::var("RUST_TEST_THREADS").ok());
        if threads.as_deref() != Some("1") {
            panic!(
                "Tests must run with --test-threads=1 or RUST_TEST_THREADS=1 because every test truncates the shared database."
            );
        }
    });
}

fn test_threads_from_args() -> Option<String> {
    let mut args = std::env::args();
    while let Some(arg) = args.next() {
        if arg == "--test-threads" {
            return args.next();
        }
        if let Some(value) = arg.strip_prefix("--test-threads=") {
            return Some(value.to_string());
        }
    }
    None
}

pub fn init_test_env() {
    ensure_single_threaded_tests();
}

pub fn build_test_pool(database_url: &str) -> Pool<ConnectionManager<PgConnection>> {
    let pool = establish_connection_pool(database_url);
    run_db_migrations(pool.clone()).expect("Unable to run migrations");
    pool
}

pub fn reset_db(pool: &Pool<ConnectionManager<PgConnection>>) -> Result<(), RepositoryError> {
    let mut conn = DbConnection::new(pool)?;
    diesel::sql_query(
        "TRUNCATE TABLE order_items, orders, menu_items, restaurants, customers \
         RESTART IDENTITY CASCADE",
    )
    .execute(conn.connection())
    .map_err(RepositoryError::DatabaseError)?;
    Ok(())
}

pub struct TestFixtures {
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub menu_item_ids: Vec<i32>,
}

pub fn seed_basic_fixtures(
    pool: &Pool<ConnectionManager<PgConnection>>,
) -> Result<TestFixtures, RepositoryError> {
    let mut conn = DbConnection::new(pool)?;

    let customer_id = insert_customer(
        conn.connection(),
        "Customer One",
        "customer1@example.com",
        "555-0101",
        "1 Test Street",
    )?;
    let restaurant_id = insert_restaurant(conn.connection(), "Test Kitchen", "Block A")?;
    let pizza_id = seed_menu_item(
        conn.connection(),
        restaurant_id,
        "Margherita Pizza",
        10.0,
        true,
    )?;
    let bread_id = seed_menu_item(conn.connection(), restaurant_id, "Garlic Bread", 4.5, true)?;

    Ok(TestFixtures {
        customer_id,
        restaurant_id,
        menu_item_ids: vec![pizza_id, bread_id],
    })
}

pub fn insert_customer(
    conn: &mut PgConnection,
    name_val: &str,
    email_val: &str,
    phone_number_val: &str,
    address_val: &str,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::customers::dsl::*;

    let new_customer = NewCustomer {
        name: name_val.to_string(),
        email: email_val.to_string(),
        phone_number: phone_number_val.to_string(),
        address: address_val.to_string(),
    };

    diesel::insert_into(customers)
        .values(&new_customer)
        .returning(id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}

pub fn insert_restaurant(
    conn: &mut PgConnection,
    name_val: &str,
    location_val: &str,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::restaurants::dsl::*;

    let new_restaurant = NewRestaurant {
        name: name_val.to_string(),
        location: location_val.to_string(),
    };

    diesel::insert_into(restaurants)
        .values(&new_restaurant)
        .returning(id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}

pub fn seed_menu_item(
    conn: &mut PgConnection,
    restaurant_id_val: i32,
    name_val: &str,
    price_val: f64,
    is_available_val: bool,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::menu_items::dsl::*;

    let new_item = NewMenuItem {
        restaurant_id: restaurant_id_val,
        name: name_val.to_string(),
        price: price_val,
        is_available: is_available_val,
    };

    diesel::insert_into(menu_items)
        .values(&new_item)
        .returning(id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}
