mod common;

use platter::db::{DbConnection, OrderOperations, ReportOperations};
use platter::enums::orders::OrderItemRequest;
use platter::models::order::OrderStatus;
use platter::test_utils::{insert_customer, insert_restaurant, seed_menu_item};

fn item(menu_item_id: i32, quantity: i32) -> OrderItemRequest {
    OrderItemRequest {
        menu_item_id,
        quantity,
    }
}

#[actix_rt::test]
async fn restaurant_revenue_is_zero_without_orders() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let report_ops = ReportOperations::new(pool.clone());

    let revenue = report_ops
        .restaurant_revenue(fixtures.restaurant_id)
        .expect("revenue");
    assert_eq!(revenue, 0.0);
}

#[actix_rt::test]
async fn restaurant_revenue_sums_orders_of_every_status() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let report_ops = ReportOperations::new(pool.clone());
    let order_ops = OrderOperations::new(pool.clone());

    let pizza = fixtures.menu_item_ids[0];
    let first = order_ops
        .create_order(
            fixtures.customer_id,
            fixtures.restaurant_id,
            vec![item(pizza, 2)],
        )
        .expect("order 1");
    let second = order_ops
        .create_order(
            fixtures.customer_id,
            fixtures.restaurant_id,
            vec![item(pizza, 1)],
        )
        .expect("order 2");

    // Cancellation does not remove an order from the revenue sum.
    order_ops
        .update_order_status(second.id, OrderStatus::Cancelled)
        .expect("cancel order 2");

    let revenue = report_ops
        .restaurant_revenue(fixtures.restaurant_id)
        .expect("revenue");
    assert_eq!(revenue, first.total_price + second.total_price);
}

#[actix_rt::test]
async fn restaurant_revenue_scoped_to_restaurant() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let report_ops = ReportOperations::new(pool.clone());
    let order_ops = OrderOperations::new(pool.clone());

    let (other_restaurant, other_item) = {
        let mut conn = DbConnection::new(&pool).expect("db connection");
        let restaurant_id =
            insert_restaurant(conn.connection(), "Other Kitchen", "Block B").expect("restaurant");
        let item_id = seed_menu_item(conn.connection(), restaurant_id, "Ramen", 9.0, true)
            .expect("menu item");
        (restaurant_id, item_id)
    };

    order_ops
        .create_order(fixtures.customer_id, other_restaurant, vec![item(other_item, 2)])
        .expect("order elsewhere");

    let revenue = report_ops
        .restaurant_revenue(fixtures.restaurant_id)
        .expect("revenue");
    assert_eq!(revenue, 0.0);

    let other_revenue = report_ops
        .restaurant_revenue(other_restaurant)
        .expect("other revenue");
    assert_eq!(other_revenue, 18.0);
}

#[actix_rt::test]
async fn top_menu_items_sorted_desc_and_capped_at_five() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let report_ops = ReportOperations::new(pool.clone());
    let order_ops = OrderOperations::new(pool.clone());

    // Six distinct items with strictly increasing quantities so the
    // expected cutoff is unambiguous.
    let mut item_ids = fixtures.menu_item_ids.clone();
    {
        let mut conn = DbConnection::new(&pool).expect("db connection");
        for index in 0..4 {
            let id = seed_menu_item(
                conn.connection(),
                fixtures.restaurant_id,
                &format!("Special {index}"),
                5.0,
                true,
            )
            .expect("seed item");
            item_ids.push(id);
        }
    }

    for (index, &menu_item_id) in item_ids.iter().enumerate() {
        order_ops
            .create_order(
                fixtures.customer_id,
                fixtures.restaurant_id,
                vec![item(menu_item_id, (index as i32) + 1)],
            )
            .expect("create order");
    }

    let top = report_ops.top_menu_items().expect("top items");
    assert_eq!(top.len(), 5);

    let quantities: Vec<i64> = top.iter().map(|row| row.sum.quantity).collect();
    assert_eq!(quantities, vec![6, 5, 4, 3, 2]);
    // The least-ordered item fell off the report.
    assert!(top.iter().all(|row| row.menu_item_id != item_ids[0]));
}

#[actix_rt::test]
async fn top_menu_items_sums_quantity_across_orders() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let report_ops = ReportOperations::new(pool.clone());
    let order_ops = OrderOperations::new(pool.clone());

    let pizza = fixtures.menu_item_ids[0];
    let bread = fixtures.menu_item_ids[1];

    order_ops
        .create_order(
            fixtures.customer_id,
            fixtures.restaurant_id,
            vec![item(pizza, 2), item(bread, 1)],
        )
        .expect("order 1");
    order_ops
        .create_order(
            fixtures.customer_id,
            fixtures.restaurant_id,
            vec![item(pizza, 3)],
        )
        .expect("order 2");

    let top = report_ops.top_menu_items().expect("top items");
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].menu_item_id, pizza);
    assert_eq!(top[0].sum.quantity, 5);
    assert_eq!(top[1].menu_item_id, bread);
    assert_eq!(top[1].sum.quantity, 1);
}

#[actix_rt::test]
async fn top_customers_counts_orders_and_merges_details() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let report_ops = ReportOperations::new(pool.clone());
    let order_ops = OrderOperations::new(pool.clone());

    let second_customer = {
        let mut conn = DbConnection::new(&pool).expect("db connection");
        insert_customer(
            conn.connection(),
            "Customer Two",
            "customer2@example.com",
            "555-0102",
            "2 Test Street",
        )
        .expect("insert customer")
    };

    let pizza = fixtures.menu_item_ids[0];
    for _ in 0..3 {
        order_ops
            .create_order(
                fixtures.customer_id,
                fixtures.restaurant_id,
                vec![item(pizza, 1)],
            )
            .expect("order for first customer");
    }
    order_ops
        .create_order(second_customer, fixtures.restaurant_id, vec![item(pizza, 1)])
        .expect("order for second customer");

    let top = report_ops.top_customers().expect("top customers");
    assert_eq!(top.len(), 2);

    assert_eq!(top[0].id, Some(fixtures.customer_id));
    assert_eq!(top[0].name.as_deref(), Some("Customer One"));
    assert_eq!(top[0].email.as_deref(), Some("customer1@example.com"));
    assert_eq!(top[0].total_orders, 3);

    assert_eq!(top[1].id, Some(second_customer));
    assert_eq!(top[1].total_orders, 1);
}

#[actix_rt::test]
async fn top_customers_empty_without_orders() {
    let (pool, _fixtures) = common::setup_pool_with_fixtures();
    let report_ops = ReportOperations::new(pool.clone());

    let top = report_ops.top_customers().expect("top customers");
    assert!(top.is_empty());
}
