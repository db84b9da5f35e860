mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use platter::db::OrderOperations;
use platter::enums::orders::OrderItemRequest;
use platter::test_utils::build_test_pool;
use serde_json::{json, Value};

#[actix_rt::test]
async fn post_customers_echoes_fields_with_id() {
    let (app, _fixtures, _db_url) = common::setup_api_app().await;

    let req = test::TestRequest::post()
        .uri("/customers")
        .set_json(json!({
            "name": "A",
            "email": "a@x.com",
            "phoneNumber": "555-0100",
            "address": "42 Elm Street"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["id"].as_i64().expect("id") > 0);
    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["phoneNumber"], "555-0100");
    assert_eq!(body["address"], "42 Elm Street");
}

#[actix_rt::test]
async fn post_customers_malformed_body_is_bad_request() {
    let (app, _fixtures, _db_url) = common::setup_api_app().await;

    let req = test::TestRequest::post()
        .uri("/customers")
        .set_json(json!({ "name": "A" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn get_customer_returns_null_for_missing_id() {
    let (app, _fixtures, _db_url) = common::setup_api_app().await;

    let req = test::TestRequest::get().uri("/customers/9999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.is_null(), "missing customer should serialize as null");
}

#[actix_rt::test]
async fn get_customer_returns_record() {
    let (app, fixtures, _db_url) = common::setup_api_app().await;

    let req = test::TestRequest::get()
        .uri(&format!("/customers/{}", fixtures.customer_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"].as_i64(), Some(fixtures.customer_id as i64));
    assert_eq!(body["email"], "customer1@example.com");
}

#[actix_rt::test]
async fn get_customer_orders_lists_orders_without_items() {
    let (app, fixtures, db_url) = common::setup_api_app().await;
    let pool = build_test_pool(&db_url);
    let order_ops = OrderOperations::new(pool.clone());

    order_ops
        .create_order(
            fixtures.customer_id,
            fixtures.restaurant_id,
            vec![OrderItemRequest {
                menu_item_id: fixtures.menu_item_ids[0],
                quantity: 2,
            }],
        )
        .expect("create order");

    let req = test::TestRequest::get()
        .uri(&format!("/customers/{}/orders", fixtures.customer_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let orders = body.as_array().expect("orders array");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["totalPrice"].as_f64(), Some(20.0));
    assert_eq!(orders[0]["status"], "Placed");
    assert!(
        orders[0].get("orderItems").is_none(),
        "listing does not embed line items"
    );
}

#[actix_rt::test]
async fn get_customer_orders_empty_for_unknown_customer() {
    let (app, _fixtures, _db_url) = common::setup_api_app().await;

    let req = test::TestRequest::get()
        .uri("/customers/9999/orders")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.as_array().expect("array").is_empty());
}

#[actix_rt::test]
async fn get_top_customers_ranked_by_order_count() {
    let (app, fixtures, db_url) = common::setup_api_app().await;
    let pool = build_test_pool(&db_url);
    let order_ops = OrderOperations::new(pool.clone());

    let second_customer = {
        let mut conn = platter::db::DbConnection::new(&pool).expect("db connection");
        platter::test_utils::insert_customer(
            conn.connection(),
            "Customer Two",
            "customer2@example.com",
            "555-0102",
            "2 Test Street",
        )
        .expect("insert customer")
    };

    for _ in 0..2 {
        order_ops
            .create_order(
                second_customer,
                fixtures.restaurant_id,
                vec![OrderItemRequest {
                    menu_item_id: fixtures.menu_item_ids[0],
                    quantity: 1,
                }],
            )
            .expect("order for second customer");
    }
    order_ops
        .create_order(
            fixtures.customer_id,
            fixtures.restaurant_id,
            vec![OrderItemRequest {
                menu_item_id: fixtures.menu_item_ids[1],
                quantity: 1,
            }],
        )
        .expect("order for first customer");

    // The literal `/customers/top` segment must not be swallowed by the
    // `/customers/{id}` capture.
    let req = test::TestRequest::get().uri("/customers/top").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let top = body.as_array().expect("top array");
    assert_eq!(top.len(), 2);
    assert_eq!(top[0]["id"].as_i64(), Some(second_customer as i64));
    assert_eq!(top[0]["name"], "Customer Two");
    assert_eq!(top[0]["email"], "customer2@example.com");
    assert_eq!(top[0]["totalOrders"].as_i64(), Some(2));
    assert_eq!(top[1]["totalOrders"].as_i64(), Some(1));
}

#[actix_rt::test]
async fn get_top_customers_empty_without_orders() {
    let (app, _fixtures, _db_url) = common::setup_api_app().await;

    let req = test::TestRequest::get().uri("/customers/top").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.as_array().expect("array").is_empty());
}
