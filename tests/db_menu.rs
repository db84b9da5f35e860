mod common;

use platter::db::{MenuOperations, RepositoryError};
use platter::models::menu::{NewMenuItem, UpdateMenuItem};

fn empty_update() -> UpdateMenuItem {
    UpdateMenuItem {
        name: None,
        price: None,
        is_available: None,
    }
}

#[actix_rt::test]
async fn add_menu_item_echoes_fields_and_assigns_id() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let menu_ops = MenuOperations::new(pool.clone());

    let item = menu_ops
        .add_menu_item(NewMenuItem {
            restaurant_id: fixtures.restaurant_id,
            name: "Pizza".to_string(),
            price: 10.0,
            is_available: true,
        })
        .expect("add menu item");

    assert!(item.id > 0);
    assert_eq!(item.restaurant_id, fixtures.restaurant_id);
    assert_eq!(item.name, "Pizza");
    assert_eq!(item.price, 10.0);
    assert!(item.is_available);
}

#[actix_rt::test]
async fn update_menu_item_applies_partial_fields() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let menu_ops = MenuOperations::new(pool.clone());
    let item_id = fixtures.menu_item_ids[0];

    let updated = menu_ops
        .update_menu_item(
            item_id,
            UpdateMenuItem {
                price: Some(12.5),
                ..empty_update()
            },
        )
        .expect("update price");

    assert_eq!(updated.price, 12.5);
    assert_eq!(updated.name, "Margherita Pizza");
    assert!(updated.is_available);

    let updated = menu_ops
        .update_menu_item(
            item_id,
            UpdateMenuItem {
                is_available: Some(false),
                ..empty_update()
            },
        )
        .expect("update availability");

    assert_eq!(updated.price, 12.5);
    assert!(!updated.is_available);
}

#[actix_rt::test]
async fn update_menu_item_empty_patch_is_noop() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let menu_ops = MenuOperations::new(pool.clone());
    let item_id = fixtures.menu_item_ids[1];

    let unchanged = menu_ops
        .update_menu_item(item_id, empty_update())
        .expect("empty patch");
    assert_eq!(unchanged.id, item_id);
    assert_eq!(unchanged.name, "Garlic Bread");
    assert_eq!(unchanged.price, 4.5);
}

#[actix_rt::test]
async fn update_menu_item_missing_id_is_not_found() {
    let pool = common::setup_pool();
    let menu_ops = MenuOperations::new(pool.clone());

    let err = menu_ops
        .update_menu_item(
            9999,
            UpdateMenuItem {
                price: Some(1.0),
                ..empty_update()
            },
        )
        .expect_err("missing item");
    assert!(matches!(err, RepositoryError::NotFound(_)));

    let err = menu_ops
        .update_menu_item(9999, empty_update())
        .expect_err("missing item, empty patch");
    assert!(matches!(err, RepositoryError::NotFound(_)));
}
