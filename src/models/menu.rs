use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Queryable, Selectable, Debug, Identifiable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::menu_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub price: f64,
    pub is_available: bool,
}

#[derive(Insertable, Debug, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::menu_items)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub restaurant_id: i32,
    pub name: String,
    pub price: f64,
    pub is_available: bool,
}

/// Mutable subset of a menu item. `restaurant_id` is deliberately absent:
/// items never move between restaurants through this surface.
#[derive(Debug, Clone, Serialize, Deserialize, AsChangeset, ToSchema)]
#[diesel(table_name = crate::db::schema::menu_items)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItem {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub is_available: Option<bool>,
}

impl UpdateMenuItem {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.is_available.is_none()
    }
}
